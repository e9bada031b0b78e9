//! 生成器使用的固定取值
//!
//! 这些表都是有序切片：表的顺序就是类名的输出顺序。

/// 间距倍率，下标即类名中的数字（`m-0` … `m-7`）
pub const SPACING_SCALE: [f64; 8] = [0.0, 0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0];

/// 间距属性 → 类名前缀
pub const SPACING_PROPERTIES: [(&str, &str); 2] = [("margin", "m"), ("padding", "p")];

/// 方向后缀 → 作用的边；`None` 表示四边（直接使用简写属性）
pub const SPACING_DIRECTIONS: [(Option<&str>, &[&str]); 7] = [
    (None, &[]),
    (Some("t"), &["top"]),
    (Some("b"), &["bottom"]),
    (Some("l"), &["left"]),
    (Some("r"), &["right"]),
    (Some("x"), &["left", "right"]),
    (Some("y"), &["top", "bottom"]),
];

/// flex 工具类
pub const FLEX_UTILITIES: &[(&str, &[(&str, &str)])] = &[
    ("flex", &[("display", "flex")]),
    ("inline-flex", &[("display", "inline-flex")]),
    ("flex-row", &[("flex-direction", "row")]),
    ("flex-col", &[("flex-direction", "column")]),
    ("flex-wrap", &[("flex-wrap", "wrap")]),
    ("flex-nowrap", &[("flex-wrap", "nowrap")]),
    ("items-start", &[("align-items", "flex-start")]),
    ("items-center", &[("align-items", "center")]),
    ("items-end", &[("align-items", "flex-end")]),
    ("justify-start", &[("justify-content", "flex-start")]),
    ("justify-center", &[("justify-content", "center")]),
    ("justify-between", &[("justify-content", "space-between")]),
    ("flex-1", &[("flex", "1 1 0%")]),
    ("flex-none", &[("flex", "none")]),
];

/// 颜色 / 边框工具类
pub const COLOR_UTILITIES: &[(&str, &[(&str, &str)])] = &[
    ("border", &[("border", "1px solid currentColor")]),
    ("border-0", &[("border-width", "0")]),
    ("border-transparent", &[("border-color", "transparent")]),
    ("rounded", &[("border-radius", "4px")]),
    ("rounded-lg", &[("border-radius", "12px")]),
    ("rounded-full", &[("border-radius", "9999px")]),
    ("bg-transparent", &[("background-color", "transparent")]),
    ("text-inherit", &[("color", "inherit")]),
];

/// 图片工具类
pub const IMAGE_UTILITIES: &[(&str, &[(&str, &str)])] = &[
    ("img-fluid", &[("max-width", "100%"), ("height", "auto")]),
    (
        "img-cover",
        &[("width", "100%"), ("height", "100%"), ("object-fit", "cover")],
    ),
    (
        "img-contain",
        &[("width", "100%"), ("height", "100%"), ("object-fit", "contain")],
    ),
    ("img-rounded", &[("border-radius", "12px")]),
    ("img-circle", &[("border-radius", "50%"), ("object-fit", "cover")]),
];

/// 浅色背景上的文字颜色
pub const TEXT_ON_LIGHT: &str = "#111827";
/// 深色背景上的文字颜色
pub const TEXT_ON_DARK: &str = "#ffffff";
/// 正文文字颜色
pub const BODY_TEXT: &str = "#1f2937";

/// 暗色模式下的页面背景 / 前景
pub const DARK_BACKGROUND: &str = "#0f172a";
pub const DARK_FOREGROUND: &str = "#e2e8f0";

/// 标题行高与下边距
pub const HEADING_LINE_HEIGHT: &str = "120%";
pub const HEADING_MARGIN_BOTTOM: &str = "0.5em";

/// 组件表面
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_BORDER: &str = "#e5e7eb";
pub const CARD_SHADOW: &str = "0 1px 3px rgba(0, 0, 0, 0.08)";
pub const CARD_SHADOW_HOVER: &str = "0 10px 25px rgba(0, 0, 0, 0.12)";
