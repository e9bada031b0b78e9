use regex::Regex;
use std::sync::LazyLock;

/// 选择器中的类名（包含转义字符）
pub(crate) static CLASS_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.((?:\\[0-9a-fA-F]{1,6} ?|\\.|[A-Za-z_-])(?:\\[0-9a-fA-F]{1,6} ?|\\.|[A-Za-z0-9_-])*)")
        .expect("valid class name pattern")
});

/// 转义类名，使其可以直接放在 `.` 后面
///
/// - 字母、数字、`-`、`_` 原样保留
/// - 其他字符前加 `\`（`sm:col-6` → `sm\:col-6`）
/// - 开头的数字按 CSS 规则写成十六进制转义（`2xl:m-0` → `\32 xl\:m-0`）
pub fn escape_class(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }

    escaped
}

/// 类选择器（`.` + 转义后的类名）
pub fn class_selector(name: &str) -> String {
    format!(".{}", escape_class(name))
}
