//! 调色板：CSS 变量、颜色工具类、可选的暗色模式覆盖

use crate::values::{DARK_BACKGROUND, DARK_FOREGROUND, TEXT_ON_DARK, TEXT_ON_LIGHT};
use breeze_core::{ColorVariant, Declaration, HexColor, ThemeConfig};
use breeze_css::{StyleRule, Stylesheet, UtilityClass};

/// 生成调色板分区
///
/// 变量与工具类都严格按 `colors` 的配置顺序输出。
pub fn generate_palette(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Palette");

    let root = config
        .colors
        .iter()
        .flat_map(|(name, base)| color_variables(name, &ColorVariant::of(*base)))
        .collect();
    sheet.rule(StyleRule::new(":root", root));

    for name in config.colors.keys() {
        for class in color_classes(name) {
            sheet.rule(class.to_rule(None));
        }
    }

    if config.dark_mode {
        sheet.comment("Dark mode");
        sheet.media(
            "(prefers-color-scheme: dark)",
            dark_mode_rules(config.colors.iter().map(|(name, base)| (name.as_str(), *base))),
        );
    }

    sheet
}

/// `--color-{name}`、`--color-{name}-light`、`--color-{name}-dark`
fn color_variables(name: &str, variant: &ColorVariant) -> Vec<Declaration> {
    vec![
        Declaration::new(format!("--color-{}", name), variant.base.to_string()),
        Declaration::new(format!("--color-{}-light", name), variant.light.to_string()),
        Declaration::new(format!("--color-{}-dark", name), variant.dark.to_string()),
    ]
}

/// 每个颜色的 7 个工具类
fn color_classes(name: &str) -> Vec<UtilityClass> {
    let var = |suffix: &str| format!("var(--color-{}{})", name, suffix);

    let mut classes = Vec::with_capacity(7);

    for suffix in ["", "-light", "-dark"] {
        classes.push(UtilityClass::new(
            format!("text-{}{}", name, suffix),
            vec![Declaration::new("color", var(suffix))],
        ));
    }

    for suffix in ["", "-light", "-dark"] {
        // 深色背景配浅色文字，其余配深色文字
        let foreground = if suffix == "-dark" {
            TEXT_ON_DARK
        } else {
            TEXT_ON_LIGHT
        };
        classes.push(UtilityClass::new(
            format!("bg-{}{}", name, suffix),
            vec![
                Declaration::new("background-color", var(suffix)),
                Declaration::new("color", foreground),
            ],
        ));
    }

    classes.push(UtilityClass::new(
        format!("border-{}", name),
        vec![Declaration::new("border-color", var(""))],
    ));

    classes
}

fn dark_mode_rules<'a>(colors: impl Iterator<Item = (&'a str, HexColor)>) -> Vec<StyleRule> {
    let root = colors
        .flat_map(|(name, base)| color_variables(name, &ColorVariant::dark_mode(base)))
        .collect();

    vec![
        StyleRule::new(":root", root),
        StyleRule::new(
            "body",
            vec![
                Declaration::new("background-color", DARK_BACKGROUND),
                Declaration::new("color", DARK_FOREGROUND),
            ],
        ),
    ]
}
