//! 组件：button / card / alert
//!
//! 只输出 `components` 中出现的组件，顺序与配置一致。

use crate::values::{CARD_SHADOW, CARD_SHADOW_HOVER, SURFACE, SURFACE_BORDER, TEXT_ON_DARK};
use breeze_core::config::TONES;
use breeze_core::{Component, Declaration, ThemeConfig};
use breeze_css::{StyleRule, Stylesheet};

/// 按配置顺序生成所有已识别的组件，每个组件一个分区
pub fn generate_components(config: &ThemeConfig) -> Vec<Stylesheet> {
    config
        .components()
        .into_iter()
        .map(|component| generate_component(component, config))
        .collect()
}

pub fn generate_component(component: Component, config: &ThemeConfig) -> Stylesheet {
    match component {
        Component::Button => button(config),
        Component::Card => card(config),
        Component::Alert => alert(config),
    }
}

/// `{duration} {easing}`
fn timing(config: &ThemeConfig) -> String {
    format!("{} {}", config.transition.duration, config.transition.kind)
}

fn button(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Component: button");
    let unit = &config.spacing.base_unit;
    let timing = timing(config);

    sheet.rule(StyleRule::new(
        ".btn",
        vec![
            Declaration::new("display", "inline-flex"),
            Declaration::new("align-items", "center"),
            Declaration::new("justify-content", "center"),
            Declaration::new("gap", unit.scale(0.5).to_string()),
            Declaration::new(
                "padding",
                format!("{} {}", unit.scale(0.5), unit.scale(1.5)),
            ),
            Declaration::new("border", "2px solid var(--color-primary)"),
            Declaration::new("border-radius", "9999px"),
            Declaration::new("background-color", "var(--color-primary)"),
            Declaration::new("color", TEXT_ON_DARK),
            Declaration::new("font-family", "inherit"),
            Declaration::new("font-weight", "600"),
            Declaration::new("cursor", "pointer"),
            Declaration::new("user-select", "none"),
            Declaration::new("appearance", "none"),
            Declaration::new(
                "transition",
                format!("background-color {}, transform {}", timing, timing),
            ),
        ],
    ));

    sheet.rule(StyleRule::new(
        ".btn:hover",
        vec![
            Declaration::new("background-color", "var(--color-primary-dark)"),
            Declaration::new("border-color", "var(--color-primary-dark)"),
            Declaration::new("transform", "translateY(-1px)"),
        ],
    ));

    // 反色变体：透明底 + 主色文字，悬停时填充
    sheet.rule(StyleRule::new(
        ".btn-secondary",
        vec![
            Declaration::new("background-color", "transparent"),
            Declaration::new("color", "var(--color-primary)"),
        ],
    ));

    sheet.rule(StyleRule::new(
        ".btn-secondary:hover",
        vec![
            Declaration::new("background-color", "var(--color-primary)"),
            Declaration::new("color", TEXT_ON_DARK),
        ],
    ));

    sheet
}

fn card(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Component: card");
    let unit = &config.spacing.base_unit;
    let timing = timing(config);

    sheet.rule(StyleRule::new(
        ".card",
        vec![
            Declaration::new("background-color", SURFACE),
            Declaration::new("border", format!("1px solid {}", SURFACE_BORDER)),
            Declaration::new("border-radius", "12px"),
            Declaration::new("padding", unit.scale(1.5).to_string()),
            Declaration::new("box-shadow", CARD_SHADOW),
            Declaration::new(
                "transition",
                format!("box-shadow {}, transform {}", timing, timing),
            ),
        ],
    ));

    sheet.rule(StyleRule::new(
        ".card:hover",
        vec![
            Declaration::new("box-shadow", CARD_SHADOW_HOVER),
            Declaration::new("transform", "translateY(-2px)"),
        ],
    ));

    sheet.rule(StyleRule::new(
        ".card + .card",
        vec![Declaration::new("margin-top", unit.to_string())],
    ));

    sheet
}

fn alert(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Component: alert");
    let unit = &config.spacing.base_unit;

    sheet.rule(StyleRule::new(
        ".alert",
        vec![
            Declaration::new("display", "flex"),
            Declaration::new("align-items", "center"),
            Declaration::new("gap", unit.scale(0.75).to_string()),
            Declaration::new(
                "padding",
                format!("{} {}", unit.scale(0.75), unit),
            ),
            Declaration::new("border-left", "4px solid transparent"),
            Declaration::new("border-radius", "8px"),
        ],
    ));

    // 缺少对应颜色的语义色直接跳过，配置校验阶段已给出警告
    for tone in TONES.iter().filter(|tone| config.colors.contains_key(**tone)) {
        sheet.rule(StyleRule::new(
            format!(".alert-{}", tone),
            vec![
                Declaration::new("background-color", format!("var(--color-{}-light)", tone)),
                Declaration::new("border-left-color", format!("var(--color-{})", tone)),
                Declaration::new("color", format!("var(--color-{}-dark)", tone)),
            ],
        ));
    }

    sheet
}
