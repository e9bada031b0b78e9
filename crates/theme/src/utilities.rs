use crate::flex::generate_flex;
use crate::responsive::from_table;
use crate::spacing::generate_spacing;
use crate::values::{COLOR_UTILITIES, IMAGE_UTILITIES};
use breeze_core::{Declaration, ThemeConfig, UtilityGroup};
use breeze_css::{Stylesheet, UtilityClass};

/// 按配置顺序生成所有已识别的工具类分组
pub fn generate_utilities(config: &ThemeConfig) -> Vec<Stylesheet> {
    config
        .utilities()
        .into_iter()
        .map(|group| generate_utility_group(group, config))
        .collect()
}

pub fn generate_utility_group(group: UtilityGroup, config: &ThemeConfig) -> Stylesheet {
    match group {
        UtilityGroup::Spacing => generate_spacing(config),
        UtilityGroup::Flex => generate_flex(config),
        UtilityGroup::Color => static_section("Color & border", COLOR_UTILITIES),
        UtilityGroup::Image => static_section("Image", IMAGE_UTILITIES),
    }
}

fn static_section(title: &str, table: &[(&str, &[(&str, &str)])]) -> Stylesheet {
    let mut sheet = Stylesheet::section(title);
    for class in from_table(table) {
        sheet.rule(class.to_rule(None));
    }
    sheet
}

/// 过渡工具类，始终输出
pub fn generate_transitions(config: &ThemeConfig) -> Stylesheet {
    let timing = format!("{} {}", config.transition.duration, config.transition.kind);
    let mut sheet = Stylesheet::section("Transition");

    let classes = [
        UtilityClass::new(
            "transition",
            vec![Declaration::new("transition", format!("all {}", timing))],
        ),
        UtilityClass::new(
            "transition-colors",
            vec![Declaration::new(
                "transition",
                format!(
                    "color {t}, background-color {t}, border-color {t}",
                    t = timing
                ),
            )],
        ),
        UtilityClass::new(
            "transition-transform",
            vec![Declaration::new("transition", format!("transform {}", timing))],
        ),
        UtilityClass::new(
            "transition-none",
            vec![Declaration::new("transition", "none")],
        ),
    ];

    for class in &classes {
        sheet.rule(class.to_rule(None));
    }

    sheet
}
