use crate::responsive::push_responsive;
use crate::values::{SPACING_DIRECTIONS, SPACING_PROPERTIES, SPACING_SCALE};
use breeze_core::{Declaration, Length, ThemeConfig};
use breeze_css::{Stylesheet, UtilityClass};

/// margin / padding 工具类
pub fn generate_spacing(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Spacing");
    push_responsive(
        &mut sheet,
        &spacing_classes(&config.spacing.base_unit),
        &config.breakpoints(),
    );
    sheet
}

/// 属性 × 方向 × 倍率，按这个嵌套顺序输出
///
/// 类名为 `{prefix}[-{direction}]-{index}`，如 `m-0`、`p-x-3`。
pub fn spacing_classes(base_unit: &Length) -> Vec<UtilityClass> {
    let mut classes = Vec::new();

    for (property, prefix) in SPACING_PROPERTIES {
        for (direction, sides) in SPACING_DIRECTIONS {
            for (index, step) in SPACING_SCALE.iter().enumerate() {
                let value = base_unit.scale(*step).to_string();

                let name = match direction {
                    Some(direction) => format!("{}-{}-{}", prefix, direction, index),
                    None => format!("{}-{}", prefix, index),
                };

                let declarations = if sides.is_empty() {
                    vec![Declaration::new(property, value)]
                } else {
                    sides
                        .iter()
                        .map(|side| {
                            Declaration::new(format!("{}-{}", property, side), value.as_str())
                        })
                        .collect()
                };

                classes.push(UtilityClass::new(name, declarations));
            }
        }
    }

    classes
}
