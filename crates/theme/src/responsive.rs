use breeze_core::{Breakpoint, Declaration};
use breeze_css::{Block, Stylesheet, UtilityClass};

/// 输出一组工具类：先输出无前缀版本，再按断点顺序在各自的 `@media` 块中
/// 输出带 `{prefix}:` 前缀的版本，声明文本保持一致
pub fn push_responsive(
    sheet: &mut Stylesheet,
    classes: &[UtilityClass],
    breakpoints: &[Breakpoint],
) {
    for class in classes {
        sheet.rule(class.to_rule(None));
    }

    for breakpoint in breakpoints {
        let rules = classes
            .iter()
            .map(|class| class.to_rule(Some(&breakpoint.prefix)))
            .collect();
        sheet.push(Block::min_width(breakpoint, rules));
    }
}

/// 从静态表构造工具类
pub fn from_table(table: &[(&str, &[(&str, &str)])]) -> Vec<UtilityClass> {
    table
        .iter()
        .map(|(name, decls)| {
            UtilityClass::new(
                *name,
                decls
                    .iter()
                    .map(|(property, value)| Declaration::new(*property, *value))
                    .collect(),
            )
        })
        .collect()
}
