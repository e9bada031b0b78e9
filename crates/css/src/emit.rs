use crate::ir::{Block, RuleStyle, StyleRule, Stylesheet};

const INDENT: &str = "  ";

/// 生成可读的 CSS 字符串
///
/// 保证：
/// - 块的输出顺序与 `Stylesheet` 中一致
/// - 相同输入产生字节级相同的输出
pub fn emit_css(stylesheet: &Stylesheet) -> String {
    let mut css = String::new();

    for block in &stylesheet.blocks {
        match block {
            Block::Comment(text) => {
                if !css.is_empty() {
                    css.push('\n');
                }
                css.push_str(&format!("/* {} */\n", text));
            }
            Block::Rule(rule) => write_rule(&mut css, rule, ""),
            Block::Media { query, rules } => {
                css.push_str(&format!("@media {} {{\n", query));
                for rule in rules {
                    write_rule(&mut css, rule, INDENT);
                }
                css.push_str("}\n");
            }
        }
    }

    css
}

fn write_rule(css: &mut String, rule: &StyleRule, indent: &str) {
    match rule.style {
        RuleStyle::Compact => {
            css.push_str(&format!("{}{} {{", indent, rule.selector));
            for decl in &rule.declarations {
                css.push_str(&format!(" {}: {};", decl.property, decl.value));
            }
            css.push_str(" }\n");
        }
        RuleStyle::Expanded => {
            css.push_str(&format!("{}{} {{\n", indent, rule.selector));
            for decl in &rule.declarations {
                css.push_str(&format!(
                    "{}{}{}: {};\n",
                    indent, INDENT, decl.property, decl.value
                ));
            }
            css.push_str(&format!("{}}}\n", indent));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::UtilityClass;
    use breeze_core::Declaration;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_expanded_rule() {
        let mut sheet = Stylesheet::new();
        sheet.rule(StyleRule::new(
            ".card",
            vec![
                Declaration::new("padding", "16px"),
                Declaration::new("border-radius", "12px"),
            ],
        ));

        assert_eq!(
            emit_css(&sheet),
            ".card {\n  padding: 16px;\n  border-radius: 12px;\n}\n"
        );
    }

    #[test]
    fn test_emit_compact_in_media() {
        let mut sheet = Stylesheet::new();
        sheet.media(
            "(min-width: 640px)",
            vec![UtilityClass::new(
                "col-6",
                vec![
                    Declaration::new("flex", "0 0 50.0000%"),
                    Declaration::new("max-width", "50.0000%"),
                ],
            )
            .to_rule(Some("sm"))],
        );

        assert_eq!(
            emit_css(&sheet),
            "@media (min-width: 640px) {\n  .sm\\:col-6 { flex: 0 0 50.0000%; max-width: 50.0000%; }\n}\n"
        );
    }

    #[test]
    fn test_emit_sections() {
        let mut sheet = Stylesheet::section("Palette");
        sheet.rule(StyleRule::compact(".a", vec![Declaration::new("color", "red")]));
        sheet.comment("Layout");

        assert_eq!(
            emit_css(&sheet),
            "/* Palette */\n.a { color: red; }\n\n/* Layout */\n"
        );
    }

    #[test]
    fn test_emit_stability() {
        let mut sheet = Stylesheet::new();
        sheet.rule(StyleRule::new(
            ".test",
            vec![
                Declaration::new("padding", "1rem"),
                Declaration::new("margin", "0.5rem"),
            ],
        ));

        assert_eq!(emit_css(&sheet), emit_css(&sheet));
    }
}
