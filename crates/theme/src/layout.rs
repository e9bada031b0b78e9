use crate::responsive::push_responsive;
use breeze_core::{format_percent, Declaration, ThemeConfig};
use breeze_css::{StyleRule, Stylesheet, UtilityClass};

/// 容器、行和栅格列
pub fn generate_layout(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Layout");
    let gutter = config.spacing.base_unit.to_string();

    sheet.rule(StyleRule::new(
        ".container",
        vec![
            Declaration::new("width", "100%"),
            Declaration::new("max-width", config.layout.container.to_string()),
            Declaration::new("margin-left", "auto"),
            Declaration::new("margin-right", "auto"),
            Declaration::new("padding-left", gutter.as_str()),
            Declaration::new("padding-right", gutter.as_str()),
        ],
    ));

    sheet.rule(StyleRule::new(
        ".row",
        vec![
            Declaration::new("display", "flex"),
            Declaration::new("flex-wrap", "wrap"),
            Declaration::new("gap", gutter.as_str()),
        ],
    ));

    push_responsive(
        &mut sheet,
        &column_classes(config.layout.cols),
        &config.breakpoints(),
    );

    sheet
}

/// `col-1` … `col-{cols}`，宽度固定 4 位小数
pub fn column_classes(cols: u32) -> Vec<UtilityClass> {
    (1..=cols)
        .map(|i| {
            let width = format_percent(f64::from(i) / f64::from(cols) * 100.0);
            UtilityClass::new(
                format!("col-{}", i),
                vec![
                    Declaration::new("flex", format!("0 0 {}%", width)),
                    Declaration::new("max-width", format!("{}%", width)),
                ],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::config;
    use breeze_css::emit_css;

    #[test]
    fn test_twelve_columns() {
        let cols = column_classes(12);

        assert_eq!(cols.len(), 12);
        assert_eq!(cols[11].declarations[1].value, "100.0000%");
        assert_eq!(cols[5].declarations[1].value, "50.0000%");
        assert_eq!(cols[3].declarations[0].value, "0 0 33.3333%");
        assert_eq!(cols[0].declarations[1].value, "8.3333%");
    }

    #[test]
    fn test_responsive_columns() {
        let css = emit_css(&generate_layout(&config()));

        assert!(css.contains(".col-6 { flex: 0 0 50.0000%; max-width: 50.0000%; }"));
        let media = css.find("@media (min-width: 640px) {").unwrap();
        let sm_col = css.find(".sm\\:col-6 { flex: 0 0 50.0000%; max-width: 50.0000%; }").unwrap();
        assert!(media < sm_col);
        assert!(css.contains(".md\\:col-12 { flex: 0 0 100.0000%; max-width: 100.0000%; }"));
    }

    #[test]
    fn test_container_and_row() {
        let css = emit_css(&generate_layout(&config()));

        assert!(css.contains("  max-width: 1200px;\n"));
        assert!(css.contains("  padding-left: 16px;\n"));
        assert!(css.contains(".row {\n  display: flex;\n  flex-wrap: wrap;\n  gap: 16px;\n}\n"));
    }

    #[test]
    fn test_class_count() {
        // 12 列 × (基础 + sm + md)
        assert_eq!(generate_layout(&config()).class_names().len(), 2 + 12 * 3);
    }
}
