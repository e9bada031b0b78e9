use crate::values::{BODY_TEXT, HEADING_LINE_HEIGHT, HEADING_MARGIN_BOTTOM};
use breeze_core::{format_number, Declaration, ThemeConfig};
use breeze_css::{StyleRule, Stylesheet};

/// 正文与标题的基础排版
pub fn generate_typography(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Typography");

    let line_height = format_number(config.spacing.ratio_line_height * 100.0);

    sheet.rule(StyleRule::new(
        "body",
        vec![
            Declaration::new("font-family", config.typography.main.as_str()),
            Declaration::new("line-height", format!("{}%", line_height)),
            Declaration::new("color", BODY_TEXT),
        ],
    ));

    sheet.rule(StyleRule::new(
        "h1, h2, h3, h4, h5, h6",
        vec![
            Declaration::new("font-family", config.typography.headlines.as_str()),
            Declaration::new("line-height", HEADING_LINE_HEIGHT),
            Declaration::new("margin-bottom", HEADING_MARGIN_BOTTOM),
        ],
    ));

    sheet
}
