use crate::responsive::{from_table, push_responsive};
use crate::values::FLEX_UTILITIES;
use breeze_core::ThemeConfig;
use breeze_css::Stylesheet;

/// flex 工具类：固定表，逐断点复制
pub fn generate_flex(config: &ThemeConfig) -> Stylesheet {
    let mut sheet = Stylesheet::section("Flex");
    push_responsive(&mut sheet, &from_table(FLEX_UTILITIES), &config.breakpoints());
    sheet
}
