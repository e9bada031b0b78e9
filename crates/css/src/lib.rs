pub mod emit;
pub mod ir;
pub mod minify;
pub mod prefix;
pub mod selector;

// Re-export main functions
pub use emit::emit_css;
pub use ir::{merge_stylesheets, Block, RuleStyle, StyleRule, Stylesheet, UtilityClass};
pub use minify::minify;
pub use prefix::{autoprefix, PrefixRule, PREFIX_RULES};
pub use selector::{class_selector, escape_class};
