pub mod color;
pub mod config;
pub mod error;
pub mod length;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use color::{adjust, adjust_hex, ColorVariant, HexColor};
pub use config::{Component, Layout, Spacing, ThemeConfig, Transition, Typography, UtilityGroup};
pub use error::ConfigError;
pub use length::{format_number, format_percent, Length};
pub use source::{load_from_json, ConfigSource, JsonFileSource};
pub use types::{Breakpoint, Declaration, Diagnostic};
