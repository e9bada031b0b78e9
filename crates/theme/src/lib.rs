//! 由主题配置生成各个样式分区
//!
//! 每个生成器都是纯函数：输入不可变的 `ThemeConfig`，输出一个 `Stylesheet` 分区。

pub mod components;
pub mod flex;
pub mod layout;
pub mod palette;
pub mod responsive;
pub mod spacing;
pub mod typography;
pub mod utilities;
pub mod values;

pub use components::{generate_component, generate_components};
pub use flex::generate_flex;
pub use layout::generate_layout;
pub use palette::generate_palette;
pub use spacing::generate_spacing;
pub use typography::generate_typography;
pub use utilities::{generate_transitions, generate_utilities, generate_utility_group};
