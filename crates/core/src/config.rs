//! 主题配置
//!
//! 映射类型统一使用 `IndexMap`：插入顺序就是输出顺序，输出的字节级一致性依赖于此。

use crate::color::HexColor;
use crate::error::ConfigError;
use crate::length::Length;
use crate::types::{Breakpoint, Diagnostic};
use indexmap::{IndexMap, IndexSet};
use phf::phf_map;
use serde::{Deserialize, Serialize};

/// 可选组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Button,
    Card,
    Alert,
}

/// 可选工具类分组
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityGroup {
    Spacing,
    Flex,
    Color,
    Image,
}

static COMPONENTS: phf::Map<&'static str, Component> = phf_map! {
    "button" => Component::Button,
    "card" => Component::Card,
    "alert" => Component::Alert,
};

static UTILITY_GROUPS: phf::Map<&'static str, UtilityGroup> = phf_map! {
    "spacing" => UtilityGroup::Spacing,
    "flex" => UtilityGroup::Flex,
    "color" => UtilityGroup::Color,
    "image" => UtilityGroup::Image,
};

impl Component {
    pub fn from_name(name: &str) -> Option<Self> {
        COMPONENTS.get(name.trim()).copied()
    }
}

impl UtilityGroup {
    pub fn from_name(name: &str) -> Option<Self> {
        UTILITY_GROUPS.get(name.trim()).copied()
    }
}

/// alert 组件依赖的语义色
pub const TONES: [&str; 4] = ["primary", "success", "warning", "danger"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub main: String,
    pub headlines: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub container: Length,
    pub cols: u32,
    #[serde(default)]
    pub breakpoints: IndexMap<String, Length>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacing {
    pub base_unit: Length,
    #[serde(default = "default_line_height_ratio")]
    pub ratio_line_height: f64,
}

fn default_line_height_ratio() -> f64 {
    1.4
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: "0.3s".to_string(),
            kind: "ease".to_string(),
        }
    }
}

/// 完整的主题配置，一次构建只读取一次，之后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub colors: IndexMap<String, HexColor>,
    pub typography: Typography,
    pub layout: Layout,
    pub spacing: Spacing,
    #[serde(default)]
    pub transition: Transition,
    #[serde(default)]
    pub dark_mode: bool,
    /// 原始组件名列表，未知名字会被忽略
    #[serde(default)]
    pub components: Vec<String>,
    /// 原始工具类分组列表，未知名字会被忽略
    #[serde(default)]
    pub utilities: Vec<String>,
}

impl ThemeConfig {
    /// 已识别的组件，保持配置顺序并去重
    pub fn components(&self) -> Vec<Component> {
        recognized(&self.components, Component::from_name)
    }

    /// 已识别的工具类分组，保持配置顺序并去重
    pub fn utilities(&self) -> Vec<UtilityGroup> {
        recognized(&self.utilities, UtilityGroup::from_name)
    }

    pub fn has_component(&self, component: Component) -> bool {
        self.components().contains(&component)
    }

    /// 断点列表，顺序即媒体查询的输出顺序
    pub fn breakpoints(&self) -> Vec<Breakpoint> {
        self.layout
            .breakpoints
            .iter()
            .map(|(prefix, width)| Breakpoint::new(prefix.clone(), width.to_string()))
            .collect()
    }

    /// 结构校验
    ///
    /// 颜色和长度格式已在反序列化时校验。这里检查列数，并对缺失的 alert 语义色
    /// 给出警告（对应的 alert 规则会被跳过，而不是输出未定义的变量引用）。
    pub fn validate(&self) -> Result<Vec<Diagnostic>, ConfigError> {
        if self.layout.cols == 0 {
            return Err(ConfigError::InvalidColumns(self.layout.cols));
        }

        let mut diagnostics = Vec::new();

        if self.has_component(Component::Button) && !self.colors.contains_key("primary") {
            diagnostics.push(Diagnostic::warning(
                "button uses --color-primary but no `primary` color is configured",
            ));
        }

        if self.has_component(Component::Alert) {
            for tone in TONES {
                if !self.colors.contains_key(tone) {
                    diagnostics.push(Diagnostic::warning(format!(
                        "alert tone `{}` has no matching color; .alert-{} will not be generated",
                        tone, tone
                    )));
                }
            }
        }

        for name in &self.components {
            if Component::from_name(name).is_none() {
                diagnostics.push(Diagnostic::warning(format!("Unknown component: {}", name)));
            }
        }

        for name in &self.utilities {
            if UtilityGroup::from_name(name).is_none() {
                diagnostics.push(Diagnostic::warning(format!("Unknown utility group: {}", name)));
            }
        }

        Ok(diagnostics)
    }
}

fn recognized<T, F>(names: &[String], lookup: F) -> Vec<T>
where
    T: Eq + std::hash::Hash,
    F: Fn(&str) -> Option<T>,
{
    names
        .iter()
        .filter_map(|name| lookup(name))
        .collect::<IndexSet<T>>()
        .into_iter()
        .collect()
}
