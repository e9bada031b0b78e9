use serde::{Deserialize, Serialize};

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// CSS 属性值（如 "1rem"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// 响应式断点：类名前缀 + 最小视口宽度
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    /// 类名前缀（如 "sm"）
    pub prefix: String,
    /// `min-width` 媒体查询的值（如 "640px"）
    pub min_width: String,
}

impl Breakpoint {
    pub fn new(prefix: impl Into<String>, min_width: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            min_width: min_width.into(),
        }
    }
}

/// 诊断信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
