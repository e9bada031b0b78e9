//! CSS 长度值：数字 + 不透明的单位后缀

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("invalid length `{0}`: expected a number followed by an optional unit")]
    Invalid(String),
}

/// 长度值，如 `16px`、`0.5rem`、`1200px`
///
/// 单位只做原样保留，不做任何换算。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Length {
    pub value: f64,
    pub unit: String,
}

impl Length {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// 乘以系数，单位不变
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.value * factor, self.unit.clone())
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        let value: f64 = number
            .parse()
            .map_err(|_| LengthError::Invalid(s.to_string()))?;
        if !value.is_finite() {
            return Err(LengthError::Invalid(s.to_string()));
        }

        Ok(Self::new(value, unit))
    }
}

impl TryFrom<String> for Length {
    type Error = LengthError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Length> for String {
    fn from(length: Length) -> Self {
        length.to_string()
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", format_number(self.value), self.unit)
    }
}

/// 格式化数字
///
/// 整数直接输出（`0`、`16`），否则四舍五入到 3 位小数并去掉末尾的 0（`0.25`、`1.333`）。
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }

    let rounded = format!("{:.3}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// 格式化百分比，固定 4 位小数（`33.3333`、`100.0000`）
pub fn format_percent(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length() {
        let len: Length = "16px".parse().unwrap();
        assert_eq!(len.value, 16.0);
        assert_eq!(len.unit, "px");

        let len: Length = "0.5rem".parse().unwrap();
        assert_eq!(len.value, 0.5);
        assert_eq!(len.unit, "rem");

        let len: Length = "12".parse().unwrap();
        assert_eq!(len.unit, "");
    }

    #[test]
    fn test_parse_invalid_length() {
        assert!("px".parse::<Length>().is_err());
        assert!("".parse::<Length>().is_err());
        assert!("auto".parse::<Length>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!("1200px".parse::<Length>().unwrap().to_string(), "1200px");
        assert_eq!("0.75em".parse::<Length>().unwrap().to_string(), "0.75em");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(4.0 / 3.0), "1.333");
        assert_eq!(format_number(1.4 * 100.0), "140");
    }

    #[test]
    fn test_scale_keeps_unit() {
        let base: Length = "16px".parse().unwrap();
        assert_eq!(base.scale(0.0).to_string(), "0px");
        assert_eq!(base.scale(0.25).to_string(), "4px");
        assert_eq!(base.scale(1.5).to_string(), "24px");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(50.0), "50.0000");
        assert_eq!(format_percent(100.0 / 3.0), "33.3333");
    }
}
