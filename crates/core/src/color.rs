//! 十六进制颜色与明暗调整
//!
//! 所有输出的颜色都是 `#rrggbb` 形式，通道值在重新编码前被钳制到 [0, 255]。

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 浅色变体的调整强度
pub const LIGHTEN: f64 = 0.18;
/// 深色变体的调整强度
pub const DARKEN: f64 = -0.18;

/// 暗色模式下主色加深的倍率
const DARK_MODE_SHADE: f64 = 1.2;
/// 暗色模式下浅色变体的倍率
const DARK_MODE_LIFT: f64 = 0.8;
/// 暗色模式下在加深色基础上再次加深的强度
const DARK_MODE_DEEPEN: f64 = -0.08;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color `{0}`: expected 6 hex digits like #3b82f6")]
    InvalidHex(String),
}

/// `#rrggbb` 颜色
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Srgb<u8>);

impl HexColor {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(Srgb::new(red, green, blue))
    }

    pub fn channels(&self) -> (u8, u8, u8) {
        self.0.into_components()
    }
}

impl PartialEq for HexColor {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels()
    }
}

impl Eq for HexColor {}

impl FromStr for HexColor {
    type Err = ColorError;

    /// 只接受 6 位十六进制（`#` 可省略），不接受 3 位简写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if body.len() != 6 || !body.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        body.parse::<Srgb<u8>>()
            .map(HexColor)
            .map_err(|_| ColorError::InvalidHex(s.to_string()))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:x}", self.0)
    }
}

/// 按强度调整颜色
///
/// - `amount >= 0`：每个通道向 255 靠近，`c + (255 - c) * amount`
/// - `amount < 0`：每个通道向 0 靠近，`c * (1 - |amount|)`
///
/// `amount` 超出 [-1, 1] 时会被钳制。
pub fn adjust(color: HexColor, amount: f64) -> HexColor {
    let amount = amount.clamp(-1.0, 1.0);

    let shift = |channel: u8| -> u8 {
        let c = f64::from(channel);
        let moved = if amount >= 0.0 {
            c + (255.0 - c) * amount
        } else {
            c * (1.0 - amount.abs())
        };
        moved.round().clamp(0.0, 255.0) as u8
    };

    let (r, g, b) = color.channels();
    HexColor::new(shift(r), shift(g), shift(b))
}

/// 字符串版本的 [`adjust`]，输入不是 6 位十六进制时返回错误
pub fn adjust_hex(hex: &str, amount: f64) -> Result<String, ColorError> {
    let color: HexColor = hex.parse()?;
    Ok(adjust(color, amount).to_string())
}

/// 单个命名颜色的三个色阶
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorVariant {
    pub base: HexColor,
    pub light: HexColor,
    pub dark: HexColor,
}

impl ColorVariant {
    /// 亮色主题下的色阶
    pub fn of(base: HexColor) -> Self {
        Self {
            base,
            light: adjust(base, LIGHTEN),
            dark: adjust(base, DARKEN),
        }
    }

    /// 暗色主题下重新计算的色阶
    ///
    /// 主色整体加深，浅色变体提亮幅度减小，深色变体在加深色上再压暗一级。
    pub fn dark_mode(base: HexColor) -> Self {
        let darker = adjust(base, DARKEN * DARK_MODE_SHADE);
        Self {
            base: darker,
            light: adjust(base, LIGHTEN * DARK_MODE_LIFT),
            dark: adjust(darker, DARK_MODE_DEEPEN),
        }
    }
}
