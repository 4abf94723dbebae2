//! RGBA colors with hex string parsing
//!
//! Colors are stored as straight (non-premultiplied) floats in `0.0..=1.0`.
//! In configuration files they are written as CSS-style hex strings.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels plus a float alpha, like CSS `rgba(255, 255, 255, 0.7)`
    pub fn rgba8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a.clamp(0.0, 1.0),
        )
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Result<Self, CoreError> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || CoreError::InvalidColor(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8, CoreError> {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::rgba8(expand(0)?, expand(1)?, expand(2)?, 1.0))
            }
            6 => Ok(Self::rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 1.0)),
            8 => {
                let alpha = channel(6..8)? as f32 / 255.0;
                Ok(Self::rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, alpha))
            }
            _ => Err(invalid()),
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Quantize to 8-bit straight RGBA
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let c = Color::parse_hex("#FF0000").unwrap();
        assert_eq!(c, Color::RED);
    }

    #[test]
    fn test_parse_short_and_alpha_hex() {
        assert_eq!(Color::parse_hex("#333").unwrap().to_rgba8(), [0x33, 0x33, 0x33, 255]);
        let c = Color::parse_hex("FFFFFF80").unwrap();
        assert_eq!(c.to_rgba8(), [255, 255, 255, 0x80]);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
        assert!(Color::parse_hex("").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let c = Color::rgba8(0x22, 0x22, 0x22, 1.0);
        assert_eq!(c.to_string(), "#222222");
        let translucent = Color::rgba8(255, 255, 255, 0.7);
        assert_eq!(translucent.to_string(), "#FFFFFFB3");
    }
}
