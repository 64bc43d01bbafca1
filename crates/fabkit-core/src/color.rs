//! RGBA color values used by the button style.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a color literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color literal: {0:?}")]
pub struct ParseColorError(pub String);

/// An 8-bit-per-channel RGBA color.
///
/// Serializes as a `"#RRGGBBAA"` string. Deserializes from `"#RRGGBB"`,
/// `"#RRGGBBAA"` or a packed `0xRRGGBBAA` integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xRRGGBBAA` value.
    pub const fn from_packed(value: u32) -> Self {
        Self::new(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    /// Pack into `0xRRGGBBAA`.
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            6 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_packed())
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Literal(String),
}

impl TryFrom<ColorRepr> for Rgba {
    type Error = ParseColorError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Packed(value) => Ok(Self::from_packed(value)),
            ColorRepr::Literal(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed() {
        let color = Rgba::from_packed(0xFF0000FF);
        assert_eq!(color, Rgba::new(255, 0, 0, 255));
        assert_eq!(color.to_packed(), 0xFF0000FF);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#00FF00".parse::<Rgba>(), Ok(Rgba::new(0, 255, 0, 255)));
        assert_eq!("#00ff0080".parse::<Rgba>(), Ok(Rgba::new(0, 255, 0, 128)));
        assert!("00FF00".parse::<Rgba>().is_err());
        assert!("#00FF0".parse::<Rgba>().is_err());
        assert!("#GG0000".parse::<Rgba>().is_err());
        assert!("#+F+F+F".parse::<Rgba>().is_err());
        assert!("#-1FFFF".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_serde_accepts_int_and_string() {
        let from_int: Rgba = serde_json::from_str("4278190335").unwrap();
        assert_eq!(from_int, Rgba::from_packed(0xFF0000FF));
        let from_str: Rgba = serde_json::from_str("\"#0000FF\"").unwrap();
        assert_eq!(from_str, Rgba::BLUE);
        assert_eq!(serde_json::to_string(&Rgba::BLUE).unwrap(), "\"#0000FFFF\"");
    }

    #[test]
    fn test_peniko_conversion() {
        let color: Color = Rgba::new(10, 20, 30, 40).into();
        assert_eq!(Rgba::from(color), Rgba::new(10, 20, 30, 40));
    }
}
