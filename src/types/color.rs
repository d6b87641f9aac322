//! RGBA colour type, parsed from and serialized to CSS-style hex strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RingcodeError;

/// RGBA colour with 8-bit components.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// The orange of the Perseverance parachute.
    pub const PARACHUTE_ORANGE: Color = Color::rgb(0xff, 0x47, 0x00);

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> Result<Self, RingcodeError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || RingcodeError::ConfigError(format!("invalid hex colour '{}'", s));

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte_at = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble_at = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Color::rgb(nibble_at(0)?, nibble_at(1)?, nibble_at(2)?)),
            6 => Ok(Color::rgb(byte_at(0)?, byte_at(2)?, byte_at(4)?)),
            8 => Ok(Color::new(byte_at(0)?, byte_at(2)?, byte_at(4)?, byte_at(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Lowercase `#rrggbb`, with an alpha byte appended only when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = RingcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = RingcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_parachute_orange() {
        assert_eq!(Color::from_hex("#FF4700").unwrap(), Color::PARACHUTE_ORANGE);
        assert_eq!(Color::PARACHUTE_ORANGE.to_hex(), "#ff4700");
    }

    #[test]
    fn test_parse_short_and_alpha_forms() {
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_hex("00000080").unwrap(),
            Color::new(0, 0, 0, 0x80)
        );
        assert_eq!(Color::new(0, 0, 0, 0x80).to_hex(), "#00000080");
    }

    #[test]
    fn test_rejects_malformed_colours() {
        for bad in ["", "#12", "#12345", "#gggggg", "#ff47000", "##fff", "##ff4700"] {
            let result = Color::from_hex(bad);
            assert!(
                matches!(result, Err(RingcodeError::ConfigError(_))),
                "expected ConfigError for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::PARACHUTE_ORANGE).unwrap();
        assert_eq!(json, "\"#ff4700\"");
        let back: Color = serde_json::from_str("\"#FFFFFF\"").unwrap();
        assert_eq!(back, Color::WHITE);
        assert!(serde_json::from_str::<Color>("\"orange\"").is_err());
    }
}
