//! RGB colors for cell fills, text, and borders.
//!
//! Colors can be built from components or parsed from configuration text:
//!
//! - Named colors: `white`, `black`, `light_gray`, `dark_gray`, `gray`, ...
//! - RGB hex: `"#f2f2f2"` or `"#fff"` (3 or 6 digit)
//!
//! # Example
//!
//! ```rust
//! use cellgrid::style::Color;
//!
//! let fill = Color::parse("#f2f2f2").unwrap();
//! assert_eq!(fill, Color::rgb(242, 242, 242));
//! assert_eq!(Color::parse("light_gray").unwrap(), Color::LIGHT_GRAY);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Creates a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses a color from a string value.
    ///
    /// Supports:
    /// - Named colors: `white`, `black`, `gray`/`grey`, `light_gray`,
    ///   `dark_gray`, `red`, `green`, `blue`
    /// - Hex codes: `#f2f2f2` or `#fff`
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let component = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| format!("Invalid hex: {}", hex))
        };

        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(Color::rgb(
                component(0..1)? * 17,
                component(1..2)? * 17,
                component(2..3)? * 17,
            )),
            6 => Ok(Color::rgb(
                component(0..2)?,
                component(2..4)?,
                component(4..6)?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let color = match name.to_lowercase().replace('-', "_").as_str() {
            "white" => Color::WHITE,
            "black" => Color::BLACK,
            "gray" | "grey" => Color::GRAY,
            "light_gray" | "light_grey" | "lightgray" => Color::LIGHT_GRAY,
            "dark_gray" | "dark_grey" | "darkgray" => Color::DARK_GRAY,
            "red" => Color::RED,
            "green" => Color::GREEN,
            "blue" => Color::BLUE,
            _ => return Err(format!("Unknown color name: {}", name)),
        };
        Ok(color)
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
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
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("BLACK").unwrap(), Color::BLACK);
        assert_eq!(Color::parse("grey").unwrap(), Color::GRAY);
        assert_eq!(Color::parse("light-gray").unwrap(), Color::LIGHT_GRAY);
        assert_eq!(Color::parse("dark_gray").unwrap(), Color::DARK_GRAY);
    }

    #[test]
    fn test_parse_unknown_color() {
        let err = Color::parse("chartreuse").unwrap_err();
        assert!(err.contains("chartreuse"));
    }

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Color::parse("#f2f2f2").unwrap(), Color::rgb(242, 242, 242));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
        assert_eq!(Color::parse("#a0c").unwrap(), Color::rgb(170, 0, 204));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#gggggg").is_err());
        assert!(Color::parse("#ééé").is_err());
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Color::LIGHT_GRAY.to_hex(), "#c0c0c0");
        assert_eq!(Color::rgb(242, 242, 242).to_string(), "#f2f2f2");
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::DARK_GRAY).unwrap();
        assert_eq!(json, "\"#404040\"");
        let back: Color = serde_json::from_str("\"light_gray\"").unwrap();
        assert_eq!(back, Color::LIGHT_GRAY);
    }
}
