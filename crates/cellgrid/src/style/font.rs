//! Font identifiers.
//!
//! Fonts are identified by name. The standard PDF faces have dedicated
//! variants with built-in metrics; any other name is a [`Font::Custom`] face
//! that needs a caller-supplied [`TextMeasurer`](crate::TextMeasurer).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A font face used by a style template.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Font {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
    TimesRoman,
    TimesBold,
    /// A face outside the standard set, identified by its name.
    Custom(String),
}

impl Font {
    /// Standard regular face used for body templates when no font is given.
    pub const REGULAR: Font = Font::Helvetica;

    /// Standard bold face used for the header template when no font is given.
    pub const BOLD: Font = Font::HelveticaBold;

    /// Resolves a font from its PDF name. Matching is case-insensitive;
    /// unknown names become [`Font::Custom`].
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "helvetica" => Font::Helvetica,
            "helvetica-bold" => Font::HelveticaBold,
            "courier" => Font::Courier,
            "courier-bold" => Font::CourierBold,
            "times-roman" | "times" => Font::TimesRoman,
            "times-bold" => Font::TimesBold,
            _ => Font::Custom(trimmed.to_string()),
        }
    }

    /// The PDF name of this face.
    pub fn name(&self) -> &str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::Courier => "Courier",
            Font::CourierBold => "Courier-Bold",
            Font::TimesRoman => "Times-Roman",
            Font::TimesBold => "Times-Bold",
            Font::Custom(name) => name,
        }
    }

    /// True for faces outside the standard set.
    pub fn is_custom(&self) -> bool {
        matches!(self, Font::Custom(_))
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for Font {
    fn from(name: String) -> Self {
        Font::from_name(&name)
    }
}

impl From<&str> for Font {
    fn from(name: &str) -> Self {
        Font::from_name(name)
    }
}

impl From<Font> for String {
    fn from(font: Font) -> Self {
        font.name().to_string()
    }
}
