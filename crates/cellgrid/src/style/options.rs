//! Style configuration loaded from YAML.
//!
//! [`StyleOptions`] carries everything [`StyleSet::from_options`] needs:
//! fonts, size, theme, and partial overrides for individual templates.
//! Every field is optional in the file.
//!
//! ```rust
//! use cellgrid::{StandardMetrics, StyleOptions, StyleSet, Theme};
//! use cellgrid::style::{Color, Font};
//!
//! let options = StyleOptions::from_yaml(r##"
//! font_size: 9
//! theme: plain
//! header_font: Times-Bold
//! first_column:
//!   fill: "#dde7f0"
//!   font: Helvetica-Bold
//! "##).unwrap();
//!
//! assert_eq!(options.theme, Theme::Plain);
//!
//! let styles = StyleSet::from_options(&StandardMetrics, &options).unwrap();
//! assert_eq!(styles.header().font, Font::TimesBold);
//! assert_eq!(styles.first_column().fill_color, Color::rgb(0xdd, 0xe7, 0xf0));
//! ```
//!
//! [`StyleSet::from_options`]: crate::StyleSet::from_options

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::font::Font;
use super::set::{Theme, DEFAULT_FONT_SIZE};
use super::template::{HorizontalAlign, LineStyle, Padding, StyleTemplate, VerticalAlign};
use crate::error::{GridError, Result};

/// Configuration for building a [`StyleSet`](crate::StyleSet).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOptions {
    pub body_font: Option<Font>,
    pub header_font: Option<Font>,
    pub font_size: f32,
    pub theme: Theme,
    pub header: Option<TemplateOverride>,
    pub even_body: Option<TemplateOverride>,
    pub odd_body: Option<TemplateOverride>,
    /// Applied on top of the default body template.
    pub first_column: Option<TemplateOverride>,
    /// Applied on top of the default body template.
    pub last_column: Option<TemplateOverride>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        StyleOptions {
            body_font: None,
            header_font: None,
            font_size: DEFAULT_FONT_SIZE,
            theme: Theme::Default,
            header: None,
            even_body: None,
            odd_body: None,
            first_column: None,
            last_column: None,
        }
    }
}

impl StyleOptions {
    /// Parses options from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Config`] for YAML errors, unknown keys, bad color
    /// literals, or a non-positive font size.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: StyleOptions =
            serde_yaml::from_str(yaml).map_err(|e| GridError::config(e.to_string()))?;
        options.validate().map_err(GridError::config)?;
        Ok(options)
    }

    /// Loads options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options: StyleOptions = serde_yaml::from_str(&content)
            .map_err(|e| GridError::config_in(path, e.to_string()))?;
        options
            .validate()
            .map_err(|message| GridError::config_in(path, message))?;
        Ok(options)
    }

    /// Serializes the options back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| GridError::config(e.to_string()))
    }

    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(format!(
                "font_size must be a positive number, got {}",
                self.font_size
            ));
        }
        let overrides = [
            ("header", &self.header),
            ("even_body", &self.even_body),
            ("odd_body", &self.odd_body),
            ("first_column", &self.first_column),
            ("last_column", &self.last_column),
        ];
        for (name, o) in overrides {
            if let Some(size) = o.as_ref().and_then(|o| o.font_size) {
                if !size.is_finite() || size <= 0.0 {
                    return Err(format!(
                        "{name}.font_size must be a positive number, got {size}"
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Partial template: only the fields that are set replace the base
/// template's values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateOverride {
    pub fill: Option<Color>,
    pub text_color: Option<Color>,
    pub font: Option<Font>,
    pub align: Option<HorizontalAlign>,
    pub valign: Option<VerticalAlign>,
    pub border: Option<LineStyle>,
    /// Rescales the text part of the row height along with the size.
    pub font_size: Option<f32>,
    /// Keeps the text part of the row height.
    pub padding: Option<Padding>,
}

impl TemplateOverride {
    /// Returns `base` with the set fields replaced.
    pub fn apply(&self, base: &StyleTemplate) -> StyleTemplate {
        let mut template = base.clone();
        if let Some(fill) = self.fill {
            template.fill_color = fill;
        }
        if let Some(color) = self.text_color {
            template.text_color = color;
        }
        if let Some(font) = &self.font {
            template.font = font.clone();
        }
        if let Some(align) = self.align {
            template.align = align;
        }
        if let Some(valign) = self.valign {
            template.valign = valign;
        }
        if let Some(border) = self.border {
            template.border = border;
        }
        if let Some(size) = self.font_size {
            let text_height = template.row_height - template.padding.vertical();
            if template.font_size > 0.0 {
                template.row_height =
                    text_height * size / template.font_size + template.padding.vertical();
            }
            template.font_size = size;
        }
        if let Some(padding) = self.padding {
            template = template.with_padding(padding);
        }
        template
    }
}
