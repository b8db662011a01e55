//! Cell style templates.
//!
//! A [`StyleTemplate`] bundles every visual attribute a cell can carry. The
//! filler copies a whole template onto each emitted cell, so two templates are
//! interchangeable exactly when all of their style fields are equal.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::font::Font;

/// Horizontal text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Stroke used for cell borders.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    /// Stroke width in points.
    pub width: f32,
}

impl LineStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        LineStyle { color, width }
    }

    /// The heavier dark-gray rule used by both built-in themes.
    pub const fn thick() -> Self {
        LineStyle::new(Color::DARK_GRAY, 1.2)
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        LineStyle::new(Color::BLACK, 1.0)
    }
}

/// Inner spacing between a cell's border and its text, in points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Padding {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Combined top and bottom padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::uniform(5.0)
    }
}

/// A named, reusable bundle of visual attributes applied to a cell.
///
/// Templates are plain values. Equality compares style fields only, see
/// [`same_style`](StyleTemplate::same_style).
///
/// # Example
///
/// ```rust
/// use cellgrid::style::{Color, Font, HorizontalAlign, StyleTemplate};
///
/// let highlight = StyleTemplate::new(Font::HelveticaBold, 8.0)
///     .with_fill(Color::rgb(255, 240, 200))
///     .with_align(HorizontalAlign::Right);
///
/// assert_eq!(highlight.align, HorizontalAlign::Right);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleTemplate {
    pub fill_color: Color,
    pub text_color: Color,
    pub font: Font,
    pub font_size: f32,
    pub border: LineStyle,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
    pub padding: Padding,
    /// Height of rows built from this template, in points.
    pub row_height: f32,
}

impl StyleTemplate {
    /// Creates a template with white fill, black text, default border and
    /// padding, left/middle alignment, and a row height of one font size
    /// plus vertical padding.
    pub fn new(font: Font, font_size: f32) -> Self {
        let padding = Padding::default();
        StyleTemplate {
            fill_color: Color::WHITE,
            text_color: Color::BLACK,
            font,
            font_size,
            border: LineStyle::default(),
            align: HorizontalAlign::default(),
            valign: VerticalAlign::default(),
            padding,
            row_height: font_size + padding.vertical(),
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_border(mut self, border: LineStyle) -> Self {
        self.border = border;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_valign(mut self, valign: VerticalAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Sets the padding and keeps the text area height unchanged.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        let text_height = self.row_height - self.padding.vertical();
        self.padding = padding;
        self.row_height = text_height + padding.vertical();
        self
    }

    pub fn with_row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Sets the row height from a measured line height plus vertical padding.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.row_height = line_height + self.padding.vertical();
        self
    }

    /// Returns true when every style field matches. Identity plays no part:
    /// two separately built templates with the same fields are the same style.
    pub fn same_style(&self, other: &StyleTemplate) -> bool {
        self == other
    }
}
