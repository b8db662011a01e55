//! Text measurement.
//!
//! Column sizing needs the rendered width of a string in a given font and
//! size. That knowledge belongs to whatever draws the page, so the filler
//! only talks to the [`TextMeasurer`] trait. [`StandardMetrics`] covers the
//! standard PDF faces; anything else can plug in its own measurer, and a
//! plain closure works too:
//!
//! ```rust
//! use cellgrid::{Font, TextMeasurer};
//!
//! // One point per character, handy for layout sketches.
//! let per_char = |_: &Font, text: &str, _: f32| text.chars().count() as f32;
//! assert_eq!(per_char.measure(&Font::Helvetica, " ab ", 8.0), 4.0);
//! ```

mod afm;

pub use afm::StandardMetrics;

use crate::style::Font;

/// Measures rendered text.
///
/// Implementations must be deterministic: the same font, text, and size
/// always produce the same width.
pub trait TextMeasurer {
    /// Rendered width of `text` set in `font` at `size` points.
    fn measure(&self, font: &Font, text: &str, size: f32) -> f32;

    /// Height of one line of text set in `font` at `size` points, or `None`
    /// when this measurer has no metrics for the font.
    fn line_height(&self, _font: &Font, size: f32) -> Option<f32> {
        Some(size)
    }
}

impl<F> TextMeasurer for F
where
    F: Fn(&Font, &str, f32) -> f32,
{
    fn measure(&self, font: &Font, text: &str, size: f32) -> f32 {
        self(font, text, size)
    }
}
