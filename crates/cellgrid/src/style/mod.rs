//! Style model for table cells.
//!
//! This module covers everything a cell can look like:
//!
//! - [`Color`], [`Font`], [`LineStyle`], [`Padding`] and the alignment enums:
//!   the individual attributes.
//! - [`StyleTemplate`]: one complete bundle of attributes, copied onto cells.
//! - [`StyleSet`]: the header, body, and column-edge templates of a table.
//! - [`StyleOptions`]: YAML configuration a [`StyleSet`] can be built from.

mod color;
mod font;
mod options;
mod set;
mod template;

pub use color::Color;
pub use font::Font;
pub use options::{StyleOptions, TemplateOverride};
pub use set::{StyleSet, Theme, BODY_FILL, DEFAULT_FONT_SIZE};
pub use template::{HorizontalAlign, LineStyle, Padding, StyleTemplate, VerticalAlign};
