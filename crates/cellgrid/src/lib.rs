//! # Cellgrid - Styled Tables from Rows of Text
//!
//! `cellgrid` turns delimited text or row lists into styled table cells. It
//! sizes columns from the rendered width of their text, picks a style
//! template for every cell, and hands the result to a table renderer.
//!
//! ## Core Concepts
//!
//! - [`StyleTemplate`]: a complete set of cell attributes (fill, text color,
//!   font, border, alignment, padding, row height)
//! - [`StyleSet`]: header, odd body, even body, and optional first/last column
//!   templates for one table
//! - [`TableFiller`]: measures, picks templates, and emits rows
//! - [`TableTarget`]: the renderer-side traits rows are emitted into
//! - [`TextMeasurer`]: rendered text width; [`StandardMetrics`] covers the
//!   standard PDF faces
//! - [`Grid`]: an in-memory target, handy for tests and inspection
//!
//! ## Quick Start
//!
//! ```rust
//! use cellgrid::{Grid, StandardMetrics, StyleSet, TableFiller};
//!
//! let styles = StyleSet::new(&StandardMetrics).unwrap();
//! let filler = TableFiller::new(styles, StandardMetrics);
//!
//! let mut grid = Grid::new(523.0);
//! let csv = "Item;Qty;Unit price\nHex bolt M8;120;0.18\nWasher;400;0.02\n";
//! filler.fill_from_delimited_text(&mut grid, csv, true, b';').unwrap();
//!
//! assert_eq!(grid.len(), 3);
//! assert!(grid.rows()[0].header);
//! assert_eq!(grid.rows()[2].texts(), vec!["Washer", "400", "0.02"]);
//! ```
//!
//! ## Styling
//!
//! Templates can be swapped between fills. Edge-column overrides take
//! precedence over the striped body templates:
//!
//! ```rust
//! use cellgrid::style::{Color, HorizontalAlign};
//! use cellgrid::{Font, Grid, StandardMetrics, StyleSet, TableFiller, Theme};
//!
//! let styles = StyleSet::create(
//!     &StandardMetrics,
//!     Some(Font::Courier),
//!     Some(Font::CourierBold),
//!     9.0,
//!     Theme::Plain,
//! )
//! .unwrap();
//! let mut filler = TableFiller::new(styles, StandardMetrics);
//!
//! let totals = filler
//!     .styles()
//!     .default_template()
//!     .clone()
//!     .with_align(HorizontalAlign::Right)
//!     .with_fill(Color::LIGHT_GRAY);
//! filler.styles_mut().set_last_column(totals);
//!
//! let mut grid = Grid::new(400.0);
//! filler.fill_rows(&mut grid, &[vec!["a", "1"], vec!["b", "2"]], false);
//! assert_eq!(grid.rows()[1].cells[1].align, HorizontalAlign::Right);
//! ```
//!
//! ## YAML Configuration
//!
//! ```rust
//! use cellgrid::{StandardMetrics, StyleOptions, StyleSet};
//!
//! let options = StyleOptions::from_yaml(r#"
//! body_font: Times-Roman
//! font_size: 10
//! theme: plain
//! last_column:
//!   align: right
//! "#).unwrap();
//!
//! let styles = StyleSet::from_options(&StandardMetrics, &options).unwrap();
//! assert!(styles.last_column_override().is_some());
//! ```

pub mod delimited;
mod error;
pub mod fill;
mod grid;
pub mod metrics;
pub mod prelude;
pub mod style;
mod target;

pub use error::{GridError, Result};

pub use fill::{body_template, BlockSummary, ColumnWidths, TableFiller};

pub use grid::{Grid, GridCell, GridRow};

pub use metrics::{StandardMetrics, TextMeasurer};

pub use style::{Font, StyleOptions, StyleSet, StyleTemplate, Theme};

pub use target::{CellHandle, RowHandle, TableTarget};
