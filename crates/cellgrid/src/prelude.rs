//! Common imports for filling tables.
//!
//! ```rust
//! use cellgrid::prelude::*;
//!
//! let filler = TableFiller::new(StyleSet::new(&StandardMetrics).unwrap(), StandardMetrics);
//! let mut grid = Grid::new(300.0);
//! filler.fill_rows(&mut grid, &[vec!["a", "b"]], false);
//! assert_eq!(grid.len(), 1);
//! ```

pub use crate::fill::{BlockSummary, ColumnWidths, TableFiller};
pub use crate::grid::Grid;
pub use crate::metrics::{StandardMetrics, TextMeasurer};
pub use crate::style::{Color, Font, HorizontalAlign, StyleSet, StyleTemplate, Theme, VerticalAlign};
pub use crate::target::{CellHandle, RowHandle, TableTarget};
