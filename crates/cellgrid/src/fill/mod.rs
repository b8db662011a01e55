//! Filling tables from rows of text.
//!
//! [`TableFiller`] takes one block of rows at a time, sizes its columns, and
//! emits styled rows into a [`TableTarget`]. Each fill is independent: the
//! width table is computed fresh (or supplied), used for that block's rows,
//! and dropped.
//!
//! ## Block layout
//!
//! - Widths come from the first row of the block, which is the header when
//!   there is one. That row also fixes the column count: shorter rows are
//!   padded with empty cells and longer rows are cut.
//! - With a header, the first row is emitted once with the header template.
//! - Body rows alternate between the odd and even templates, starting with
//!   odd. The header does not take part in the alternation.
//!
//! ## Template precedence for body cells
//!
//! 1. Last column, when a last-column override is set.
//! 2. First column, when a first-column override is set.
//! 3. The odd or even body template.
//!
//! A single-column table with a last-column override therefore uses it for
//! every body cell.
//!
//! # Example
//!
//! ```rust
//! use cellgrid::{Grid, StandardMetrics, StyleSet, TableFiller};
//!
//! let filler = TableFiller::new(StyleSet::new(&StandardMetrics).unwrap(), StandardMetrics);
//! let mut grid = Grid::new(400.0);
//!
//! let summary = filler
//!     .fill_from_delimited_text(&mut grid, "h1;h2;h3\na;b;c\nd;e;f\n", true, b';')
//!     .unwrap();
//!
//! assert_eq!(summary.header_rows, 1);
//! assert_eq!(summary.body_rows, 2);
//! for row in grid.rows() {
//!     assert!((row.total_width_pct() - 100.0).abs() < 1e-3);
//! }
//! ```

mod widths;

pub use widths::ColumnWidths;

use std::fmt::Display;

use crate::delimited::{CsvTokenizer, Tokenizer};
use crate::error::Result;
use crate::metrics::{StandardMetrics, TextMeasurer};
use crate::style::{StyleSet, StyleTemplate};
use crate::target::{CellHandle, RowHandle, TableTarget};

/// What a single fill emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockSummary {
    /// Columns per emitted row.
    pub columns: usize,
    pub header_rows: usize,
    pub body_rows: usize,
}

impl BlockSummary {
    /// True when the fill emitted nothing.
    pub fn is_empty(&self) -> bool {
        self.header_rows == 0 && self.body_rows == 0
    }
}

/// Emits blocks of rows into table targets using a [`StyleSet`].
///
/// The filler holds no table. Pass the target to every call; one filler can
/// serve any number of tables.
#[derive(Clone, Debug)]
pub struct TableFiller<M = StandardMetrics> {
    styles: StyleSet,
    measurer: M,
}

impl<M: TextMeasurer> TableFiller<M> {
    pub fn new(styles: StyleSet, measurer: M) -> Self {
        TableFiller { styles, measurer }
    }

    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Mutable access for template overrides between fills.
    pub fn styles_mut(&mut self) -> &mut StyleSet {
        &mut self.styles
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Measures `row` with the header template's font and size.
    pub fn column_widths<S: AsRef<str>>(&self, row: &[S]) -> ColumnWidths {
        ColumnWidths::measure(&self.measurer, self.styles.header(), row)
    }

    /// Fills one block, sizing columns from its first row.
    ///
    /// An empty slice, or a first row without cells, emits nothing.
    pub fn fill_rows<T, S>(&self, table: &mut T, rows: &[Vec<S>], has_header: bool) -> BlockSummary
    where
        T: TableTarget,
        S: AsRef<str>,
    {
        let Some(first) = rows.first().filter(|r| !r.is_empty()) else {
            tracing::debug!(rows = rows.len(), "empty block, nothing to fill");
            return BlockSummary::default();
        };

        let widths = self.column_widths(first);
        tracing::debug!(
            columns = widths.len(),
            rows = rows.len(),
            has_header,
            table_width = table.width(),
            "filling block with measured widths"
        );
        self.emit_block(table, rows, has_header, widths.as_slice())
    }

    /// Fills one block with caller-supplied widths; nothing is measured.
    ///
    /// The column count is the length of the first row. Widths beyond it are
    /// ignored; missing widths split what is left of 100 percent.
    pub fn fill_rows_with_widths<T, S>(
        &self,
        table: &mut T,
        rows: &[Vec<S>],
        has_header: bool,
        widths: &ColumnWidths,
    ) -> BlockSummary
    where
        T: TableTarget,
        S: AsRef<str>,
    {
        let Some(first) = rows.first().filter(|r| !r.is_empty()) else {
            tracing::debug!(rows = rows.len(), "empty block, nothing to fill");
            return BlockSummary::default();
        };

        let widths = widths.fit_to(first.len());
        tracing::debug!(
            columns = widths.len(),
            rows = rows.len(),
            has_header,
            "filling block with explicit widths"
        );
        self.emit_block(table, rows, has_header, &widths)
    }

    /// Parses delimited text with [`CsvTokenizer`] and fills the result as
    /// one block.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Malformed`](crate::GridError::Malformed) when the
    /// text cannot be tokenized. Nothing is emitted in that case.
    pub fn fill_from_delimited_text<T: TableTarget>(
        &self,
        table: &mut T,
        text: &str,
        has_header: bool,
        delimiter: u8,
    ) -> Result<BlockSummary> {
        self.fill_with_tokenizer(table, &CsvTokenizer::new(), text, has_header, delimiter)
    }

    /// Like [`fill_from_delimited_text`](Self::fill_from_delimited_text),
    /// with a caller-chosen tokenizer.
    pub fn fill_with_tokenizer<T, K>(
        &self,
        table: &mut T,
        tokenizer: &K,
        text: &str,
        has_header: bool,
        delimiter: u8,
    ) -> Result<BlockSummary>
    where
        T: TableTarget,
        K: Tokenizer + ?Sized,
    {
        if text.is_empty() {
            return Ok(BlockSummary::default());
        }
        let rows = tokenizer.parse(text, delimiter)?;
        Ok(self.fill_rows(table, &rows, has_header))
    }

    /// Fills rows of arbitrary values, rendered with their `Display` impl.
    pub fn fill_from_values<T, V>(
        &self,
        table: &mut T,
        rows: &[Vec<V>],
        has_header: bool,
    ) -> BlockSummary
    where
        T: TableTarget,
        V: Display,
    {
        let rows: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        self.fill_rows(table, &rows, has_header)
    }

    fn emit_block<T, S>(
        &self,
        table: &mut T,
        rows: &[Vec<S>],
        has_header: bool,
        widths: &[f32],
    ) -> BlockSummary
    where
        T: TableTarget,
        S: AsRef<str>,
    {
        let mut summary = BlockSummary {
            columns: widths.len(),
            ..BlockSummary::default()
        };
        let mut header_pending = has_header;
        let mut odd = true;

        for (index, row) in rows.iter().enumerate() {
            if header_pending {
                self.emit_header(table, row, widths);
                header_pending = false;
                summary.header_rows += 1;
                tracing::trace!(index, "emitted header row");
                continue;
            }

            self.emit_body(table, row, widths, odd);
            summary.body_rows += 1;
            tracing::trace!(index, odd, "emitted body row");
            odd = !odd;
        }

        summary
    }

    fn emit_header<T, S>(&self, table: &mut T, values: &[S], widths: &[f32])
    where
        T: TableTarget,
        S: AsRef<str>,
    {
        let template = self.styles.header();
        let mut row = table.create_row(template.row_height);
        for (column, width) in widths.iter().enumerate() {
            emit_cell(&mut row, *width, cell_value(values, column), template);
        }
        table.add_header_row(row);
    }

    fn emit_body<T, S>(&self, table: &mut T, values: &[S], widths: &[f32], odd: bool)
    where
        T: TableTarget,
        S: AsRef<str>,
    {
        let mut row = table.create_row(self.styles.even_body().row_height);
        for (column, width) in widths.iter().enumerate() {
            let template = body_template(&self.styles, column, widths.len(), odd);
            emit_cell(&mut row, *width, cell_value(values, column), template);
        }
        table.add_row(row);
    }
}

/// Picks the template for a body cell.
///
/// The last-column override wins over the first-column override, which wins
/// over row parity.
pub fn body_template(
    styles: &StyleSet,
    column: usize,
    columns: usize,
    odd: bool,
) -> &StyleTemplate {
    if column + 1 == columns {
        if let Some(template) = styles.last_column_override() {
            return template;
        }
    }
    if column == 0 {
        if let Some(template) = styles.first_column_override() {
            return template;
        }
    }
    if odd {
        styles.odd_body()
    } else {
        styles.even_body()
    }
}

fn cell_value<S: AsRef<str>>(values: &[S], column: usize) -> &str {
    values.get(column).map(|v| v.as_ref()).unwrap_or("")
}

fn emit_cell<R: RowHandle>(row: &mut R, width: f32, value: &str, template: &StyleTemplate) {
    let cell = row.create_cell(
        width,
        value,
        template.align,
        template.valign,
        template.font_size,
    );
    cell.copy_style(template);
    cell.set_text(value);
}
