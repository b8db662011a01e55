//! Traits a table renderer implements to receive filled rows.
//!
//! The filler never draws anything. It asks a [`TableTarget`] for rows, asks
//! each row for cells, and hands every cell its text and template. A PDF
//! table, a spreadsheet writer, or the in-memory [`Grid`](crate::Grid) can
//! all sit behind these traits.
//!
//! Rows are built detached and committed with [`TableTarget::add_row`] or
//! [`TableTarget::add_header_row`] once all of their cells exist.

use crate::style::{HorizontalAlign, StyleTemplate, VerticalAlign};

/// A table that filled rows are appended to.
pub trait TableTarget {
    type Row: RowHandle;

    /// Total width available to the table, in points.
    fn width(&self) -> f32;

    /// Starts a new row of the given height.
    fn create_row(&mut self, height: f32) -> Self::Row;

    /// Appends a finished body row.
    fn add_row(&mut self, row: Self::Row);

    /// Appends a finished row and marks it as a header row.
    fn add_header_row(&mut self, row: Self::Row);
}

/// A row under construction.
pub trait RowHandle {
    type Cell: CellHandle;

    /// Appends a cell taking `width_pct` percent of the table width.
    fn create_cell(
        &mut self,
        width_pct: f32,
        text: &str,
        align: HorizontalAlign,
        valign: VerticalAlign,
        font_size: f32,
    ) -> &mut Self::Cell;
}

/// A cell inside a row under construction.
pub trait CellHandle {
    /// Copies every style attribute of `template` onto this cell.
    fn copy_style(&mut self, template: &StyleTemplate);

    fn set_text(&mut self, text: &str);
}
