//! In-memory table target.
//!
//! [`Grid`] records what a fill produced: every row with its height and
//! header flag, every cell with its width, text, and copied style. It is a
//! complete layout model that a renderer can walk, and it serializes to JSON
//! for inspection.
//!
//! # Example
//!
//! ```rust
//! use cellgrid::{Grid, StandardMetrics, StyleSet, TableFiller};
//!
//! let styles = StyleSet::new(&StandardMetrics).unwrap();
//! let filler = TableFiller::new(styles, StandardMetrics);
//!
//! let mut grid = Grid::new(500.0);
//! let rows = vec![vec!["Name", "Qty"], vec!["Bolts", "120"]];
//! filler.fill_rows(&mut grid, &rows, true);
//!
//! assert_eq!(grid.header_rows().count(), 1);
//! assert_eq!(grid.body_rows().next().unwrap().cells[0].text, "Bolts");
//! ```

use serde::Serialize;

use crate::style::{HorizontalAlign, StyleTemplate, VerticalAlign};
use crate::target::{CellHandle, RowHandle, TableTarget};

/// A table laid out in memory.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    width: f32,
    rows: Vec<GridRow>,
}

/// One row of a [`Grid`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GridRow {
    pub height: f32,
    pub header: bool,
    pub cells: Vec<GridCell>,
}

/// One cell of a [`GridRow`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridCell {
    /// Share of the table width, in percent.
    pub width_pct: f32,
    pub text: String,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
    pub font_size: f32,
    /// Style copied from a template, if any.
    pub style: Option<StyleTemplate>,
}

impl Grid {
    /// Creates an empty grid with the given total width in points.
    pub fn new(width: f32) -> Self {
        Grid {
            width,
            rows: Vec::new(),
        }
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn header_rows(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter().filter(|r| r.header)
    }

    pub fn body_rows(&self) -> impl Iterator<Item = &GridRow> {
        self.rows.iter().filter(|r| !r.header)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total height of all rows.
    pub fn height(&self) -> f32 {
        self.rows.iter().map(|r| r.height).sum()
    }

    /// Serializes the grid as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl GridRow {
    /// Texts of all cells, in column order.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }

    /// Sum of the cells' width percentages.
    pub fn total_width_pct(&self) -> f32 {
        self.cells.iter().map(|c| c.width_pct).sum()
    }
}

impl GridCell {
    /// Width of this cell in points for a table `table_width` points wide.
    pub fn absolute_width(&self, table_width: f32) -> f32 {
        self.width_pct * table_width / 100.0
    }
}

impl TableTarget for Grid {
    type Row = GridRow;

    fn width(&self) -> f32 {
        self.width
    }

    fn create_row(&mut self, height: f32) -> GridRow {
        GridRow {
            height,
            header: false,
            cells: Vec::new(),
        }
    }

    fn add_row(&mut self, row: GridRow) {
        self.rows.push(row);
    }

    fn add_header_row(&mut self, mut row: GridRow) {
        row.header = true;
        self.rows.push(row);
    }
}

impl RowHandle for GridRow {
    type Cell = GridCell;

    fn create_cell(
        &mut self,
        width_pct: f32,
        text: &str,
        align: HorizontalAlign,
        valign: VerticalAlign,
        font_size: f32,
    ) -> &mut GridCell {
        self.cells.push(GridCell {
            width_pct,
            text: text.to_string(),
            align,
            valign,
            font_size,
            style: None,
        });
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }
}

impl CellHandle for GridCell {
    fn copy_style(&mut self, template: &StyleTemplate) {
        self.style = Some(template.clone());
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Font;

    #[test]
    fn test_header_rows_are_flagged() {
        let mut grid = Grid::new(100.0);
        let header = grid.create_row(12.0);
        grid.add_header_row(header);
        let body = grid.create_row(10.0);
        grid.add_row(body);

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.header_rows().count(), 1);
        assert_eq!(grid.body_rows().count(), 1);
        assert!((grid.height() - 22.0).abs() < 1e-6);
    }

    #[test]
    fn test_create_cell_then_style() {
        let mut row = GridRow::default();
        let template = StyleTemplate::new(Font::Courier, 9.0);
        let cell = row.create_cell(
            25.0,
            "draft",
            HorizontalAlign::Right,
            VerticalAlign::Top,
            9.0,
        );
        cell.copy_style(&template);
        cell.set_text("final");

        assert_eq!(row.texts(), vec!["final"]);
        assert_eq!(row.cells[0].style.as_ref(), Some(&template));
        assert_eq!(row.cells[0].align, HorizontalAlign::Right);
    }

    #[test]
    fn test_absolute_width() {
        let mut row = GridRow::default();
        row.create_cell(
            40.0,
            "",
            HorizontalAlign::Left,
            VerticalAlign::Middle,
            8.0,
        );
        assert!((row.cells[0].absolute_width(250.0) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_json() {
        let mut grid = Grid::new(300.0);
        let mut row = grid.create_row(10.0);
        row.create_cell(
            100.0,
            "only",
            HorizontalAlign::Center,
            VerticalAlign::Middle,
            8.0,
        );
        grid.add_row(row);

        let json: serde_json::Value = serde_json::from_str(&grid.to_json().unwrap()).unwrap();
        assert_eq!(json["width"], 300.0);
        assert_eq!(json["rows"][0]["cells"][0]["text"], "only");
        assert_eq!(json["rows"][0]["cells"][0]["align"], "center");
    }
}
