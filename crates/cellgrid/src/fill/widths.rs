//! Column width allocation.
//!
//! Widths are percentages of the table width. A measured allocation gives
//! each column a share proportional to the rendered width of its value in the
//! measured row, padded with one space on either side. The shares always add
//! up to 100, so the implied absolute widths add up to the table width.

use serde::{Deserialize, Serialize};

use crate::metrics::TextMeasurer;
use crate::style::StyleTemplate;

/// Per-column width allocation, as percentages of the table width.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnWidths {
    percentages: Vec<f32>,
}

impl ColumnWidths {
    /// Uses the given percentages as-is.
    pub fn from_percentages(percentages: impl Into<Vec<f32>>) -> Self {
        ColumnWidths {
            percentages: percentages.into(),
        }
    }

    /// Sizes one column per value of `row`, proportional to the width of
    /// `" " + value + " "` in the template's font and size.
    ///
    /// If every value measures zero, the columns share the width evenly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cellgrid::{ColumnWidths, Font, StyleTemplate};
    ///
    /// let template = StyleTemplate::new(Font::Courier, 10.0);
    /// let per_char = |_: &Font, text: &str, _: f32| text.len() as f32;
    ///
    /// // " ab " and " abcd " measure 4 and 6
    /// let widths = ColumnWidths::measure(&per_char, &template, &["ab", "abcd"]);
    /// assert!((widths.get(0).unwrap() - 40.0).abs() < 1e-4);
    /// assert!((widths.get(1).unwrap() - 60.0).abs() < 1e-4);
    /// ```
    pub fn measure<M, S>(measurer: &M, template: &StyleTemplate, row: &[S]) -> Self
    where
        M: TextMeasurer + ?Sized,
        S: AsRef<str>,
    {
        let text_widths: Vec<f32> = row
            .iter()
            .map(|value| {
                let padded = format!(" {} ", value.as_ref());
                measurer.measure(&template.font, &padded, template.font_size)
            })
            .collect();

        let total: f32 = text_widths.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            if !row.is_empty() {
                tracing::warn!(
                    columns = row.len(),
                    total,
                    "measured row has no usable width, splitting evenly"
                );
            }
            return Self::even(row.len());
        }

        let percentages = text_widths.iter().map(|w| w * 100.0 / total).collect();
        ColumnWidths { percentages }
    }

    /// Splits 100 percent evenly over `columns` columns.
    pub fn even(columns: usize) -> Self {
        if columns == 0 {
            return ColumnWidths::default();
        }
        ColumnWidths {
            percentages: vec![100.0 / columns as f32; columns],
        }
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.percentages.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.percentages
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    /// Sum of all percentages.
    pub fn total(&self) -> f32 {
        self.percentages.iter().sum()
    }

    /// Absolute widths for a table `table_width` points wide.
    pub fn absolute(&self, table_width: f32) -> Vec<f32> {
        self.percentages
            .iter()
            .map(|pct| pct * table_width / 100.0)
            .collect()
    }

    /// Widths for exactly `columns` columns.
    ///
    /// Extra entries are dropped. Missing entries split whatever is left of
    /// 100 percent after the supplied ones, or get zero when nothing is left.
    pub(crate) fn fit_to(&self, columns: usize) -> Vec<f32> {
        if self.percentages.len() >= columns {
            return self.percentages[..columns].to_vec();
        }

        let missing = columns - self.percentages.len();
        let remaining = (100.0 - self.total()).max(0.0);
        let share = remaining / missing as f32;
        tracing::warn!(
            supplied = self.percentages.len(),
            columns,
            share,
            "explicit widths missing columns, splitting the remainder"
        );

        let mut widths = self.percentages.clone();
        widths.resize(columns, share);
        widths
    }
}

impl From<Vec<f32>> for ColumnWidths {
    fn from(percentages: Vec<f32>) -> Self {
        ColumnWidths { percentages }
    }
}

impl FromIterator<f32> for ColumnWidths {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        ColumnWidths {
            percentages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StandardMetrics;
    use crate::style::Font;

    fn per_char(_: &Font, text: &str, _: f32) -> f32 {
        text.chars().count() as f32
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn measure_empty_row() {
        let t = StyleTemplate::new(Font::Helvetica, 8.0);
        let widths = ColumnWidths::measure(&per_char, &t, &[] as &[&str]);
        assert!(widths.is_empty());
    }

    #[test]
    fn measure_is_proportional_to_padded_text() {
        let t = StyleTemplate::new(Font::Helvetica, 8.0);
        // " a " = 3, " bbbbbb " = 8, " " + "" + " " = 2; total 13
        let widths = ColumnWidths::measure(&per_char, &t, &["a", "bbbbbb", ""]);
        assert_eq!(widths.len(), 3);
        assert!(close(widths.get(0).unwrap(), 300.0 / 13.0));
        assert!(close(widths.get(1).unwrap(), 800.0 / 13.0));
        assert!(close(widths.get(2).unwrap(), 200.0 / 13.0));
        assert!(close(widths.total(), 100.0));
    }

    #[test]
    fn measure_uses_template_font() {
        let regular = StyleTemplate::new(Font::Helvetica, 8.0);
        let mono = StyleTemplate::new(Font::Courier, 8.0);
        let row = ["iiii", "WWWW"];
        let proportional = ColumnWidths::measure(&StandardMetrics, &regular, &row);
        let fixed = ColumnWidths::measure(&StandardMetrics, &mono, &row);
        assert!(proportional.get(0).unwrap() < proportional.get(1).unwrap());
        assert!(close(fixed.get(0).unwrap(), fixed.get(1).unwrap()));
    }

    #[test]
    fn measure_zero_width_splits_evenly() {
        let t = StyleTemplate::new(Font::Helvetica, 8.0);
        let zero = |_: &Font, _: &str, _: f32| 0.0;
        let widths = ColumnWidths::measure(&zero, &t, &["a", "b", "c", "d"]);
        assert_eq!(widths.as_slice(), &[25.0, 25.0, 25.0, 25.0]);
    }

    #[test]
    fn absolute_widths_sum_to_table_width() {
        let t = StyleTemplate::new(Font::Helvetica, 8.0);
        let widths = ColumnWidths::measure(&StandardMetrics, &t, &["Name", "Quantity", "Unit price"]);
        let sum: f32 = widths.absolute(523.0).iter().sum();
        assert!((sum - 523.0).abs() < 1e-2);
    }

    #[test]
    fn fit_to_truncates_extra_entries() {
        let widths = ColumnWidths::from_percentages(vec![50.0, 30.0, 20.0]);
        assert_eq!(widths.fit_to(2), vec![50.0, 30.0]);
    }

    #[test]
    fn fit_to_splits_remainder_over_missing_columns() {
        let widths = ColumnWidths::from_percentages(vec![40.0]);
        assert_eq!(widths.fit_to(4), vec![40.0, 20.0, 20.0, 20.0]);
    }

    #[test]
    fn fit_to_missing_columns_get_zero_when_nothing_left() {
        let widths = ColumnWidths::from_percentages(vec![70.0, 50.0]);
        assert_eq!(widths.fit_to(3), vec![70.0, 50.0, 0.0]);
    }

    #[test]
    fn collect_from_iterator() {
        let widths: ColumnWidths = [10.0, 90.0].into_iter().collect();
        assert_eq!(widths.len(), 2);
        assert!(close(widths.total(), 100.0));
    }
}
