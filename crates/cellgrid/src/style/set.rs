//! The six cell templates a table is filled with.
//!
//! A [`StyleSet`] is built once per table and read by every fill. Header and
//! body templates always exist; the first- and last-column templates are
//! optional overrides that only take part in template selection once a caller
//! sets them.
//!
//! # Example
//!
//! ```rust
//! use cellgrid::{StandardMetrics, StyleSet, Theme};
//! use cellgrid::style::{Color, HorizontalAlign};
//!
//! let mut styles = StyleSet::create(&StandardMetrics, None, None, 8.0, Theme::Default).unwrap();
//! assert_eq!(styles.header().fill_color, Color::LIGHT_GRAY);
//!
//! // Right-align the last column of every body row.
//! let totals = styles.default_template().clone().with_align(HorizontalAlign::Right);
//! styles.set_last_column(totals);
//! assert!(styles.last_column_override().is_some());
//! ```

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::font::Font;
use super::options::StyleOptions;
use super::template::{HorizontalAlign, LineStyle, StyleTemplate, VerticalAlign};
use crate::error::{GridError, Result};
use crate::metrics::TextMeasurer;

/// Font size used when none is configured.
pub const DEFAULT_FONT_SIZE: f32 = 8.0;

/// Fill of the default body template under [`Theme::Default`].
pub const BODY_FILL: Color = Color::rgb(242, 242, 242);

/// Built-in visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light-gray header, near-white body, heavy borders.
    #[default]
    Default,
    /// White header and body fills, borders unchanged.
    Plain,
}

/// Header, body, and column-edge templates for one table.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSet {
    header: StyleTemplate,
    even_body: StyleTemplate,
    odd_body: StyleTemplate,
    default: StyleTemplate,
    first_column: Option<StyleTemplate>,
    last_column: Option<StyleTemplate>,
}

impl StyleSet {
    /// Builds the templates for the given fonts, size, and theme.
    ///
    /// Missing fonts fall back to [`Font::BOLD`] for the header and
    /// [`Font::REGULAR`] for the body. Row heights come from the measurer's
    /// line height for each font plus cell padding.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Resource`] when the measurer has no metrics for
    /// one of the template fonts.
    pub fn create<M: TextMeasurer + ?Sized>(
        measurer: &M,
        body_font: Option<Font>,
        header_font: Option<Font>,
        font_size: f32,
        theme: Theme,
    ) -> Result<Self> {
        let header_font = header_font.unwrap_or(Font::BOLD);
        let body_font = body_font.unwrap_or(Font::REGULAR);

        let header_line = line_height(measurer, &header_font, font_size)?;
        let body_line = line_height(measurer, &body_font, font_size)?;

        let mut header = StyleTemplate::new(header_font, font_size)
            .with_fill(Color::LIGHT_GRAY)
            .with_text_color(Color::BLACK)
            .with_border(LineStyle::thick())
            .with_align(HorizontalAlign::Center)
            .with_valign(VerticalAlign::Middle)
            .with_line_height(header_line);

        let mut default = StyleTemplate::new(body_font, font_size)
            .with_fill(BODY_FILL)
            .with_text_color(Color::BLACK)
            .with_border(LineStyle::thick())
            .with_align(HorizontalAlign::Left)
            .with_valign(VerticalAlign::Middle)
            .with_line_height(body_line);

        if theme == Theme::Plain {
            header.fill_color = Color::WHITE;
            default.fill_color = Color::WHITE;
        }

        tracing::debug!(
            ?theme,
            font_size,
            header_font = %header.font,
            body_font = %default.font,
            "built style set"
        );

        Ok(StyleSet {
            even_body: default.clone(),
            odd_body: default.clone(),
            header,
            default,
            first_column: None,
            last_column: None,
        })
    }

    /// Builds the default theme with the standard fonts at
    /// [`DEFAULT_FONT_SIZE`].
    pub fn new<M: TextMeasurer + ?Sized>(measurer: &M) -> Result<Self> {
        Self::create(measurer, None, None, DEFAULT_FONT_SIZE, Theme::Default)
    }

    /// Builds a style set from configuration, applying any template
    /// overrides it carries.
    pub fn from_options<M: TextMeasurer + ?Sized>(
        measurer: &M,
        options: &StyleOptions,
    ) -> Result<Self> {
        options.validate().map_err(GridError::config)?;
        let mut styles = Self::create(
            measurer,
            options.body_font.clone(),
            options.header_font.clone(),
            options.font_size,
            options.theme,
        )?;

        if let Some(o) = &options.header {
            styles.header = o.apply(&styles.header);
        }
        if let Some(o) = &options.even_body {
            styles.even_body = o.apply(&styles.even_body);
        }
        if let Some(o) = &options.odd_body {
            styles.odd_body = o.apply(&styles.odd_body);
        }
        if let Some(o) = &options.first_column {
            styles.first_column = Some(o.apply(&styles.default));
        }
        if let Some(o) = &options.last_column {
            styles.last_column = Some(o.apply(&styles.default));
        }
        Ok(styles)
    }

    pub fn header(&self) -> &StyleTemplate {
        &self.header
    }

    pub fn even_body(&self) -> &StyleTemplate {
        &self.even_body
    }

    pub fn odd_body(&self) -> &StyleTemplate {
        &self.odd_body
    }

    /// The body template every other template starts from.
    pub fn default_template(&self) -> &StyleTemplate {
        &self.default
    }

    /// Template for the first column: the override if set, otherwise the
    /// default template.
    pub fn first_column(&self) -> &StyleTemplate {
        self.first_column.as_ref().unwrap_or(&self.default)
    }

    /// Template for the last column: the override if set, otherwise the
    /// default template.
    pub fn last_column(&self) -> &StyleTemplate {
        self.last_column.as_ref().unwrap_or(&self.default)
    }

    pub fn first_column_override(&self) -> Option<&StyleTemplate> {
        self.first_column.as_ref()
    }

    pub fn last_column_override(&self) -> Option<&StyleTemplate> {
        self.last_column.as_ref()
    }

    pub fn set_header(&mut self, template: StyleTemplate) {
        self.header = template;
    }

    pub fn set_even_body(&mut self, template: StyleTemplate) {
        self.even_body = template;
    }

    pub fn set_odd_body(&mut self, template: StyleTemplate) {
        self.odd_body = template;
    }

    /// Overrides the first column. The override applies even when it is
    /// identical to the default template.
    pub fn set_first_column(&mut self, template: StyleTemplate) {
        self.first_column = Some(template);
    }

    /// Overrides the last column. The override applies even when it is
    /// identical to the default template.
    pub fn set_last_column(&mut self, template: StyleTemplate) {
        self.last_column = Some(template);
    }

    pub fn clear_first_column(&mut self) {
        self.first_column = None;
    }

    pub fn clear_last_column(&mut self) {
        self.last_column = None;
    }
}

fn line_height<M: TextMeasurer + ?Sized>(measurer: &M, font: &Font, size: f32) -> Result<f32> {
    measurer
        .line_height(font, size)
        .ok_or_else(|| GridError::Resource {
            font: font.name().to_string(),
            message: "measurer has no metrics for this font".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::StandardMetrics;

    fn default_set() -> StyleSet {
        StyleSet::new(&StandardMetrics).unwrap()
    }

    #[test]
    fn test_default_theme_fills() {
        let styles = default_set();
        assert_eq!(styles.header().fill_color, Color::LIGHT_GRAY);
        assert_eq!(styles.default_template().fill_color, BODY_FILL);
        assert_eq!(styles.header().border, LineStyle::thick());
        assert_eq!(styles.default_template().border, LineStyle::thick());
    }

    #[test]
    fn test_plain_theme_is_white_with_same_borders() {
        let styles =
            StyleSet::create(&StandardMetrics, None, None, 8.0, Theme::Plain).unwrap();
        assert_eq!(styles.header().fill_color, Color::WHITE);
        assert_eq!(styles.default_template().fill_color, Color::WHITE);
        assert_eq!(styles.header().border, LineStyle::thick());
    }

    #[test]
    fn test_font_fallbacks() {
        let styles = default_set();
        assert_eq!(styles.header().font, Font::HelveticaBold);
        assert_eq!(styles.default_template().font, Font::Helvetica);
    }

    #[test]
    fn test_explicit_fonts() {
        let styles = StyleSet::create(
            &StandardMetrics,
            Some(Font::TimesRoman),
            Some(Font::TimesBold),
            10.0,
            Theme::Default,
        )
        .unwrap();
        assert_eq!(styles.header().font, Font::TimesBold);
        assert_eq!(styles.even_body().font, Font::TimesRoman);
        assert_eq!(styles.odd_body().font_size, 10.0);
    }

    #[test]
    fn test_header_alignment() {
        let styles = default_set();
        assert_eq!(styles.header().align, HorizontalAlign::Center);
        assert_eq!(styles.header().valign, VerticalAlign::Middle);
        assert_eq!(styles.default_template().align, HorizontalAlign::Left);
    }

    #[test]
    fn test_body_templates_start_as_default() {
        let styles = default_set();
        assert!(styles.even_body().same_style(styles.default_template()));
        assert!(styles.odd_body().same_style(styles.default_template()));
        assert!(styles.first_column().same_style(styles.default_template()));
        assert!(styles.last_column().same_style(styles.default_template()));
        assert!(styles.first_column_override().is_none());
        assert!(styles.last_column_override().is_none());
    }

    #[test]
    fn test_row_height_uses_line_height() {
        let styles = default_set();
        // Helvetica: (718 + 207) / 1000 * 8 = 7.4, plus 5pt top and bottom
        assert!((styles.even_body().row_height - 17.4).abs() < 1e-4);
    }

    #[test]
    fn test_override_identical_to_default_is_kept() {
        let mut styles = default_set();
        let same = styles.default_template().clone();
        styles.set_first_column(same);
        assert!(styles.first_column_override().is_some());
        styles.clear_first_column();
        assert!(styles.first_column_override().is_none());
    }

    #[test]
    fn test_custom_font_without_metrics_is_resource_error() {
        let err = StyleSet::create(
            &StandardMetrics,
            Some(Font::Custom("Garamond".into())),
            None,
            8.0,
            Theme::Default,
        )
        .unwrap_err();
        match err {
            GridError::Resource { font, .. } => assert_eq!(font, "Garamond"),
            other => panic!("expected resource error, got {other:?}"),
        }
    }

    #[test]
    fn test_custom_font_with_capable_measurer() {
        let measurer = |_: &Font, text: &str, size: f32| text.len() as f32 * size * 0.5;
        let styles = StyleSet::create(
            &measurer,
            Some(Font::Custom("Garamond".into())),
            None,
            8.0,
            Theme::Default,
        )
        .unwrap();
        assert_eq!(styles.default_template().font.name(), "Garamond");
        assert_eq!(styles.default_template().row_height, 18.0);
    }
}
