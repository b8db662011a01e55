//! Built-in metrics for the standard PDF faces.
//!
//! Advance widths come from the Adobe font metrics files for the printable
//! ASCII range (0x20..=0x7E), in units of 1/1000 em. Characters outside that
//! range fall back to the face's average advance, scaled by their Unicode
//! display width so wide glyphs take two slots and combining marks none.

use unicode_width::UnicodeWidthChar;

use super::TextMeasurer;
use crate::style::Font;

/// [`TextMeasurer`] backed by the standard PDF font metrics.
///
/// Custom faces are measured with Helvetica widths, but report no line
/// height: building templates for them needs a measurer that actually knows
/// the face.
///
/// # Example
///
/// ```rust
/// use cellgrid::{Font, StandardMetrics, TextMeasurer};
///
/// let width = StandardMetrics.measure(&Font::Courier, "abc", 10.0);
/// assert!((width - 18.0).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMetrics;

struct FaceMetrics {
    /// Widths for 0x20..=0x7E, or `None` for monospaced faces.
    widths: Option<&'static [u16; 95]>,
    fixed_width: u16,
    average_width: u16,
    ascender: i16,
    descender: i16,
}

impl FaceMetrics {
    fn advance(&self, c: char) -> f32 {
        let code = c as u32;
        if (0x20..=0x7E).contains(&code) {
            return match self.widths {
                Some(table) => table[(code - 0x20) as usize] as f32,
                None => self.fixed_width as f32,
            };
        }
        let columns = c.width().unwrap_or(0) as f32;
        columns * self.average_width as f32
    }
}

static HELVETICA_FACE: FaceMetrics = FaceMetrics {
    widths: Some(&HELVETICA),
    fixed_width: 0,
    average_width: 513,
    ascender: 718,
    descender: -207,
};

static HELVETICA_BOLD_FACE: FaceMetrics = FaceMetrics {
    widths: Some(&HELVETICA_BOLD),
    fixed_width: 0,
    average_width: 535,
    ascender: 718,
    descender: -207,
};

static COURIER_FACE: FaceMetrics = FaceMetrics {
    widths: None,
    fixed_width: 600,
    average_width: 600,
    ascender: 629,
    descender: -157,
};

static TIMES_ROMAN_FACE: FaceMetrics = FaceMetrics {
    widths: Some(&TIMES_ROMAN),
    fixed_width: 0,
    average_width: 401,
    ascender: 683,
    descender: -217,
};

static TIMES_BOLD_FACE: FaceMetrics = FaceMetrics {
    widths: Some(&TIMES_BOLD),
    fixed_width: 0,
    average_width: 427,
    ascender: 683,
    descender: -217,
};

fn face(font: &Font) -> &'static FaceMetrics {
    match font {
        Font::Helvetica | Font::Custom(_) => &HELVETICA_FACE,
        Font::HelveticaBold => &HELVETICA_BOLD_FACE,
        Font::Courier | Font::CourierBold => &COURIER_FACE,
        Font::TimesRoman => &TIMES_ROMAN_FACE,
        Font::TimesBold => &TIMES_BOLD_FACE,
    }
}

impl TextMeasurer for StandardMetrics {
    fn measure(&self, font: &Font, text: &str, size: f32) -> f32 {
        let metrics = face(font);
        let units: f32 = text.chars().map(|c| metrics.advance(c)).sum();
        units * size / 1000.0
    }

    fn line_height(&self, font: &Font, size: f32) -> Option<f32> {
        if font.is_custom() {
            return None;
        }
        let metrics = face(font);
        let units = (metrics.ascender as i32 - metrics.descender as i32) as f32;
        Some(units * size / 1000.0)
    }
}

const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_helvetica_widths() {
        // space 278 + 'A' 667 + space 278
        let w = StandardMetrics.measure(&Font::Helvetica, " A ", 1000.0);
        assert!(close(w, 1223.0));
    }

    #[test]
    fn test_bold_is_wider_for_lowercase() {
        let regular = StandardMetrics.measure(&Font::Helvetica, "table", 8.0);
        let bold = StandardMetrics.measure(&Font::HelveticaBold, "table", 8.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_courier_is_monospaced() {
        let narrow = StandardMetrics.measure(&Font::Courier, "iiii", 10.0);
        let wide = StandardMetrics.measure(&Font::CourierBold, "WWWW", 10.0);
        assert!(close(narrow, 24.0));
        assert!(close(narrow, wide));
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = StandardMetrics.measure(&Font::TimesRoman, "Quarterly", 6.0);
        let large = StandardMetrics.measure(&Font::TimesRoman, "Quarterly", 12.0);
        assert!(close(large, small * 2.0));
    }

    #[test]
    fn test_non_ascii_uses_display_width() {
        let latin = StandardMetrics.measure(&Font::Helvetica, "é", 1000.0);
        let cjk = StandardMetrics.measure(&Font::Helvetica, "表", 1000.0);
        assert!(close(latin, 513.0));
        assert!(close(cjk, 1026.0));
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        assert_eq!(StandardMetrics.measure(&Font::TimesBold, "", 8.0), 0.0);
    }

    #[test]
    fn test_line_height_standard_faces() {
        let h = StandardMetrics.line_height(&Font::Helvetica, 10.0).unwrap();
        assert!(close(h, 9.25));
        let c = StandardMetrics.line_height(&Font::Courier, 10.0).unwrap();
        assert!(close(c, 7.86));
    }

    #[test]
    fn test_custom_face_has_no_line_height() {
        let custom = Font::Custom("Garamond".into());
        assert_eq!(StandardMetrics.line_height(&custom, 10.0), None);
        assert!(StandardMetrics.measure(&custom, "x", 10.0) > 0.0);
    }
}
