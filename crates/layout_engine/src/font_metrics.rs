//! Static glyph-width tables for the standard PDF sans-serif faces.
//!
//! Widths are in thousandths of an em, taken from the Helvetica and
//! Helvetica-Bold AFM files. Tables cover ASCII 0x20..=0x7E; index is
//! `(char as usize) - 32`. Characters outside the table fall back to the
//! width of a digit.

use serde::{Deserialize, Serialize};

const FIRST_CHAR: usize = 0x20;
const FALLBACK_WIDTH: u16 = 556;
const MONOSPACE_WIDTH: u16 = 600;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Font selection for a run of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family name
    pub family: String,
    /// Font size in points
    pub size: f32,
    /// Whether bold
    pub bold: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, bold: bool) -> Self {
        Self {
            family: family.into(),
            size,
            bold,
        }
    }

    /// Helvetica-Bold at the given size
    pub fn helvetica_bold(size: f32) -> Self {
        Self::new("Helvetica", size, true)
    }

    fn is_monospace(&self) -> bool {
        let family = self.family.to_lowercase();
        family.contains("courier") || family.contains("mono")
    }
}

/// Width of one character in thousandths of an em
pub fn glyph_width(c: char, font: &FontSpec) -> u16 {
    if font.is_monospace() {
        return MONOSPACE_WIDTH;
    }

    let table = if font.bold { &HELVETICA_BOLD } else { &HELVETICA };
    (c as usize)
        .checked_sub(FIRST_CHAR)
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(FALLBACK_WIDTH)
}

/// Advance width of `text` in points
pub fn text_width(text: &str, font: &FontSpec) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, font) as u32).sum();
    units as f32 * font.size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_widths_are_uniform() {
        let font = FontSpec::helvetica_bold(16.0);
        for c in '0'..='9' {
            assert_eq!(glyph_width(c, &font), 556);
        }
    }

    #[test]
    fn test_problem_width() {
        let font = FontSpec::helvetica_bold(16.0);
        // " 7 +  5 = _____": 6 spaces, 2 digits, '+', '=', 5 underscores
        let expected = (6 * 278 + 2 * 556 + 584 + 584 + 5 * 556) as f32 * 16.0 / 1000.0;
        assert!((text_width(" 7 +  5 = _____", &font) - expected).abs() < 0.001);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let regular = FontSpec::new("Helvetica", 12.0, false);
        let bold = FontSpec::new("Helvetica", 12.0, true);
        let text = "Simple Addition and Subtraction Worksheet";
        assert!(text_width(text, &bold) > text_width(text, &regular));
    }

    #[test]
    fn test_monospace_and_fallback() {
        let mono = FontSpec::new("Courier", 10.0, false);
        assert_eq!(text_width("abc", &mono), 18.0);

        let font = FontSpec::helvetica_bold(10.0);
        assert_eq!(glyph_width('é', &font), 556);
        assert_eq!(glyph_width('\n', &font), 556);
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(text_width("", &FontSpec::helvetica_bold(16.0)), 0.0);
    }
}
