//! Advance widths and text measurement for the standard fonts
//!
//! Widths are in 1/1000 em, taken from the Adobe Font Metrics files of the
//! base-14 fonts and indexed by code point from `' '` to `'~'`.

use crate::{Result, StandardFont, TextError};

const FIRST_CHAR: u32 = 0x20;
const LAST_CHAR: u32 = 0x7E;
const GLYPH_COUNT: usize = (LAST_CHAR - FIRST_CHAR + 1) as usize;

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; GLYPH_COUNT] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0' - '9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':' - '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N' - 'Z'
    278, 278, 278, 469, 556, 333,                                                   // '[' - '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a' - 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n' - 'z'
    334, 260, 334, 584,                                                             // '{' - '~'
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; GLYPH_COUNT] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' - '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0' - '9'
    333, 333, 584, 584, 584, 611, 975,                                              // ':' - '@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,                // 'A' - 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N' - 'Z'
    333, 278, 333, 584, 556, 333,                                                   // '[' - '`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,                // 'a' - 'm'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,                // 'n' - 'z'
    389, 280, 389, 584,                                                             // '{' - '~'
];

static COURIER_WIDTHS: [u16; GLYPH_COUNT] = [600; GLYPH_COUNT];

/// Metrics of one standard font
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Units per em
    pub units_per_em: u16,
    /// Per-glyph advance widths, when the font has a table
    widths: Option<&'static [u16; GLYPH_COUNT]>,
    /// Width used for glyphs without a table entry
    average_width: u16,
}

impl FontMetrics {
    /// Advance width of a character in font units
    pub fn advance(&self, c: char) -> u16 {
        let cp = c as u32;
        match self.widths {
            Some(widths) if (FIRST_CHAR..=LAST_CHAR).contains(&cp) => {
                widths[(cp - FIRST_CHAR) as usize]
            }
            Some(widths) if c == '\t' => widths[0],
            _ => self.average_width,
        }
    }

    /// Width of `text` in points at `font_size`
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.advance(c))).sum();
        units as f32 * font_size / f32::from(self.units_per_em)
    }
}

static HELVETICA: FontMetrics = FontMetrics {
    units_per_em: 1000,
    widths: Some(&HELVETICA_WIDTHS),
    average_width: 500,
};

static HELVETICA_BOLD: FontMetrics = FontMetrics {
    units_per_em: 1000,
    widths: Some(&HELVETICA_BOLD_WIDTHS),
    average_width: 520,
};

static COURIER: FontMetrics = FontMetrics {
    units_per_em: 1000,
    widths: Some(&COURIER_WIDTHS),
    average_width: 600,
};

static TIMES: FontMetrics = FontMetrics {
    units_per_em: 1000,
    widths: None,
    average_width: 450,
};

static TIMES_BOLD: FontMetrics = FontMetrics {
    units_per_em: 1000,
    widths: None,
    average_width: 480,
};

/// Look up the metrics of a standard font
///
/// Symbol and ZapfDingbats have no usable metrics for text and report
/// [`TextError::MeasurementUnavailable`].
pub fn font_metrics(font: StandardFont) -> Result<&'static FontMetrics> {
    match font {
        StandardFont::Helvetica | StandardFont::HelveticaOblique => Ok(&HELVETICA),
        StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => Ok(&HELVETICA_BOLD),
        StandardFont::Courier
        | StandardFont::CourierBold
        | StandardFont::CourierOblique
        | StandardFont::CourierBoldOblique => Ok(&COURIER),
        StandardFont::TimesRoman | StandardFont::TimesItalic => Ok(&TIMES),
        StandardFont::TimesBold | StandardFont::TimesBoldItalic => Ok(&TIMES_BOLD),
        StandardFont::Symbol | StandardFont::ZapfDingbats => Err(
            TextError::MeasurementUnavailable(font.pdf_name().to_string()),
        ),
    }
}

/// Width of `text` set in `font` at `font_size`, in points
pub fn text_width(font: StandardFont, font_size: f32, text: &str) -> Result<f32> {
    Ok(font_metrics(font)?.text_width(text, font_size))
}

/// Estimate the width of a string using an average character width
///
/// Always succeeds, for any font.
pub fn estimate_text_width(text: &str, font: StandardFont, font_size: f32) -> f32 {
    let avg_width = match font {
        StandardFont::Courier
        | StandardFont::CourierBold
        | StandardFont::CourierOblique
        | StandardFont::CourierBoldOblique => 0.6,
        StandardFont::Helvetica | StandardFont::HelveticaOblique => 0.5,
        StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => 0.52,
        StandardFont::TimesRoman | StandardFont::TimesItalic => 0.45,
        StandardFont::TimesBold | StandardFont::TimesBoldItalic => 0.48,
        StandardFont::Symbol | StandardFont::ZapfDingbats => 0.5,
    };

    text.chars().count() as f32 * avg_width * font_size
}

/// Anything that can report the rendered width of a string
pub trait TextMeasure {
    /// Width of `text` in points
    fn text_width(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    fn text_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// A font at a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMeasure {
    pub font: StandardFont,
    pub size: f32,
}

impl FontMeasure {
    pub fn new(font: StandardFont, size: f32) -> Self {
        Self { font, size }
    }
}

impl TextMeasure for FontMeasure {
    fn text_width(&self, text: &str) -> f32 {
        text_width(self.font, self.size, text)
            .unwrap_or_else(|_| estimate_text_width(text, self.font, self.size))
    }
}
