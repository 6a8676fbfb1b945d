//! The standard-14 PDF fonts

use serde::{Deserialize, Serialize};

/// Standard PDF Type1 fonts that every viewer provides without embedding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardFont {
    /// Times Roman
    TimesRoman,
    /// Times Bold
    TimesBold,
    /// Times Italic
    TimesItalic,
    /// Times Bold Italic
    TimesBoldItalic,
    /// Helvetica
    #[default]
    Helvetica,
    /// Helvetica Bold
    HelveticaBold,
    /// Helvetica Oblique
    HelveticaOblique,
    /// Helvetica Bold Oblique
    HelveticaBoldOblique,
    /// Courier
    Courier,
    /// Courier Bold
    CourierBold,
    /// Courier Oblique
    CourierOblique,
    /// Courier Bold Oblique
    CourierBoldOblique,
    /// Symbol
    Symbol,
    /// Zapf Dingbats
    ZapfDingbats,
}

impl StandardFont {
    /// Get the PDF base font name
    pub fn pdf_name(&self) -> &'static str {
        match self {
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
            StandardFont::Symbol => "Symbol",
            StandardFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Get the font encoding (WinAnsiEncoding for text fonts)
    pub fn encoding(&self) -> Option<&'static str> {
        match self {
            StandardFont::Symbol | StandardFont::ZapfDingbats => None,
            _ => Some("WinAnsiEncoding"),
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::TimesBold
                | StandardFont::TimesBoldItalic
                | StandardFont::HelveticaBold
                | StandardFont::HelveticaBoldOblique
                | StandardFont::CourierBold
                | StandardFont::CourierBoldOblique
        )
    }

    /// The Helvetica face used for regular or bold transcript text
    pub fn sans(bold: bool) -> Self {
        if bold {
            StandardFont::HelveticaBold
        } else {
            StandardFont::Helvetica
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_names() {
        assert_eq!(StandardFont::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(StandardFont::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(StandardFont::Symbol.encoding(), None);
        assert_eq!(StandardFont::Courier.encoding(), Some("WinAnsiEncoding"));
    }

    #[test]
    fn test_sans() {
        assert_eq!(StandardFont::sans(true), StandardFont::HelveticaBold);
        assert!(StandardFont::sans(true).is_bold());
        assert!(!StandardFont::sans(false).is_bold());
    }
}
