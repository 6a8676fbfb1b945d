//! Font resources
//!
//! Transcripts only use the standard-14 fonts, which viewers supply
//! themselves. Each font used on any page gets one resource name (`F1`,
//! `F2`, ...) shared by every page of the document.

use super::objects::{PdfDictionary, PdfObject};
use text_engine::StandardFont;

/// Resource names for the fonts of one document, in order of first use
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<StandardFont>,
}

impl FontRegistry {
    /// Resource name for `font`, registering it on first use
    pub fn resource_name(&mut self, font: StandardFont) -> String {
        let index = match self.fonts.iter().position(|f| *f == font) {
            Some(index) => index,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    /// Registered fonts with their resource names
    pub fn fonts(&self) -> impl Iterator<Item = (String, StandardFont)> + '_ {
        self.fonts
            .iter()
            .enumerate()
            .map(|(i, font)| (format!("F{}", i + 1), *font))
    }
}

/// Create a font dictionary for a standard font
pub fn create_standard_font_dict(font: StandardFont) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Font");
    dict.insert("Subtype", PdfObject::name("Type1"));
    dict.insert("BaseFont", PdfObject::name(font.pdf_name()));
    if let Some(encoding) = font.encoding() {
        dict.insert("Encoding", PdfObject::name(encoding));
    }
    dict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names_are_stable() {
        let mut registry = FontRegistry::default();
        assert_eq!(registry.resource_name(StandardFont::HelveticaBold), "F1");
        assert_eq!(registry.resource_name(StandardFont::Helvetica), "F2");
        assert_eq!(registry.resource_name(StandardFont::HelveticaBold), "F1");

        let names: Vec<_> = registry.fonts().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["F1", "F2"]);
    }

    #[test]
    fn test_font_dict() {
        let dict = create_standard_font_dict(StandardFont::Helvetica);
        assert_eq!(dict.get("BaseFont"), Some(&PdfObject::name("Helvetica")));
        assert_eq!(dict.get("Encoding"), Some(&PdfObject::name("WinAnsiEncoding")));

        let dict = create_standard_font_dict(StandardFont::ZapfDingbats);
        assert!(dict.get("Encoding").is_none());
    }
}
