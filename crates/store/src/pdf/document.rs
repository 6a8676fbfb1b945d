//! PDF Document Structure
//!
//! Catalog, page tree, page objects, and the info dictionary.

use super::objects::{PdfDictionary, PdfObject};
use chrono::{DateTime, Utc};

/// PDF version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PdfVersion {
    /// PDF 1.4 (Acrobat 5)
    #[default]
    V1_4,
    /// PDF 1.7 (Acrobat 8)
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// PDF document information
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Creator application
    pub creator: Option<String>,
    /// PDF producer
    pub producer: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            creator: Some("chat-export".to_string()),
            producer: Some(concat!("chat-export ", env!("CARGO_PKG_VERSION")).to_string()),
            creation_date: None,
        }
    }
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert to PDF dictionary
    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        let text_entries = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
        ];
        for (key, value) in text_entries {
            if let Some(value) = value {
                dict.insert(key, PdfObject::string(value));
            }
        }
        if let Some(date) = self.creation_date {
            dict.insert("CreationDate", PdfObject::string(&pdf_date(date)));
        }
        dict
    }
}

/// Format a timestamp as a PDF date string
pub fn pdf_date(date: DateTime<Utc>) -> String {
    date.format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Create a catalog dictionary (document root)
pub fn create_catalog(pages_ref: u32) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Catalog");
    dict.insert("Pages", PdfObject::Reference(pages_ref));
    dict
}

/// Create a pages dictionary (page tree root)
pub fn create_pages(page_refs: &[u32]) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Pages");
    dict.insert(
        "Kids",
        PdfObject::Array(page_refs.iter().map(|&r| PdfObject::Reference(r)).collect()),
    );
    dict.insert("Count", PdfObject::Integer(page_refs.len() as i64));
    dict
}

/// Create a page dictionary
pub fn create_page(
    parent_ref: u32,
    contents_ref: u32,
    width: f64,
    height: f64,
    resources: PdfDictionary,
) -> PdfDictionary {
    let mut dict = PdfDictionary::typed("Page");
    dict.insert("Parent", PdfObject::Reference(parent_ref));
    dict.insert("MediaBox", PdfObject::reals(&[0.0, 0.0, width, height]));
    dict.insert("Contents", PdfObject::Reference(contents_ref));
    dict.insert("Resources", resources);
    dict
}
