//! PDF Export Options

use super::document::PdfVersion;
use chrono::{DateTime, Utc};

/// Options for PDF export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfExportOptions {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    /// Recorded as the info dictionary's creation date
    pub creation_date: Option<DateTime<Utc>>,
    pub version: PdfVersion,
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_creation_date(mut self, date: DateTime<Utc>) -> Self {
        self.creation_date = Some(date);
        self
    }

    pub fn with_version(mut self, version: PdfVersion) -> Self {
        self.version = version;
        self
    }
}
