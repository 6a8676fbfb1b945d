//! PDF Export Public API

use super::options::PdfExportOptions;
use super::writer::{PdfDocumentWriter, PdfError, Result};
use render_model::PageRender;

/// Export render pages to PDF bytes in memory
pub fn export_pdf_bytes(pages: &[PageRender], options: PdfExportOptions) -> Result<Vec<u8>> {
    validate_pages(pages)?;
    PdfDocumentWriter::new(options).write_to_bytes(pages)
}

/// Validate that pages can be exported to PDF
pub fn validate_pages(pages: &[PageRender]) -> Result<()> {
    if pages.is_empty() {
        return Err(PdfError::InvalidDocument("No pages to export".to_string()));
    }

    for (i, page) in pages.iter().enumerate() {
        if !(page.width.is_finite() && page.width > 0.0) {
            return Err(PdfError::InvalidDocument(format!(
                "Page {} has invalid width: {}",
                i, page.width
            )));
        }
        if !(page.height.is_finite() && page.height > 0.0) {
            return Err(PdfError::InvalidDocument(format!(
                "Page {} has invalid height: {}",
                i, page.height
            )));
        }
    }

    Ok(())
}
