//! Error types for transcript export

use layout_engine::LayoutError;
use store::pdf::PdfError;
use store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the transcript is empty")]
    EmptyTranscript,

    #[error("Render error: {0}")]
    Render(String),

    #[error("Persist error: {0}")]
    Persist(#[from] StoreError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<LayoutError> for ExportError {
    fn from(err: LayoutError) -> Self {
        ExportError::Render(err.to_string())
    }
}

impl From<PdfError> for ExportError {
    fn from(err: PdfError) -> Self {
        ExportError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
