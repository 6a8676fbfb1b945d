//! Error types for conversation model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid transcript JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
