//! Error types for text engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextError {
    /// The font has no width table, or the requested width cannot be measured against
    #[error("Text measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    #[error("Invalid width: {0}")]
    InvalidWidth(f32),
}

pub type Result<T> = std::result::Result<T, TextError>;
