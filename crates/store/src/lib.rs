//! Store - Document serialization, persistence, and settings
//!
//! This crate writes transcripts out: it serializes rendered pages to PDF,
//! persists artifacts to disk atomically, and loads the export settings.

mod error;
mod file_io;
mod settings;
pub mod pdf;

pub use error::*;
pub use file_io::*;
pub use settings::*;
