//! PDF Export Module
//!
//! Converts render-model pages into PDF 1.4 files using the standard-14
//! fonts and uncompressed content streams.
//!
//! # Architecture
//!
//! - `objects`: PDF object model and serialization
//! - `document`: Catalog, page tree, and info dictionary
//! - `content`: Content stream operators
//! - `fonts`: Font resource naming
//! - `renderer`: Converts a `PageRender` to a content stream
//! - `canvas`: Drawing surface with measurement and native wrapping
//! - `writer`: File structure, xref table, and trailer
//! - `options`: PDF export configuration
//! - `api`: Public API for PDF export

mod api;
mod canvas;
mod content;
mod document;
mod fonts;
mod objects;
mod options;
mod renderer;
mod writer;

pub use api::*;
pub use canvas::PdfCanvas;
pub use document::{pdf_date, DocumentInfo, PdfVersion};
pub use options::*;
pub use writer::{PdfDocumentWriter, PdfError};
