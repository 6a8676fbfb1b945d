//! Layout Engine - Line breaking and pagination
//!
//! This crate turns sanitized text into lines that fit a width, and tracks
//! the vertical cursor of a paginated document so callers know when to
//! start a new page.

mod error;
mod line_breaker;
mod paginator;

pub use error::*;
pub use line_breaker::*;
pub use paginator::*;
