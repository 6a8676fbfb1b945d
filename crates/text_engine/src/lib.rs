//! Text Engine - Text sanitization, name formatting, and metrics
//!
//! This crate holds the pure text transforms applied to user-supplied text
//! before it is measured or drawn, plus the width tables of the standard
//! PDF fonts used to measure it.
//!
//! # Modules
//!
//! - `sanitize`: Reduces arbitrary text to the printable ASCII subset
//! - `names`: Display-name normalization
//! - `font`: The standard-14 PDF fonts
//! - `metrics`: Advance widths and text measurement

mod error;
mod font;
mod metrics;
pub mod names;
pub mod sanitize;

pub use error::*;
pub use font::*;
pub use metrics::*;
pub use names::{format_name, format_name_or};
pub use sanitize::{sanitize, sanitize_str, NO_MESSAGE};
