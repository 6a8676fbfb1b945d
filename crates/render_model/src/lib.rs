//! Render Model - Draw primitives and theming
//!
//! This crate holds the page-level drawing primitives produced by the
//! transcript renderer and the color palettes for each theme. Render items
//! use top-left page coordinates in points.

mod render_item;
mod theme;

pub use render_item::*;
pub use theme::*;
