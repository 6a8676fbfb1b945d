//! Render item types

use doc_model::Role;
use serde::{Deserialize, Serialize};
use text_engine::StandardFont;

/// A rectangle in render coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// What a piece of text is in the transcript layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "role", rename_all = "snake_case")]
pub enum TextRole {
    /// "Chat with ..." heading on the first page
    Title,
    /// User name and timestamp under the title
    Metadata,
    /// "Name:" line introducing a message
    SenderLabel(Role),
    /// One wrapped line of message content
    Body,
    /// "Generated by ..." line on the last page
    Footer,
}

/// A glyph run for rendering text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// The text to render
    pub text: String,
    /// Standard font the text is set in
    pub font: StandardFont,
    /// Font size in points
    pub font_size: f64,
    /// Text color
    pub color: Color,
    /// Position (baseline start)
    pub x: f64,
    pub y: f64,
    pub role: TextRole,
}

impl GlyphRun {
    pub fn new(text: impl Into<String>, font: StandardFont, font_size: f64, role: TextRole) -> Self {
        Self {
            text: text.into(),
            font,
            font_size,
            color: Color::BLACK,
            x: 0.0,
            y: 0.0,
            role,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// A glyph run (text)
    GlyphRun(GlyphRun),
    /// A filled rectangle
    Rectangle { bounds: Rect, fill: Color },
    /// A line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
}

impl RenderItem {
    /// A horizontal rule
    pub fn hline(x: f64, y: f64, length: f64, color: Color, width: f64) -> Self {
        RenderItem::Line {
            x1: x,
            y1: y,
            x2: x + length,
            y2: y,
            color,
            width,
        }
    }
}

/// A rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRender {
    pub page_index: u32,
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderItem>,
}

impl PageRender {
    pub fn new(page_index: u32, width: f64, height: f64) -> Self {
        Self {
            page_index,
            width,
            height,
            items: Vec::new(),
        }
    }

    /// Paint the whole page with `color`
    ///
    /// The fill goes below every item already on the page.
    pub fn fill_background(&mut self, color: Color) {
        let bounds = Rect::new(0.0, 0.0, self.width, self.height);
        self.items.insert(
            0,
            RenderItem::Rectangle {
                bounds,
                fill: color,
            },
        );
    }

    pub fn push(&mut self, item: RenderItem) {
        self.items.push(item);
    }

    /// Text runs on this page, in drawing order
    pub fn glyph_runs(&self) -> impl Iterator<Item = &GlyphRun> {
        self.items.iter().filter_map(|item| match item {
            RenderItem::GlyphRun(run) => Some(run),
            _ => None,
        })
    }
}
