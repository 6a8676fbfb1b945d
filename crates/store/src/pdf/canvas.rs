//! PDF drawing surface
//!
//! [`PdfCanvas`] is what a document renderer draws into. It keeps the
//! active font and color like a PDF graphics state, measures and wraps text
//! with the active font's metrics, and records everything as render-model
//! pages that the writer later serializes.

use layout_engine::{split_with_break_opportunities, WrapSurface};
use render_model::{Color, GlyphRun, PageRender, RenderItem, TextRole};
use text_engine::{font_metrics, FontMeasure, StandardFont, TextMeasure};

/// A paginated drawing surface backed by the standard PDF fonts
#[derive(Debug, Clone)]
pub struct PdfCanvas {
    width: f64,
    height: f64,
    pages: Vec<PageRender>,
    font: StandardFont,
    font_size: f32,
    text_color: Color,
    background: Option<Color>,
}

impl PdfCanvas {
    /// Create a canvas holding one empty page
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pages: vec![PageRender::new(0, width, height)],
            font: StandardFont::Helvetica,
            font_size: 12.0,
            text_color: Color::BLACK,
            background: None,
        }
    }

    /// Paint every page, present and future, with `color`
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        if let Some(color) = color {
            for page in &mut self.pages {
                page.fill_background(color);
            }
        }
        self
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Select the font used by later text and measurements
    pub fn set_font(&mut self, font: StandardFont, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    pub fn font(&self) -> StandardFont {
        self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Start a new page and make it current
    pub fn add_page(&mut self) {
        let mut page = PageRender::new(self.pages.len() as u32, self.width, self.height);
        if let Some(color) = self.background {
            page.fill_background(color);
        }
        self.pages.push(page);
    }

    /// Draw text with its baseline starting at (`x`, `y`)
    pub fn text(&mut self, text: &str, x: f32, y: f32, role: TextRole) {
        let run = GlyphRun::new(text, self.font, f64::from(self.font_size), role)
            .with_color(self.text_color)
            .at(f64::from(x), f64::from(y));
        self.push(RenderItem::GlyphRun(run));
    }

    /// Draw a horizontal rule of `length` starting at (`x`, `y`)
    pub fn rule(&mut self, x: f32, y: f32, length: f32, color: Color, width: f32) {
        self.push(RenderItem::hline(
            f64::from(x),
            f64::from(y),
            f64::from(length),
            color,
            f64::from(width),
        ));
    }

    fn push(&mut self, item: RenderItem) {
        if let Some(page) = self.pages.last_mut() {
            page.push(item);
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[PageRender] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageRender> {
        self.pages
    }
}

impl TextMeasure for PdfCanvas {
    fn text_width(&self, text: &str) -> f32 {
        FontMeasure::new(self.font, self.font_size).text_width(text)
    }
}

impl WrapSurface for PdfCanvas {
    fn split_text_to_size(&self, text: &str, max_width: f32) -> text_engine::Result<Vec<String>> {
        font_metrics(self.font)?;
        split_with_break_opportunities(text, max_width, self)
    }
}
