//! Render model to PDF content conversion
//!
//! Render items use top-left coordinates; PDF pages have their origin at
//! the bottom-left, so every y is flipped against the page height.

use super::content::ContentStream;
use super::fonts::FontRegistry;
use render_model::{Color, GlyphRun, PageRender, Rect, RenderItem};

/// Converts pages to content streams, collecting the fonts they use
#[derive(Debug, Default)]
pub struct PdfRenderer {
    fonts: FontRegistry,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fonts referenced by every page rendered so far
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Render a page to a content stream
    ///
    /// Graphics are painted first in item order, then all text in a single
    /// text object.
    pub fn render_page(&mut self, page: &PageRender) -> ContentStream {
        let mut content = ContentStream::new();
        let height = page.height;

        for item in &page.items {
            match item {
                RenderItem::Rectangle { bounds, fill } => {
                    render_rectangle(&mut content, bounds, *fill, height)
                }
                RenderItem::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                } => {
                    content
                        .save_state()
                        .set_stroke_color(*color)
                        .set_line_width(*width)
                        .move_to(*x1, height - y1)
                        .line_to(*x2, height - y2)
                        .stroke()
                        .restore_state();
                }
                RenderItem::GlyphRun(_) => {}
            }
        }

        let runs: Vec<&GlyphRun> = page.glyph_runs().collect();
        if !runs.is_empty() {
            content.begin_text();

            let mut current_font: Option<(String, f64)> = None;
            let mut current_color: Option<Color> = None;

            for run in runs {
                let resource = self.fonts.resource_name(run.font);
                let font_changed = match &current_font {
                    Some((name, size)) => *name != resource || *size != run.font_size,
                    None => true,
                };
                if font_changed {
                    content.set_font(&resource, run.font_size);
                    current_font = Some((resource, run.font_size));
                }

                if current_color != Some(run.color) {
                    content.set_fill_color(run.color);
                    current_color = Some(run.color);
                }

                content
                    .set_text_position(run.x, height - run.y)
                    .show_text(&run.text);
            }

            content.end_text();
        }

        content
    }
}

fn render_rectangle(content: &mut ContentStream, bounds: &Rect, fill: Color, page_height: f64) {
    content
        .save_state()
        .set_fill_color(fill)
        .rect(
            bounds.x,
            page_height - bounds.y - bounds.height,
            bounds.width,
            bounds.height,
        )
        .fill()
        .restore_state();
}
