//! Transcript document renderer
//!
//! Draws a conversation log onto a [`PdfCanvas`]: a header on the first
//! page, one labelled block per message with content, separators between
//! messages, and a footer on the last page. The layout cursor is created
//! per render and threaded through every drawing step.

use crate::{export_file_name, DisplayNames, DocumentKind, Result};
use chrono::{DateTime, Utc};
use doc_model::{ConversationLog, Message, Participants};
use layout_engine::{wrap_text, PageBreak, PageLayout};
use render_model::{PageRender, Palette, TextRole, Theme};
use store::pdf::{export_pdf_bytes, PdfCanvas, PdfExportOptions};
use store::{ExportSettings, LayoutSettings};
use text_engine::{sanitize, StandardFont};
use tracing::debug;

/// Distance the message separator sits above the cursor
const SEPARATOR_RISE: f32 = 4.0;

/// A rendered, not yet persisted, export artifact
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
    /// Number of pages; 1 for plain text
    pub page_count: usize,
}

/// Renders conversation logs to PDF
#[derive(Debug, Clone, Default)]
pub struct TranscriptRenderer {
    settings: ExportSettings,
}

impl TranscriptRenderer {
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Render a PDF stamped with the current time
    pub fn render(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
    ) -> Result<RenderedDocument> {
        self.render_at(log, participants, theme, Utc::now())
    }

    /// Render a PDF stamped with `generated_at`
    pub fn render_at(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
        generated_at: DateTime<Utc>,
    ) -> Result<RenderedDocument> {
        let names = DisplayNames::resolve_with(participants, &self.settings.output);
        let canvas = self.draw(log, &names, theme, generated_at)?;

        let options = PdfExportOptions::new()
            .with_title(format!("Chat with {}", names.assistant))
            .with_author(names.user.clone())
            .with_subject("Chat transcript")
            .with_creation_date(generated_at);
        let bytes = export_pdf_bytes(canvas.pages(), options)?;

        Ok(RenderedDocument {
            file_name: export_file_name(&names, generated_at.date_naive(), DocumentKind::Pdf),
            kind: DocumentKind::Pdf,
            bytes,
            page_count: canvas.page_count(),
        })
    }

    /// Lay out the transcript without serializing it
    pub fn layout_pages(
        &self,
        log: &ConversationLog,
        participants: &Participants,
        theme: Theme,
        generated_at: DateTime<Utc>,
    ) -> Result<Vec<PageRender>> {
        let names = DisplayNames::resolve_with(participants, &self.settings.output);
        Ok(self.draw(log, &names, theme, generated_at)?.into_pages())
    }

    fn draw(
        &self,
        log: &ConversationLog,
        names: &DisplayNames,
        theme: Theme,
        generated_at: DateTime<Utc>,
    ) -> Result<PdfCanvas> {
        let settings = &self.settings.layout;
        let palette = theme.palette();
        let mut layout = PageLayout::new(settings.page_size, settings.margins, settings.line_height)?;
        let mut canvas = PdfCanvas::new(f64::from(layout.page_width), f64::from(layout.page_height))
            .with_background(palette.page_background);
        let timestamp = format_timestamp(generated_at);

        let mut pass = RenderPass {
            settings,
            palette: &palette,
            names,
            canvas: &mut canvas,
        };
        pass.header(&mut layout, &timestamp);

        let mut labels = 0usize;
        for message in log.renderable() {
            pass.message(&mut layout, message);
            labels += 1;
        }
        pass.footer(&layout, &timestamp);

        debug!(
            pages = layout.page_count(),
            labels,
            theme = %theme,
            "rendered transcript"
        );
        Ok(canvas)
    }
}

/// Timestamp shown in the header and footer
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Drawing state shared by the steps of one render
struct RenderPass<'a> {
    settings: &'a LayoutSettings,
    palette: &'a Palette,
    names: &'a DisplayNames,
    canvas: &'a mut PdfCanvas,
}

impl RenderPass<'_> {
    /// Make room for `height`, mirroring a page break onto the canvas
    fn reserve(&mut self, layout: &mut PageLayout, height: f32) {
        if layout.ensure_space(height) == PageBreak::Broken {
            self.canvas.add_page();
        }
    }

    fn rule(&mut self, layout: &PageLayout, y: f32, color: render_model::Color) {
        self.canvas.rule(
            layout.margins.left,
            y,
            layout.content_width(),
            color,
            self.settings.rule_width,
        );
    }

    fn header(&mut self, layout: &mut PageLayout, timestamp: &str) {
        let s = self.settings;

        self.reserve(layout, s.title_gap);
        self.canvas.set_font(StandardFont::sans(true), s.title_size);
        self.canvas.set_text_color(self.palette.header);
        let (x, y) = layout.position();
        let title = format!("Chat with {}", self.names.assistant);
        self.canvas.text(&title, x, y, TextRole::Title);
        layout.advance(s.title_gap);

        self.reserve(layout, s.metadata_gap);
        self.canvas.set_font(StandardFont::sans(false), s.body_size);
        self.canvas.set_text_color(self.palette.metadata);
        let (x, y) = layout.position();
        let metadata = format!("{} | {}", self.names.user, timestamp);
        self.canvas.text(&metadata, x, y, TextRole::Metadata);
        layout.advance(s.metadata_gap);

        self.reserve(layout, s.header_rule_gap);
        self.rule(layout, layout.cursor_y, self.palette.header_rule);
        layout.advance(s.header_rule_gap);
    }

    fn message(&mut self, layout: &mut PageLayout, message: &Message) {
        let s = self.settings;
        let role = message.role();

        // Keep a label together with the first line of its body
        self.reserve(layout, s.label_gap + s.line_height);
        let label_color = if role.is_user() {
            self.palette.sender_user
        } else {
            self.palette.sender_other
        };
        self.canvas.set_font(StandardFont::sans(true), s.body_size);
        self.canvas.set_text_color(label_color);
        let (x, y) = layout.position();
        let label = format!("{}:", self.names.for_role(role));
        self.canvas.text(&label, x, y, TextRole::SenderLabel(role));
        layout.advance(s.label_gap);

        self.canvas.set_font(StandardFont::sans(false), s.body_size);
        self.canvas.set_text_color(self.palette.text);
        let content = sanitize(message.content());
        let body_x = layout.margins.left + s.body_indent;
        let body_width = layout.content_width() - s.body_indent;
        let lines = wrap_text(&content, body_width, &*self.canvas);
        for line in lines {
            self.reserve(layout, s.line_height);
            self.canvas.text(&line, body_x, layout.cursor_y, TextRole::Body);
            layout.advance(s.line_height);
        }

        if layout.fits(s.message_gap) {
            let half = s.message_gap / 2.0;
            layout.advance(half);
            self.rule(layout, layout.cursor_y - SEPARATOR_RISE, self.palette.separator);
            layout.advance(s.message_gap - half);
        }
    }

    /// Footer on the current, and therefore last, page
    fn footer(&mut self, layout: &PageLayout, timestamp: &str) {
        let s = self.settings;
        self.canvas.set_font(StandardFont::sans(false), s.footer_size);
        self.canvas.set_text_color(self.palette.footer);
        let footer = format!("Generated by {} on {}", self.names.assistant, timestamp);
        let y = layout.page_height - s.footer_offset;
        self.canvas
            .text(&footer, layout.margins.left, y, TextRole::Footer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use doc_model::Role;
    use render_model::{Color, GlyphRun, RenderItem};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap()
    }

    fn runs(pages: &[PageRender]) -> Vec<&GlyphRun> {
        pages.iter().flat_map(|p| p.glyph_runs()).collect()
    }

    fn layout(log: &ConversationLog, theme: Theme) -> Vec<PageRender> {
        TranscriptRenderer::default()
            .layout_pages(log, &Participants::default().with_user("ada"), theme, at())
            .unwrap()
    }

    #[test]
    fn test_empty_log_has_header_and_footer() {
        let pages = layout(&ConversationLog::new(), Theme::Light);
        assert_eq!(pages.len(), 1);

        let runs = runs(&pages);
        let roles: Vec<_> = runs.iter().map(|r| r.role).collect();
        assert_eq!(roles, vec![TextRole::Title, TextRole::Metadata, TextRole::Footer]);
        assert_eq!(runs[0].text, "Chat with Ai Assistant");
        assert_eq!(runs[1].text, "Ada | 2024-03-09 14:30:00 UTC");
        assert_eq!(runs[2].text, "Generated by Ai Assistant on 2024-03-09 14:30:00 UTC");
    }

    #[test]
    fn test_header_geometry() {
        let pages = layout(&ConversationLog::new(), Theme::Light);
        let runs = runs(&pages);

        assert_eq!((runs[0].x, runs[0].y), (40.0, 40.0));
        assert_eq!(runs[0].font, StandardFont::HelveticaBold);
        assert_eq!(runs[0].font_size, 18.0);
        assert_eq!(runs[1].y, 65.0);
        assert_eq!(runs[2].y, 812.0);
        assert_eq!(runs[2].font_size, 10.0);

        let rule = pages[0].items.iter().find_map(|item| match item {
            RenderItem::Line { y1, x1, x2, .. } => Some((*x1, *x2, *y1)),
            _ => None,
        });
        assert_eq!(rule, Some((40.0, 555.0, 85.0)));
    }

    #[test]
    fn test_message_block() {
        let mut log = ConversationLog::new();
        log.push(Message::user("Hello"));
        log.push(Message::assistant("**Sure**, here you go"));
        let pages = layout(&log, Theme::Light);

        let body: Vec<_> = runs(&pages)
            .into_iter()
            .filter(|r| matches!(r.role, TextRole::SenderLabel(_) | TextRole::Body))
            .map(|r| (r.text.as_str(), r.x, r.y))
            .collect();
        assert_eq!(
            body,
            vec![
                ("Ada:", 40.0, 105.0),
                ("Hello", 60.0, 121.0),
                ("Ai Assistant:", 40.0, 155.0),
                ("Sure, here you go", 60.0, 171.0),
            ]
        );
    }

    #[test]
    fn test_label_colors_follow_role_and_theme() {
        let mut log = ConversationLog::new();
        log.push(Message::user("a"));
        log.push(Message::assistant("b"));

        for theme in [Theme::Light, Theme::Dark] {
            let palette = theme.palette();
            let pages = layout(&log, theme);
            let labels: Vec<_> = runs(&pages)
                .into_iter()
                .filter_map(|r| match r.role {
                    TextRole::SenderLabel(role) => Some((role, r.color)),
                    _ => None,
                })
                .collect();
            assert_eq!(
                labels,
                vec![(Role::User, palette.sender_user), (Role::Assistant, palette.sender_other)]
            );
        }
    }

    #[test]
    fn test_dark_theme_paints_every_page() {
        let mut log = ConversationLog::new();
        for i in 0..80 {
            log.push(Message::user(format!("message {i}")));
        }
        let pages = layout(&log, Theme::Dark);
        assert!(pages.len() > 1);

        for page in &pages {
            match &page.items[0] {
                RenderItem::Rectangle { fill, .. } => {
                    assert_eq!(*fill, Color::rgb(24, 24, 27))
                }
                other => panic!("expected background, got {other:?}"),
            }
        }

        let light = layout(&log, Theme::Light);
        assert!(light
            .iter()
            .all(|p| !matches!(p.items.first(), Some(RenderItem::Rectangle { .. }))));
    }

    #[test]
    fn test_footer_only_on_last_page() {
        let mut log = ConversationLog::new();
        for i in 0..80 {
            log.push(Message::assistant(format!("reply {i}")));
        }
        let pages = layout(&log, Theme::Light);
        let last = pages.len() - 1;

        for page in &pages {
            let footers = page.glyph_runs().filter(|r| r.role == TextRole::Footer).count();
            let expected = usize::from(page.page_index as usize == last);
            assert_eq!(footers, expected);
        }
        // No header repeated after a page break
        assert_eq!(
            runs(&pages).iter().filter(|r| r.role == TextRole::Title).count(),
            1
        );
    }

    #[test]
    fn test_long_message_wraps_within_body_width() {
        let mut log = ConversationLog::new();
        log.push(Message::user("lorem ipsum dolor sit amet ".repeat(40)));
        let pages = layout(&log, Theme::Light);

        let body: Vec<_> = runs(&pages)
            .into_iter()
            .filter(|r| r.role == TextRole::Body)
            .collect();
        assert!(body.len() > 1);
        for run in body {
            let width = text_engine::text_width(run.font, run.font_size as f32, &run.text).unwrap();
            assert!(width <= 495.0, "{:?} is {width}pt wide", run.text);
        }
    }

    #[test]
    fn test_render_produces_pdf() {
        let mut log = ConversationLog::new();
        log.push(Message::user("Hi"));
        let document = TranscriptRenderer::default()
            .render_at(&log, &Participants::default(), Theme::Dark, at())
            .unwrap();

        assert_eq!(document.kind, DocumentKind::Pdf);
        assert_eq!(document.page_count, 1);
        assert_eq!(document.file_name, "chat-User-Ai Assistant-2024-03-09.pdf");
        assert!(document.bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_invalid_page_setup_is_a_render_error() {
        let mut settings = ExportSettings::default();
        settings.layout.line_height = 0.0;
        let err = TranscriptRenderer::new(settings)
            .render_at(&ConversationLog::new(), &Participants::default(), Theme::Light, at())
            .unwrap_err();
        assert!(matches!(err, crate::ExportError::Render(_)));
    }
}
