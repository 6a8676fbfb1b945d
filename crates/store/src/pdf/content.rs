//! PDF Content Stream Generation
//!
//! A builder for page content streams. Only the operators a transcript
//! page uses are provided:
//!
//! - `q`/`Q`: save and restore graphics state
//! - `rg`/`RG`, `w`: fill and stroke color, line width
//! - `m`, `l`, `re`, `S`, `f`: paths and painting
//! - `BT`/`ET`, `Tf`, `Tm`, `Tj`: text

use super::objects::{format_real, write_literal};
use render_model::Color;
use std::io::Write;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.op("q")
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.op("Q")
    }

    /// Set the line width (w)
    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.op_with(&[width], "w")
    }

    /// Set the fill color (rg)
    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.op_with(&unit_rgb(color), "rg")
    }

    /// Set the stroke color (RG)
    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.op_with(&unit_rgb(color), "RG")
    }

    /// Begin a new subpath (m)
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op_with(&[x, y], "m")
    }

    /// Append a straight segment (l)
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op_with(&[x, y], "l")
    }

    /// Append a rectangle (re)
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.op_with(&[x, y, width, height], "re")
    }

    /// Stroke the current path (S)
    pub fn stroke(&mut self) -> &mut Self {
        self.op("S")
    }

    /// Fill the current path (f)
    pub fn fill(&mut self) -> &mut Self {
        self.op("f")
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.op("BT")
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.op("ET")
    }

    /// Select a font resource and size (Tf)
    pub fn set_font(&mut self, resource: &str, size: f64) -> &mut Self {
        let _ = writeln!(self.data, "/{resource} {} Tf", format_real(size));
        self
    }

    /// Place the text origin at an absolute position (Tm)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.op_with(&[1.0, 0.0, 0.0, 1.0, x, y], "Tm")
    }

    /// Show a text string (Tj)
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        let _ = write_literal(&mut self.data, text.as_bytes());
        self.op(" Tj")
    }

    fn op(&mut self, operator: &str) -> &mut Self {
        self.data.extend_from_slice(operator.as_bytes());
        self.data.push(b'\n');
        self
    }

    fn op_with(&mut self, operands: &[f64], operator: &str) -> &mut Self {
        for operand in operands {
            self.data.extend_from_slice(format_real(*operand).as_bytes());
            self.data.push(b' ');
        }
        self.op(operator)
    }
}

fn unit_rgb(color: Color) -> [f64; 3] {
    [color.r, color.g, color.b].map(|c| f64::from(c) / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: ContentStream) -> String {
        String::from_utf8(content.into_bytes()).unwrap()
    }

    #[test]
    fn test_path_operators() {
        let mut content = ContentStream::new();
        content
            .save_state()
            .set_stroke_color(Color::BLACK)
            .set_line_width(0.5)
            .move_to(40.0, 100.0)
            .line_to(555.0, 100.0)
            .stroke()
            .restore_state();

        assert_eq!(
            text(content),
            "q\n0 0 0 RG\n0.5 w\n40 100 m\n555 100 l\nS\nQ\n"
        );
    }

    #[test]
    fn test_text_operators() {
        let mut content = ContentStream::new();
        content
            .begin_text()
            .set_font("F1", 11.0)
            .set_text_position(60.0, 700.5)
            .show_text("a (b)")
            .end_text();

        assert_eq!(
            text(content),
            "BT\n/F1 11 Tf\n1 0 0 1 60 700.5 Tm\n(a \\(b\\)) Tj\nET\n"
        );
    }

    #[test]
    fn test_color_scaling() {
        let mut content = ContentStream::new();
        content.set_fill_color(Color::WHITE);
        assert_eq!(text(content), "1 1 1 rg\n");
    }
}
