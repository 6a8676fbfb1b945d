//! Line Breaking
//!
//! Splits text into lines that fit a maximum width. Two paths exist:
//!
//! 1. The surface's native wrapping, which places lines at Unicode line
//!    break opportunities (UAX #14) and never splits an unbreakable segment.
//! 2. A greedy word-by-word wrap used when the surface cannot measure the
//!    text it was given.
//!
//! [`wrap_text`] tries the first and falls back to the second, so callers
//! always get lines back.

use text_engine::{TextError, TextMeasure};
use tracing::warn;
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// A drawing surface that can measure text and wrap it natively
pub trait WrapSurface: TextMeasure {
    /// Split `text` into lines no wider than `max_width`
    ///
    /// Returns [`TextError::MeasurementUnavailable`] when the surface cannot
    /// measure with its current font or the width is unusable.
    fn split_text_to_size(&self, text: &str, max_width: f32) -> text_engine::Result<Vec<String>>;
}

/// Wrap text using UAX #14 break opportunities
///
/// Mandatory breaks always end a line. Lines are filled greedily with
/// whole segments; a segment wider than `max_width` is placed on its own
/// line unsplit. Trailing whitespace is trimmed from every line.
pub fn split_with_break_opportunities<M>(
    text: &str,
    max_width: f32,
    measure: &M,
) -> text_engine::Result<Vec<String>>
where
    M: TextMeasure + ?Sized,
{
    if !max_width.is_finite() || max_width <= 0.0 {
        return Err(TextError::MeasurementUnavailable(format!(
            "cannot wrap to width {max_width}"
        )));
    }
    if text.is_empty() {
        return Ok(vec![String::new()]);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (offset, opportunity) in linebreaks(text) {
        let segment = text[start..offset].trim_end_matches(['\r', '\n']);
        start = offset;

        let candidate = format!("{current}{segment}");
        let width = measure.text_width(candidate.trim_end());
        if width.is_nan() {
            return Err(TextError::InvalidWidth(width));
        }

        if width <= max_width || current.trim().is_empty() {
            current = candidate;
        } else {
            lines.push(current.trim_end().to_string());
            current = segment.to_string();
        }

        if opportunity == BreakOpportunity::Mandatory {
            lines.push(current.trim_end().to_string());
            current.clear();
        }
    }

    if !current.is_empty() {
        lines.push(current.trim_end().to_string());
    }

    Ok(lines)
}

/// Greedy word wrap on ASCII spaces
///
/// Each `\n`-separated input line is wrapped on its own and yields at least
/// one output line. A word wider than `max_width` is kept whole.
pub fn greedy_wrap<M>(text: &str, max_width: f32, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut produced = false;

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };

            if measure.text_width(&candidate) <= max_width {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    produced = true;
                }
                current = word.to_string();
            }
        }

        if !current.is_empty() || !produced {
            lines.push(current);
        }
    }

    lines
}

/// Wrap text for a surface, falling back to [`greedy_wrap`] when the
/// surface cannot measure it
pub fn wrap_text<S>(text: &str, max_width: f32, surface: &S) -> Vec<String>
where
    S: WrapSurface + ?Sized,
{
    match surface.split_text_to_size(text, max_width) {
        Ok(lines) => lines,
        Err(err @ (TextError::MeasurementUnavailable(_) | TextError::InvalidWidth(_))) => {
            warn!(error = %err, max_width, "native wrapping failed, using greedy wrap");
            greedy_wrap(text, max_width, surface)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use text_engine::{FontMeasure, StandardFont};

    /// One point per character
    fn mono(text: &str) -> f32 {
        text.chars().count() as f32
    }

    struct NativeSurface;

    impl TextMeasure for NativeSurface {
        fn text_width(&self, text: &str) -> f32 {
            mono(text)
        }
    }

    impl WrapSurface for NativeSurface {
        fn split_text_to_size(&self, text: &str, max_width: f32) -> text_engine::Result<Vec<String>> {
            split_with_break_opportunities(text, max_width, self)
        }
    }

    /// A surface whose native wrapping always fails
    struct BrokenSurface;

    impl TextMeasure for BrokenSurface {
        fn text_width(&self, text: &str) -> f32 {
            mono(text)
        }
    }

    impl WrapSurface for BrokenSurface {
        fn split_text_to_size(&self, _text: &str, _max_width: f32) -> text_engine::Result<Vec<String>> {
            Err(TextError::MeasurementUnavailable("no font".into()))
        }
    }

    #[test]
    fn test_single_word() {
        let lines = split_with_break_opportunities("Hello", 100.0, &mono).unwrap();
        assert_eq!(lines, vec!["Hello"]);
    }

    #[test]
    fn test_line_breaking() {
        let lines = split_with_break_opportunities("Hello world test", 11.0, &mono).unwrap();
        assert_eq!(lines, vec!["Hello world", "test"]);
    }

    #[test]
    fn test_mandatory_break() {
        let lines = split_with_break_opportunities("Hello\nworld", 500.0, &mono).unwrap();
        assert_eq!(lines, vec!["Hello", "world"]);

        let lines = split_with_break_opportunities("a\r\nb", 500.0, &mono).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_text() {
        let lines = split_with_break_opportunities("", 100.0, &mono).unwrap();
        assert_eq!(lines, vec![String::new()]);
    }

    #[test]
    fn test_overwide_token_is_not_split() {
        let token = "x".repeat(500);
        let lines = split_with_break_opportunities(&token, 50.0, &mono).unwrap();
        assert_eq!(lines, vec![token.clone()]);

        assert_eq!(greedy_wrap(&token, 50.0, &mono), vec![token]);
    }

    #[test]
    fn test_invalid_width_is_unavailable() {
        for width in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                split_with_break_opportunities("a b", width, &mono),
                Err(TextError::MeasurementUnavailable(_))
            ));
        }
    }

    #[test]
    fn test_greedy_wrap() {
        let lines = greedy_wrap("the quick brown fox", 9.0, &mono);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_greedy_blank_lines() {
        assert_eq!(greedy_wrap("", 10.0, &mono), vec![""]);
        assert_eq!(greedy_wrap("a\n\nb", 10.0, &mono), vec!["a", "", "b"]);
    }

    #[test]
    fn test_greedy_terminates_on_bad_width() {
        let lines = greedy_wrap("one two three", 0.0, &mono);
        assert_eq!(lines, vec!["one", "two", "three"]);

        let lines = greedy_wrap("one two", f32::NAN, &mono);
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_wrap_text_uses_native_path() {
        let lines = wrap_text("aaa bbb", 3.0, &NativeSurface);
        assert_eq!(lines, vec!["aaa", "bbb"]);
    }

    #[test]
    fn test_wrap_text_falls_back() {
        let lines = wrap_text("the quick brown fox", 9.0, &BrokenSurface);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_text_invalid_width_falls_back() {
        let lines = wrap_text("a b", -1.0, &NativeSurface);
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wraps_with_font_metrics() {
        let measure = FontMeasure::new(StandardFont::Helvetica, 11.0);
        let text = "The quick brown fox jumps over the lazy dog ".repeat(10);
        let lines = split_with_break_opportunities(&text, 200.0, &measure).unwrap();
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure.text_width(line) <= 200.0);
        }
    }

    fn words(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|l| l.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_native_wrap_bound(text in "[a-z]{1,12}( [a-z]{1,12}){0,30}", width in 5.0f32..80.0) {
            let lines = split_with_break_opportunities(&text, width, &mono).unwrap();
            for line in &lines {
                prop_assert!(mono(line) <= width || !line.trim().contains(' '));
            }
            prop_assert_eq!(words(&lines), words(&[text]));
        }

        #[test]
        fn prop_greedy_wrap_bound(text in "[a-z]{1,12}( [a-z]{1,12}){0,30}", width in 5.0f32..80.0) {
            let lines = greedy_wrap(&text, width, &mono);
            for line in &lines {
                prop_assert!(mono(line) <= width || !line.contains(' '));
            }
            prop_assert_eq!(words(&lines), words(&[text]));
        }

        #[test]
        fn prop_greedy_line_count(text in "[a-z \n]{0,60}") {
            let lines = greedy_wrap(&text, 10.0, &mono);
            prop_assert!(lines.len() >= text.split('\n').count());
        }
    }
}
