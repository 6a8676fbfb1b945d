//! Text sanitization
//!
//! Reduces arbitrary message text to the subset the standard PDF fonts can
//! render: printable ASCII plus `\n`. Emphasis markers are removed and the
//! enclosed text kept. The transform is total and idempotent.

use regex_lite::Regex;
use std::fmt::Display;
use std::sync::OnceLock;

/// Placeholder used when a message has no content at all
pub const NO_MESSAGE: &str = "(no message)";

/// Emoji and pictograph ranges removed before the general non-ASCII pass
const EMOJI_RANGES: [(u32, u32); 6] = [
    (0x1F600, 0x1F64F),
    (0x1F300, 0x1F5FF),
    (0x1F680, 0x1F6FF),
    (0x1F1E0, 0x1F1FF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

/// Sanitize an optional value, coercing it to text first
///
/// `None` yields [`NO_MESSAGE`].
pub fn sanitize<T: Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => sanitize_str(&value.to_string()),
        None => NO_MESSAGE.to_string(),
    }
}

/// Sanitize a string
pub fn sanitize_str(text: &str) -> String {
    let ascii: String = text
        .chars()
        .filter(|&c| c != '\0')
        .filter(|&c| !is_emoji(c))
        .filter(char::is_ascii)
        .filter_map(|c| match c {
            '\t' => Some(' '),
            '\r' | '\n' => Some(c),
            c if c.is_ascii_control() => None,
            c => Some(c),
        })
        .collect();

    let plain = strip_emphasis(ascii);
    collapse_line_breaks(&plain).trim().to_string()
}

fn is_emoji(c: char) -> bool {
    let cp = c as u32;
    EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

fn emphasis_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"\*\*([^\r\n]*?)\*\*").ok())
        .as_ref()
}

/// Remove paired `**` markers on a single line until none remain
///
/// Underscores are left alone: `__init__` and `snake_case` are content.
fn strip_emphasis(mut text: String) -> String {
    let Some(pattern) = emphasis_pattern() else {
        return text;
    };
    while pattern.is_match(&text) {
        text = pattern.replace_all(&text, "$1").into_owned();
    }
    text
}

/// Collapse every run of `\r` and `\n` into a single `\n`
fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                out.push('\n');
                in_break = true;
            }
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_emphasis() {
        assert_eq!(sanitize_str("**Hello** world"), "Hello world");
        assert_eq!(sanitize_str("****"), "");
        assert_eq!(sanitize_str("****nested****"), "nested");
    }

    #[test]
    fn test_keeps_underscores() {
        assert_eq!(sanitize_str("my_pkg/__init__.py"), "my_pkg/__init__.py");
        assert_eq!(sanitize_str("call obj.__len__()"), "call obj.__len__()");
        assert_eq!(sanitize_str("**__bold dunder__**"), "__bold dunder__");
    }

    #[test]
    fn test_emphasis_does_not_span_lines() {
        assert_eq!(sanitize_str("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_collapses_line_breaks() {
        assert_eq!(sanitize_str("a\r\n\r\nb"), "a\nb");
        assert_eq!(sanitize_str("a\rb"), "a\nb");
        assert_eq!(sanitize_str("a\n\n\n\nb"), "a\nb");
    }

    #[test]
    fn test_strips_emoji_and_non_ascii() {
        assert_eq!(sanitize_str("Hi \u{1F600} there \u{2603}"), "Hi  there");
        assert_eq!(sanitize_str("caf\u{e9}"), "caf");
        assert_eq!(sanitize_str("\u{1F680}"), "");
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize_str("a\0b"), "ab");
        assert_eq!(sanitize_str("a\tb"), "a b");
        assert_eq!(sanitize_str("a\x07b\x1b"), "ab");
    }

    #[test]
    fn test_trims() {
        assert_eq!(sanitize_str("  \n hello \n  "), "hello");
    }

    #[test]
    fn test_sanitize_option() {
        assert_eq!(sanitize::<str>(None), NO_MESSAGE);
        assert_eq!(sanitize(Some("**x**")), "x");
        assert_eq!(sanitize(Some(&42)), "42");
    }

    proptest! {
        #[test]
        fn prop_idempotent(s in any::<String>()) {
            let once = sanitize_str(&s);
            prop_assert_eq!(sanitize_str(&once), once);
        }

        #[test]
        fn prop_ascii_closed(s in any::<String>()) {
            let out = sanitize_str(&s);
            prop_assert!(out.chars().all(|c| c == '\n' || (' '..='~').contains(&c)));
            prop_assert!(!out.contains("\n\n"));
        }

        #[test]
        fn prop_idempotent_markup_heavy(s in "[a-z*_ \r\n\t]{0,40}") {
            let once = sanitize_str(&s);
            prop_assert_eq!(sanitize_str(&once), once);
        }
    }
}
