//! Display-name normalization

/// Fallback used when no user name is available
pub const DEFAULT_NAME: &str = "User";

/// Title-case a display name, falling back to `"User"`
pub fn format_name(name: Option<&str>) -> String {
    format_name_or(name, DEFAULT_NAME)
}

/// Title-case a display name, falling back to `fallback` when the name is
/// absent or blank
///
/// Words are split on whitespace and rejoined with single spaces. The first
/// character of each word is uppercased and the rest lowercased.
pub fn format_name_or(name: Option<&str>, fallback: &str) -> String {
    let name = match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => fallback,
    };

    name.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
