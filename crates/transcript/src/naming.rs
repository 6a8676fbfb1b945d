//! Display names and export file names

use chrono::NaiveDate;
use doc_model::{Participants, Role, DEFAULT_ASSISTANT_NAME, DEFAULT_USER_NAME};
use store::OutputSettings;
use text_engine::{format_name_or, sanitize_str};

/// Fallback file-name component for the assistant
const FILE_ASSISTANT_FALLBACK: &str = "AI";

/// Sanitized, title-cased participant labels used in every export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNames {
    pub user: String,
    pub assistant: String,
}

impl DisplayNames {
    /// Resolve labels with the built-in defaults
    pub fn resolve(participants: &Participants) -> Self {
        Self::resolve_with(participants, &OutputSettings::default())
    }

    /// Resolve labels, using the configured defaults for missing names
    pub fn resolve_with(participants: &Participants, defaults: &OutputSettings) -> Self {
        Self {
            user: display_name(
                participants.user_name.as_deref(),
                &defaults.default_user_name,
                DEFAULT_USER_NAME,
            ),
            assistant: display_name(
                participants.assistant_name.as_deref(),
                &defaults.default_assistant_name,
                DEFAULT_ASSISTANT_NAME,
            ),
        }
    }

    /// Label for the sender of a message
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user,
            Role::Assistant => &self.assistant,
        }
    }
}

/// Sanitize, then title-case. Names that sanitize to nothing take the
/// configured default, and a default that sanitizes to nothing takes the
/// built-in one.
fn display_name(raw: Option<&str>, configured: &str, builtin: &str) -> String {
    let cleaned = raw.map(sanitize_str);
    let mut fallback = sanitize_str(configured);
    if fallback.trim().is_empty() {
        fallback = builtin.to_string();
    }
    format_name_or(cleaned.as_deref(), &fallback)
}

/// Output format of a rendered transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::PlainText => "txt",
        }
    }
}

/// File name for an exported transcript:
/// `chat-{user}-{assistant}-{YYYY-MM-DD}.{ext}`
///
/// `names` are already sanitized; only characters that file systems reject
/// are replaced here.
pub fn export_file_name(names: &DisplayNames, date: NaiveDate, kind: DocumentKind) -> String {
    format!(
        "chat-{}-{}-{}.{}",
        file_component(&names.user, DEFAULT_USER_NAME),
        file_component(&names.assistant, FILE_ASSISTANT_FALLBACK),
        date.format("%Y-%m-%d"),
        kind.extension()
    )
}

fn file_component(name: &str, fallback: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_ascii_control() => '_',
            c => c,
        })
        .collect();
    let cleaned = cleaned.trim().trim_matches('.');

    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.to_string()
    }
}
