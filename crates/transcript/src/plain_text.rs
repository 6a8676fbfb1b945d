//! Plain-text transcript assembly

use crate::DisplayNames;
use doc_model::ConversationLog;
use text_engine::sanitize;

/// Separator placed between messages
pub const MESSAGE_SEPARATOR: &str = "\n\n";

/// Build the plain-text transcript: one `"{sender}: {content}"` entry per
/// message, in log order
///
/// Unlike the rendered document, messages without content are kept and
/// read "(no message)".
pub fn plain_text_transcript(log: &ConversationLog, names: &DisplayNames) -> String {
    log.iter()
        .map(|message| {
            format!(
                "{}: {}",
                names.for_role(message.role()),
                sanitize(message.content())
            )
        })
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}
