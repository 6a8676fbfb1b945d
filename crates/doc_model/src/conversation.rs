//! The ordered conversation log

use crate::{Message, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered sequence of messages
///
/// Order is display order and is preserved by every export path. The export
/// engine only ever borrows a log; it never mutates one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

/// On-disk transcript layouts accepted by [`ConversationLog::from_json`]
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Bare(Vec<Message>),
    Wrapped { messages: Vec<Message> },
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message at the end of the log
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Messages that produce output in a paginated document, in order
    pub fn renderable(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.has_content())
    }

    /// Parse a transcript from JSON
    ///
    /// Accepts either a bare array of messages or an object with a
    /// `messages` array.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TranscriptFile = serde_json::from_str(json)?;
        let messages = match file {
            TranscriptFile::Bare(messages) => messages,
            TranscriptFile::Wrapped { messages } => messages,
        };
        Ok(Self { messages })
    }

    /// Load a transcript from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl From<Vec<Message>> for ConversationLog {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}

impl FromIterator<Message> for ConversationLog {
    fn from_iter<I: IntoIterator<Item = Message>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConversationLog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
