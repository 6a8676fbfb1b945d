//! Transcript - Chat transcript export
//!
//! This crate ties the engine together: it resolves participant names,
//! renders a conversation log into a paginated, themed PDF, assembles the
//! plain-text transcript, and hands artifacts to the file system or a
//! clipboard.
//!
//! # Example
//!
//! ```no_run
//! use transcript::{ConversationLog, Exporter, Message, Participants, Theme};
//!
//! let mut log = ConversationLog::new();
//! log.push(Message::user("Hello"));
//! log.push(Message::assistant("Hi! How can I help?"));
//!
//! let exporter = Exporter::default();
//! let artifact = exporter.export_document(&log, &Participants::default(), Theme::Dark)?;
//! println!("wrote {}", artifact.path.display());
//! # Ok::<(), transcript::ExportError>(())
//! ```

mod clipboard;
mod error;
mod exporter;
mod naming;
mod plain_text;
mod renderer;

pub use clipboard::*;
pub use error::*;
pub use exporter::*;
pub use naming::*;
pub use plain_text::*;
pub use renderer::*;

pub use doc_model::{ConversationLog, Message, Participants, Role};
pub use render_model::Theme;
pub use store::ExportSettings;
