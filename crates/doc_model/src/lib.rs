//! Document Model - Conversation log types
//!
//! This crate provides the read-only input of the transcript export engine:
//! the ordered conversation log, its messages, and the participant labels.

mod conversation;
mod error;
mod message;
mod participants;

pub use conversation::*;
pub use error::*;
pub use message::*;
pub use participants::*;
