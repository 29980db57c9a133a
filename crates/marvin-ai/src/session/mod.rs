//! Conversation session management.
//!
//! A `Session` holds the rolling history, renders prompts with a
//! bounded context window, and runs every reply through the tool
//! engine before recording it.

mod chat;
mod manager;
mod types;

pub use manager::Session;
pub use types::Turn;
