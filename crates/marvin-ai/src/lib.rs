//! Agent engine for Marvin.
//!
//! Provides an Ollama-compatible completion client with:
//! - Conversation sessions with a bounded prompt window
//! - A textual tool-call protocol (`TOOL: name(args)`) executed
//!   line-by-line over model output
//! - Six built-in tools (time, file access, directory listing,
//!   arithmetic)

pub mod ollama;
pub mod prompt;
pub mod session;
pub mod tools;

use async_trait::async_trait;

pub use ollama::{OllamaClient, OllamaConfig};
pub use session::{Session, Turn};
pub use tools::{ToolEngine, ToolRegistry};

/// A plain-text completion backend.
///
/// Marvin's prompts are rendered transcripts (system prompt plus
/// recent turns), so the backend surface is a single prompt-in,
/// text-out call.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Session is busy with another request")]
    Busy,
}
