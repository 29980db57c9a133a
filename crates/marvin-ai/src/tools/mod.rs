//! Textual tool-call protocol: grammar, dispatch table, and built-ins.
//!
//! The model requests side effects by emitting lines of the form
//! `TOOL: name(arg, arg)`. Each such line is parsed, dispatched against
//! a fixed registry, and replaced in the output by a `[Tool Result]`
//! line. Failures never escape: they become protocol error strings in
//! the rewritten response.

mod builtins;
mod calc;
mod engine;
mod parse;
mod registry;

pub use engine::{ToolEngine, TOOL_RESULT_PREFIX};
pub use parse::{is_tool_line, parse_tool_call, ToolCall, TOOL_MARKER};
pub use registry::{ToolFn, ToolRegistry};

/// Failures surfaced by parsing or dispatch. The `Display` strings are
/// the exact texts spliced into responses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    #[error("Error: Invalid tool call format")]
    InvalidFormat,
    #[error("Error: Tool '{0}' not found")]
    NotFound(String),
    #[error("Error executing tool: {0}")]
    Execution(String),
}
