//! Tool-call grammar: line classification and argument splitting.

use std::sync::LazyLock;

use regex::Regex;

use super::ToolError;

/// Marker that makes a line a tool call once surrounding whitespace is
/// trimmed.
pub const TOOL_MARKER: &str = "TOOL:";

/// Grammar for a complete call: marker, identifier, opening paren
/// directly after the identifier, and an argument body running to the
/// first closing paren. Trailing text on the line is ignored.
static TOOL_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^TOOL:\s*(\w+)\((.*?)\)").expect("tool call regex"));

/// Quote characters stripped from argument tokens, one layer per end,
/// each end independently. Models habitually emit curly quotes, so
/// both forms are accepted.
const QUOTE_CHARS: &[char] = &['"', '\'', '“', '”', '‘', '’'];

/// A parsed tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub name: String,
    pub args: Vec<String>,
}

/// Whether a response line should be treated as a tool call.
pub fn is_tool_line(line: &str) -> bool {
    line.trim().starts_with(TOOL_MARKER)
}

/// Parse one tool-call line into a name and argument tokens.
pub fn parse_tool_call(line: &str) -> Result<ToolCall, ToolError> {
    let line = line.trim();
    let caps = TOOL_CALL_RE.captures(line).ok_or(ToolError::InvalidFormat)?;
    Ok(ToolCall {
        name: caps[1].to_string(),
        args: split_args(&caps[2]),
    })
}

/// Split an argument body on every comma. There is no escaping: a
/// comma inside an argument value produces extra tokens, which the
/// tool's arity check rejects downstream.
fn split_args(body: &str) -> Vec<String> {
    if body.trim().is_empty() {
        return Vec::new();
    }
    body.split(',').map(clean_token).collect()
}

/// Trim a token, then strip at most one quote character from each end.
/// Unpaired quotes are stripped too; interior quotes stay.
fn clean_token(token: &str) -> String {
    let mut token = token.trim();
    if let Some(rest) = token.strip_prefix(QUOTE_CHARS) {
        token = rest;
    }
    if let Some(rest) = token.strip_suffix(QUOTE_CHARS) {
        token = rest;
    }
    token.to_string()
}
