//! Line-oriented tool-call processing over model output.

use tracing::debug;

use super::parse::{is_tool_line, parse_tool_call};
use super::registry::ToolRegistry;
use super::ToolError;

/// Prefix of the line spliced in place of an executed tool call.
pub const TOOL_RESULT_PREFIX: &str = "[Tool Result] ";

/// Scans model output for tool-call lines and replaces them with
/// execution results.
pub struct ToolEngine {
    registry: ToolRegistry,
}

impl ToolEngine {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Rewrite `response`, executing each tool-call line in place.
    /// Every other line passes through untouched, blank lines included.
    pub fn process_response(&self, response: &str) -> String {
        let mut lines = Vec::new();
        for line in response.split('\n') {
            if is_tool_line(line) {
                let result = self.execute(line);
                lines.push(format!("{TOOL_RESULT_PREFIX}{result}"));
            } else {
                lines.push(line.to_string());
            }
        }
        lines.join("\n")
    }

    /// Execute one tool-call line, folding every failure into its
    /// protocol error string.
    pub fn execute(&self, line: &str) -> String {
        match self.dispatch(line) {
            Ok(output) => output,
            Err(err) => err.to_string(),
        }
    }

    fn dispatch(&self, line: &str) -> Result<String, ToolError> {
        let call = parse_tool_call(line)?;
        let handler = self
            .registry
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;
        debug!(tool = %call.name, args = call.args.len(), "Executing tool");
        handler(&call.args)
    }
}
