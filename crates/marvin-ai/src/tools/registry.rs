//! Dispatch table mapping tool names to handlers.

use std::collections::HashMap;

use super::builtins;
use super::ToolError;

/// Handler signature shared by every tool.
///
/// Arguments arrive as already-split, already-unquoted tokens from the
/// call site; handlers validate their own arity.
pub type ToolFn = fn(&[String]) -> Result<String, ToolError>;

/// Immutable name-to-handler table, built once at startup and handed
/// to the engine.
pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolFn>,
}

impl ToolRegistry {
    /// Registry holding the six built-in tools.
    pub fn builtin() -> Self {
        let mut tools: HashMap<&'static str, ToolFn> = HashMap::new();
        tools.insert("get_current_time", builtins::get_current_time);
        tools.insert("read_file", builtins::read_file);
        tools.insert("write_file", builtins::write_file);
        tools.insert("list_directory", builtins::list_directory);
        tools.insert("file_exists", builtins::file_exists);
        tools.insert("calculate", builtins::calculate);
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<ToolFn> {
        self.tools.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
