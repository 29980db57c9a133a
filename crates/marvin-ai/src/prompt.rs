//! Default system prompt shown to the model.

/// Tool list embedded in the system prompt. Kept in step with
/// `ToolRegistry::builtin` by hand; the sync test below keeps us
/// honest.
pub const TOOL_CATALOG: &str = "\
Available tools:
1. get_current_time() - Get current date and time
2. read_file(filepath) - Read contents of a file (checks if exists first)
3. write_file(filepath, content) - Write content to a file
4. list_directory(path) - List directory contents
5. file_exists(filepath) - Check if a file exists
6. calculate(expression) - Perform basic math calculations

IMPORTANT: Always check if files exist before trying to read them!
To use a tool, format your response as: TOOL: tool_name(parameters)";

/// Default system prompt: assistant role, the tool catalog, usage
/// rules, and the `TOOL:` wire format the engine parses.
pub fn default_system_prompt() -> String {
    format!(
        "\
You are a helpful AI assistant running offline. You have access to several tools to help users.

{TOOL_CATALOG}

IMPORTANT RULES:
1. NEVER assume files exist - always check first with file_exists() or list_directory()
2. Only use tools when specifically needed - don't make up file operations
3. For general knowledge questions (like \"tell me about the universe\"), use your built-in knowledge
4. Only use file tools when the user specifically asks about files or wants to create/read files
5. Be direct and helpful without unnecessary tool calls

When you want to use a tool, include it in your response using the format: TOOL: tool_name(parameters)

Be helpful, concise, and always explain what you're doing."
    )
}

#[cfg(test)]
mod tests {
    use crate::tools::ToolRegistry;

    use super::*;

    #[test]
    fn catalog_names_every_registered_tool() {
        let registry = ToolRegistry::builtin();
        for name in [
            "get_current_time",
            "read_file",
            "write_file",
            "list_directory",
            "file_exists",
            "calculate",
        ] {
            assert!(registry.contains(name), "unregistered tool: {name}");
            assert!(TOOL_CATALOG.contains(name), "catalog missing: {name}");
        }
    }

    #[test]
    fn system_prompt_documents_the_wire_format() {
        let prompt = default_system_prompt();
        assert!(prompt.contains("Available tools:"));
        assert!(prompt.contains("TOOL: tool_name(parameters)"));
        assert!(prompt.starts_with("You are a helpful AI assistant"));
    }
}
