//! Session struct and prompt construction.

use std::sync::atomic::AtomicBool;

use crate::prompt;
use crate::tools::{ToolEngine, ToolRegistry};

use super::types::Turn;

/// Number of past turns rendered into each prompt. Older turns stay in
/// memory but fall out of the model's context.
pub(crate) const HISTORY_WINDOW: usize = 5;

/// A conversation session: system prompt, rolling history, and the
/// tool engine applied to every model reply.
pub struct Session {
    /// System prompt rendered at the top of every request.
    pub(super) system_prompt: String,
    /// Completed exchanges, oldest first.
    pub(super) turns: Vec<Turn>,
    /// Executes tool calls found in replies.
    pub(super) tools: ToolEngine,
    /// Whether the session is currently processing a request.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new(tools: ToolEngine) -> Self {
        Self {
            system_prompt: prompt::default_system_prompt(),
            turns: Vec::new(),
            tools,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Render the request prompt: system prompt, the most recent
    /// turns, then the new user message awaiting its completion.
    pub(crate) fn build_prompt(&self, user_input: &str) -> String {
        let mut out = format!("System: {}\n\n", self.system_prompt);
        let start = self.turns.len().saturating_sub(HISTORY_WINDOW);
        for turn in &self.turns[start..] {
            out.push_str(&format!(
                "Human: {}\nAssistant: {}\n\n",
                turn.user, turn.assistant
            ));
        }
        out.push_str(&format!("Human: {user_input}\nAssistant: "));
        out
    }

    /// Full in-memory history, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of completed exchanges.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Clear conversation history. The system prompt is unaffected.
    pub fn reset(&mut self) {
        self.turns.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ToolEngine::new(ToolRegistry::builtin()))
    }
}
