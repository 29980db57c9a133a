//! Async chat method for Session.

use tracing::debug;

use crate::{AiError, CompletionClient};

use super::manager::Session;
use super::types::{BusyGuard, Turn};

impl Session {
    /// Send a user message through the backend and return the final
    /// reply, with tool calls executed and spliced in.
    ///
    /// Backend failures are reported in-band as diagnostic text and
    /// recorded in history like any other reply; the only error this
    /// returns is `AiError::Busy` when a chat is already in flight.
    pub async fn chat(
        &mut self,
        client: &dyn CompletionClient,
        user_input: impl Into<String>,
    ) -> Result<String, AiError> {
        let _guard = BusyGuard::acquire(&self.busy)?;
        let user_input = user_input.into();

        let prompt = self.build_prompt(&user_input);
        debug!(
            prompt_len = prompt.len(),
            turns = self.turns.len(),
            "Sending chat request"
        );

        let raw = match client.complete(&prompt).await {
            Ok(text) => text,
            Err(AiError::NetworkError(msg)) | Err(AiError::ApiError(msg)) => {
                format!("Error connecting to Ollama: {msg}")
            }
            Err(AiError::ParseError(msg)) => {
                debug!(error = %msg, "Malformed backend payload");
                "Error: Invalid response from Ollama".to_string()
            }
            Err(AiError::Busy) => return Err(AiError::Busy),
        };

        let reply = self.tools.process_response(&raw);
        self.turns.push(Turn::new(user_input, reply.clone()));
        Ok(reply)
    }
}
