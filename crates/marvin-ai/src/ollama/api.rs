//! CompletionClient trait implementation for OllamaClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionClient};

use super::client::OllamaClient;

#[async_trait]
impl CompletionClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let body = self.build_request_body(prompt);
        let url = self.api_url();

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Ollama generate request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}
