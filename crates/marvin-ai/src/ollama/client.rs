//! Ollama client struct, request building, and response parsing.

use std::time::Duration;

use crate::AiError;

use super::config::OllamaConfig;

pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for an Ollama-compatible inference server.
pub struct OllamaClient {
    pub(crate) config: OllamaConfig,
    pub(crate) http: reqwest::Client,
}

impl OllamaClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(CONNECT_TIMEOUT)
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/api/generate", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body for `/api/generate`.
    ///
    /// `num_predict` is Ollama's name for the output token cap.
    pub(crate) fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "num_predict": self.config.max_tokens,
            }
        })
    }

    /// Extract the completion text from a generate response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        json["response"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AiError::ParseError("no response field in payload".to_string()))
    }
}
