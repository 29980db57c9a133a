//! Ollama inference server client.
//!
//! Implements the `CompletionClient` trait against the `/api/generate`
//! endpoint of a local Ollama-compatible server.

mod api;
mod client;
mod config;

pub use client::OllamaClient;
pub use config::OllamaConfig;

#[cfg(test)]
mod client_tests {
    use crate::AiError;

    use super::*;

    #[test]
    fn api_url_joins_generate_endpoint() {
        let client = OllamaClient::new(OllamaConfig::new());
        assert_eq!(client.api_url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn api_url_tolerates_trailing_slash() {
        let config = OllamaConfig::new().with_base_url("http://inference-box:11434/");
        let client = OllamaClient::new(config);
        assert_eq!(client.api_url(), "http://inference-box:11434/api/generate");
    }

    #[test]
    fn request_body_disables_streaming_and_maps_token_cap() {
        let config = OllamaConfig::new()
            .with_model("llama3.2:3b")
            .with_temperature(0.5)
            .with_max_tokens(4000);
        let client = OllamaClient::new(config);

        let body = client.build_request_body("Hello");
        assert_eq!(body["model"], "llama3.2:3b");
        assert_eq!(body["prompt"], "Hello");
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["temperature"], 0.5);
        assert_eq!(body["options"]["num_predict"], 4000);
    }

    #[test]
    fn parse_response_extracts_completion_text() {
        let client = OllamaClient::new(OllamaConfig::new());
        let json = serde_json::json!({ "response": "Hi there", "done": true });
        assert_eq!(client.parse_response(json).unwrap(), "Hi there");
    }

    #[test]
    fn parse_response_rejects_payload_without_response_field() {
        let client = OllamaClient::new(OllamaConfig::new());

        let json = serde_json::json!({ "done": true });
        assert!(matches!(
            client.parse_response(json),
            Err(AiError::ParseError(_))
        ));

        // Wrong type counts as missing too.
        let json = serde_json::json!({ "response": 42 });
        assert!(matches!(
            client.parse_response(json),
            Err(AiError::ParseError(_))
        ));
    }
}
