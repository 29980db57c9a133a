//! Configuration schema with serde defaults.

use serde::{Deserialize, Serialize};

/// Root configuration. Every section defaults, so a partial or absent
/// file works.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MarvinConfig {
    pub ollama: OllamaSettings,
}

/// Connection and sampling settings for the Ollama backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OllamaSettings {
    /// Base URL of the inference server.
    pub base_url: String,
    /// Model tag passed to `/api/generate`.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Output token cap, forwarded as Ollama's `num_predict`.
    pub max_tokens: u32,
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            temperature: 0.5,
            max_tokens: 4000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_server() {
        let config = MarvinConfig::default();
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.ollama.model, "llama3.2:3b");
        assert_eq!(config.ollama.temperature, 0.5);
        assert_eq!(config.ollama.max_tokens, 4000);
    }

    #[test]
    fn empty_toml_deserializes_to_defaults() {
        let config: MarvinConfig = toml::from_str("").unwrap();
        assert_eq!(config, MarvinConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: MarvinConfig = toml::from_str(
            r#"
[ollama]
model = "qwen2.5:7b"
"#,
        )
        .unwrap();
        assert_eq!(config.ollama.model, "qwen2.5:7b");
        assert_eq!(config.ollama.base_url, "http://localhost:11434");
        assert_eq!(config.ollama.max_tokens, 4000);
    }
}
