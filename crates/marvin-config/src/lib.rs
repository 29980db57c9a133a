//! Marvin configuration system.
//!
//! TOML-based configuration with serde defaults, so partial configs
//! work out of the box. A missing config file is created from a
//! commented template on first run.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use marvin_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.ollama.model);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{create_default_config, default_config_path, load_default, load_from_path};
pub use schema::{MarvinConfig, OllamaSettings};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),
}

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a
/// default file if none exists.
pub fn load_config() -> Result<MarvinConfig, ConfigError> {
    loader::load_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }
}
