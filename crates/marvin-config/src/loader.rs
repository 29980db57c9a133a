//! TOML config loading: read from a path or the platform default.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::schema::MarvinConfig;
use crate::ConfigError;

/// Load config from a specific TOML file path.
///
/// Deserializes using serde defaults for any missing fields.
pub fn load_from_path(path: &Path) -> Result<MarvinConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: MarvinConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/marvin/config.toml`
/// On Linux: `~/.config/marvin/config.toml`
///
/// If the file does not exist, creates a default config file and
/// returns defaults.
pub fn load_default() -> Result<MarvinConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(MarvinConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("marvin").join("config.toml"))
}

/// Create a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

/// Default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Marvin configuration
# Only override what you want to change -- missing fields use defaults.

[ollama]
model = "llama3.2:3b"
# base_url = "http://localhost:11434"
# temperature = 0.5      # sampling temperature
# max_tokens = 4000      # response cap, sent as num_predict
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_from_nonexistent_returns_file_not_found() {
        let result = load_from_path(Path::new("/tmp/nonexistent_marvin_config.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_valid_partial_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ollama]
base_url = "http://gpu-box:11434"
temperature = 0.9
"#,
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
        assert_eq!(config.ollama.temperature, 0.9);
        // Defaults preserved
        assert_eq!(config.ollama.model, "llama3.2:3b");
        assert_eq!(config.ollama.max_tokens, 4000);
    }

    #[test]
    fn load_invalid_toml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn create_and_load_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marvin").join("config.toml");

        create_default_config(&path).unwrap();
        assert!(path.exists());

        let config = load_from_path(&path).unwrap();
        assert_eq!(config, MarvinConfig::default());
    }

    #[test]
    fn default_config_toml_is_valid() {
        let content = default_config_toml();
        let config: MarvinConfig = toml::from_str(&content).unwrap();
        assert_eq!(config.ollama.model, "llama3.2:3b");
    }

    #[test]
    fn default_config_path_is_reasonable() {
        // This may not work in all CI environments, but should work locally
        if let Ok(path) = default_config_path() {
            let path_str = path.to_string_lossy();
            assert!(path_str.contains("marvin"));
            assert!(path_str.ends_with("config.toml"));
        }
    }
}
