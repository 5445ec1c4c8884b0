//! Configuration file loading for the AI player.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! usable configuration.
//!
//! ```toml
//! depth = 4
//! max_time_ms = 2000
//!
//! [eval]
//! queen = 950
//! piece_square_tables = true
//! ```

use crate::eval::EvalWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration parsed but holds an unusable value.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Search and evaluation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Maximum search depth in plies. Defaults to 3.
    pub depth: u8,
    /// Time budget per move in milliseconds. Unlimited when absent.
    pub max_time_ms: Option<u64>,
    /// Evaluation weights.
    pub eval: EvalWeights,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            depth: 3,
            max_time_ms: None,
            eval: EvalWeights::default(),
        }
    }
}

impl AiConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] for values the search cannot use.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AiConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// the errors of [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks that the settings are usable by the search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Invalid("depth must be at least 1".to_string()));
        }
        if self.max_time_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "max_time_ms must be positive when set".to_string(),
            ));
        }
        Ok(())
    }

    /// The time budget as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.max_time_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AiConfig::from_toml_str("").unwrap();
        assert_eq!(config, AiConfig::default());
        assert_eq!(config.depth, 3);
        assert_eq!(config.time_limit(), None);
        assert!(!config.eval.piece_square_tables);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
depth = 5
max_time_ms = 1500

[eval]
queen = 950
king_attacked_penalty = 50
piece_square_tables = true
"#;
        let config = AiConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.depth, 5);
        assert_eq!(config.time_limit(), Some(Duration::from_millis(1500)));
        assert_eq!(config.eval.queen, 950);
        assert_eq!(config.eval.king_attacked_penalty, 50);
        assert!(config.eval.piece_square_tables);
        // Unspecified weights keep their defaults
        assert_eq!(config.eval.rook, 500);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let result = AiConfig::from_toml_str("depth = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_time_rejected() {
        let result = AiConfig::from_toml_str("max_time_ms = 0");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = AiConfig::from_toml_str("depth = \"deep\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = AiConfig::load("/nonexistent/chess-ai.toml");
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = AiConfig {
            depth: 4,
            max_time_ms: Some(250),
            eval: EvalWeights::default(),
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AiConfig::from_toml_str(&text).unwrap(), config);
    }
}
