//! Match configuration loaded from TOML.

use crate::players::PlayerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for a series of games.
///
/// ```toml
/// x = "random"
/// o = "genius"
/// trials = 1000
/// verbose = false
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct MatchConfig {
    /// Strategy playing X.
    #[serde(default = "default_x")]
    x: PlayerKind,

    /// Strategy playing O (moves first).
    #[serde(default = "default_o")]
    o: PlayerKind,

    /// Number of games to play when simulating.
    #[serde(default = "default_trials")]
    trials: u32,

    /// Render the board after every move.
    #[serde(default)]
    verbose: bool,

    /// Seed for reproducible runs; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_x() -> PlayerKind {
    PlayerKind::Random
}

fn default_o() -> PlayerKind {
    PlayerKind::Genius
}

fn default_trials() -> u32 {
    1000
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: default_x(),
            o: default_o(),
            trials: default_trials(),
            verbose: false,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x, o = %config.o, trials = config.trials, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.trials == 0 {
            return Err(ConfigError::new("trials must be at least 1".to_string()));
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = MatchConfig::from_toml("").unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(*config.trials(), 1000);
        assert_eq!(*config.x(), PlayerKind::Random);
        assert_eq!(*config.o(), PlayerKind::Genius);
    }

    #[test]
    fn test_overrides() {
        let config = MatchConfig::from_toml("x = \"genius\"\ntrials = 5\nseed = 9\n").unwrap();
        assert_eq!(*config.x(), PlayerKind::Genius);
        assert_eq!(*config.trials(), 5);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let err = MatchConfig::from_toml("o = \"oracle\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_rejects_zero_trials() {
        assert!(MatchConfig::from_toml("trials = 0").is_err());
    }

    #[test]
    fn test_setters_chain() {
        let config = MatchConfig::default()
            .with_trials(3)
            .with_x(PlayerKind::Genius);
        assert_eq!(*config.trials(), 3);
        assert_eq!(*config.x(), PlayerKind::Genius);
    }
}
