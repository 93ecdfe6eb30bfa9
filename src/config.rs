//! Game configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::game::Scoring;

/// Settings for a game run.
///
/// Every field has a default, so a missing or partial file still yields
/// a complete configuration.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Point awards for plays.
    #[serde(default)]
    scoring: Scoring,

    /// Where the score table lives.
    #[serde(default = "default_highscores")]
    highscores: PathBuf,

    /// Nickname used when none is given on the command line.
    #[serde(default = "default_nickname")]
    nickname: String,
}

#[instrument]
fn default_highscores() -> PathBuf {
    PathBuf::from("morpion_scores.json")
}

#[instrument]
fn default_nickname() -> String {
    "player".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scoring: Scoring::default(),
            highscores: default_highscores(),
            nickname: default_nickname(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(nickname = %config.nickname, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file when it exists, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if an existing file cannot be read or
    /// parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
