//! Application configuration.
//!
//! Values are resolved in order: command-line flag, environment
//! (`STRICTLY_TIMETRAVEL_SIZE`, `.env` honoured), TOML file, defaults.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timetravel_tictactoe::BoardSize;
use tracing::{debug, info, instrument};

/// Environment variable overriding the board size.
pub const SIZE_ENV_VAR: &str = "STRICTLY_TIMETRAVEL_SIZE";

/// Default location of the optional config file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_timetravel.toml";

/// Largest board the terminal UI will lay out.
pub const MAX_TUI_SIZE: usize = 9;

/// Settings shared by every mode.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct AppConfig {
    /// Board dimension N.
    board_size: usize,

    /// File the terminal UI writes logs to.
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::CLASSIC.get(),
            log_file: PathBuf::from("strictly_timetravel.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise starts from defaults, then
    /// applies the environment and an optional command-line size.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path, size_override: Option<usize>) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            Self::from_file(path)?
        } else {
            debug!("Config file not found, using defaults");
            Self::default()
        };

        let config = config.apply_env(|key| std::env::var(key).ok())?;
        Ok(match size_override {
            Some(size) => config.with_board_size(size),
            None => config,
        })
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(SIZE_ENV_VAR) {
            Some(raw) => {
                let size = raw.trim().parse::<usize>().map_err(|_| {
                    ConfigError::new(format!("{} must be a number, got {:?}", SIZE_ENV_VAR, raw))
                })?;
                debug!(size, "Board size taken from environment");
                Ok(self.with_board_size(size))
            }
            None => Ok(self),
        }
    }

    /// Validates the configured board size.
    pub fn validated_size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.board_size).map_err(|e| ConfigError::new(e.to_string()))
    }

    /// Validates the board size against the terminal layout limit as well.
    pub fn tui_size(&self) -> Result<BoardSize, ConfigError> {
        let size = self.validated_size()?;
        if size.get() > MAX_TUI_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is too large for the terminal UI (max {})",
                size, MAX_TUI_SIZE
            )));
        }
        Ok(size)
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
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.validated_size().map(BoardSize::get).ok(), Some(3));
    }

    #[test]
    fn test_env_override() {
        let config = AppConfig::default()
            .apply_env(|key| (key == SIZE_ENV_VAR).then(|| " 5 ".to_string()))
            .unwrap();
        assert_eq!(*config.board_size(), 5);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let err = AppConfig::default()
            .apply_env(|_| Some("big".to_string()))
            .unwrap_err();
        assert!(err.message.contains(SIZE_ENV_VAR));
    }

    #[test]
    fn test_size_validation() {
        assert!(AppConfig::default().with_board_size(0).validated_size().is_err());
        assert!(AppConfig::default().with_board_size(12).validated_size().is_ok());
        assert!(AppConfig::default().with_board_size(12).tui_size().is_err());
        assert!(AppConfig::default().with_board_size(9).tui_size().is_ok());
    }
}
