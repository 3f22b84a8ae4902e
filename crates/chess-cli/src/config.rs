//! Configuration file loading for the command-line driver.
//!
//! Settings come from `chess.toml` in the current directory unless another
//! path is given with `--config`. A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Driver settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Whether move hints take the game history into account, so that an
    /// available en passant capture is shown. Defaults to true.
    #[serde(default = "default_true")]
    pub hints_use_history: bool,
    /// Whether to print the board diagram after replaying moves.
    /// Defaults to true.
    #[serde(default = "default_true")]
    pub show_board: bool,
    /// Log filter used when `RUST_LOG` is not set. Defaults to "info".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            hints_use_history: true,
            show_board: true,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or from [`Self::config_path()`]
    /// when no path is given. A file that does not exist yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map_or_else(Self::config_path, Path::to_path_buf);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the configuration file.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}
