//! Application configuration loaded from a JSON file.
//!
//! # Invariants
//! - Every key is optional; a missing file means all defaults.
//! - `historyCapacity` is at least 1 and `logLevel` is a known level name.

use crate::logging::default_log_level;
use crate::model::versioned::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            Self::Json(err) => write!(f, "malformed config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Customer data file.
    pub data_file: PathBuf,
    /// Number of registry states kept for undo/redo.
    pub history_capacity: usize,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data").join("bobabot.json"),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            log_level: default_log_level().to_string(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    /// Reads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// - `Io` when the file exists but cannot be read.
    /// - `Json` for malformed JSON.
    /// - `Invalid` when a value is out of range.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "historyCapacity must be at least 1".to_string(),
            ));
        }
        let level = self.log_level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unsupported logLevel `{}`",
                self.log_level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"historyCapacity": 5}"#).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.data_file, AppConfig::default().data_file);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn zero_capacity_is_invalid() {
        let config = AppConfig {
            history_capacity: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
