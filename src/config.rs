use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Bounds and defaults applied when normalizing pagination requests.
///
/// `min_limit <= max_limit` is not checked; with the bounds inverted every
/// normalized limit comes out as `min_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page")]
    pub default_page: u64,
    #[serde(default = "default_limit")]
    pub default_limit: u64,
    #[serde(default = "default_max_limit")]
    pub max_limit: u64,
    #[serde(default = "default_min_limit")]
    pub min_limit: u64,
}

/// Partial configuration: only the fields that are set replace the current ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationConfigUpdate {
    #[serde(default)]
    pub default_page: Option<u64>,
    #[serde(default)]
    pub default_limit: Option<u64>,
    #[serde(default)]
    pub max_limit: Option<u64>,
    #[serde(default)]
    pub min_limit: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            min_limit: default_min_limit(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PaginationConfig {
    /// Shallow merge: returns a copy with every field set in `update` replaced.
    pub fn merged(self, update: PaginationConfigUpdate) -> Self {
        Self {
            default_page: update.default_page.unwrap_or(self.default_page),
            default_limit: update.default_limit.unwrap_or(self.default_limit),
            max_limit: update.max_limit.unwrap_or(self.max_limit),
            min_limit: update.min_limit.unwrap_or(self.min_limit),
        }
    }
}

impl From<PaginationConfigUpdate> for PaginationConfig {
    fn from(update: PaginationConfigUpdate) -> Self {
        Self::default().merged(update)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// Default value functions

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

fn default_max_limit() -> u64 {
    100
}

fn default_min_limit() -> u64 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}
