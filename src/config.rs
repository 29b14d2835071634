//! Board configuration, persisted as TOML.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// What happens when a home pictogram names a category that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the earlier category; its items become unreachable.
    #[default]
    Overwrite,
    /// Fail with `BoardError::DuplicateCategory`.
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Settings for the `aac` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Mapping file loaded when no `--file` is given.
    #[serde(default = "default_mapping_file")]
    pub mapping_file: PathBuf,
    /// Handling of repeated category names.
    #[serde(default)]
    pub duplicate_categories: DuplicatePolicy,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_mapping_file() -> PathBuf {
    PathBuf::from("AACMappings.txt")
}
fn default_log_level() -> String {
    "warn".into()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            mapping_file: default_mapping_file(),
            duplicate_categories: DuplicatePolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl BoardConfig {
    /// Parse a config from TOML text. Missing fields take their defaults.
    pub fn from_toml(content: &str, origin: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_toml(&content, &path.display().to_string())
    }

    /// Write the config to disk as pretty TOML.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }
}
