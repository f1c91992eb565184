//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};
use crate::fib::MAX_INDEX;

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Computation limits
    #[serde(default)]
    pub limits: Limits,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Bare values, one per line
    #[default]
    Text,
    /// A single JSON object per command
    Json,
}

/// Output configuration
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Computation limits
#[derive(Debug, Deserialize)]
pub struct Limits {
    /// Largest index a command may request
    #[serde(default = "default_max_index")]
    pub max_index: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_index: default_max_index(),
        }
    }
}

fn default_max_index() -> u32 {
    MAX_INDEX
}

impl Limits {
    /// Effective limit, never above what a `u128` can hold
    pub fn effective_max_index(&self) -> u32 {
        self.max_index.min(MAX_INDEX)
    }

    /// Reject indices above a configured limit lower than [`MAX_INDEX`]
    ///
    /// Negative indices and indices past [`MAX_INDEX`] are left for the
    /// cache to report.
    pub fn check(&self, index: i64) -> Result<()> {
        let max = self.effective_max_index();
        if max < MAX_INDEX && index > i64::from(max) {
            return Err(Error::index_too_large(index, max));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}
