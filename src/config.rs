//! Configuration System
//!
//! Layered runtime configuration: built-in defaults, then the global
//! config file (`$XDG_CONFIG_HOME/dirsim/config.toml`), then an
//! explicitly supplied file, then `DIRSIM_*` environment variables.
//! Validated before any filesystem traversal begins.

use crate::compare::Weights;
use crate::error::CompareError;
use crate::logging::LoggingConfig;
use crate::types::DEFAULT_CHUNK_SIZE;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirsimConfig {
    /// Bytes read per chunk when fingerprinting (default 1 MiB)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Worker threads for cache pre-warming (default 4)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Comparator weights; must be non-negative and sum to 1
    #[serde(default)]
    pub weights: Weights,

    /// Entry names skipped during tree construction
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_workers() -> usize {
    4
}

impl Default for DirsimConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            workers: default_workers(),
            weights: Weights::default(),
            ignore_patterns: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DirsimConfig {
    /// Reject unusable values before any traversal begins.
    pub fn validate(&self) -> Result<(), CompareError> {
        if self.chunk_size == 0 {
            return Err(CompareError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.workers == 0 {
            return Err(CompareError::InvalidConfig(
                "workers must be greater than zero".to_string(),
            ));
        }
        self.weights.validate()
    }
}

/// Path to the global config file, honoring XDG conventions.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dirsim")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads and merges configuration sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration, merging (lowest to highest precedence):
    /// defaults, the global config file, `explicit_file`, and
    /// `DIRSIM_*` environment variables (`__` separates nesting, e.g.
    /// `DIRSIM_LOGGING__LEVEL=debug`).
    pub fn load(explicit_file: Option<&Path>) -> Result<DirsimConfig, CompareError> {
        let mut builder = Config::builder().add_source(Config::try_from(&DirsimConfig::default())?);

        if let Some(global) = global_config_path() {
            if global.exists() {
                debug!(path = %global.display(), "Loading global config file");
                builder = builder.add_source(File::from(global).required(false));
            }
        }

        if let Some(path) = explicit_file {
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        builder = builder.add_source(Environment::with_prefix("DIRSIM").separator("__"));

        let loaded: DirsimConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }
}
