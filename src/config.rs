//! Configuration for logkv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a logkv instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the backing log file (the single source of truth).
    /// Created on first open if it does not exist.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("./logkv.log"),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing log file path
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = path.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
