//! Configuration management for Linkguard
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the caller)
//! 2. Environment variables (`LINKGUARD_*` prefix, `__` between sections)
//! 3. linkguard.local.toml (gitignored, local overrides)
//! 4. linkguard.toml (git-tracked, project config)
//! 5. ~/.config/linkguard/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use linkguard_crc::{CrcParameters, CrcPreset};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod error;
mod loader;
mod sources;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use sources::{ConfigLayer, ConfigSources, LOCAL_FILE, PROJECT_FILE};

/// Main Linkguard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkguardConfig {
    pub crc: CrcConfig,
    pub buffer: BufferConfig,
    pub logging: LoggingConfig,
}

/// Which CRC variant to compute.
///
/// A `custom` parameter table takes precedence over `preset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrcConfig {
    pub preset: CrcPreset,
    pub custom: Option<CrcParameters>,
}

impl CrcConfig {
    /// The effective parameter set.
    pub fn parameters(&self) -> CrcParameters {
        self.custom.unwrap_or_else(|| self.preset.params())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Staging buffer capacity in bytes.
    pub capacity: usize,
    /// Bytes read from the input per `add_data` call.
    pub chunk_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: 4096,
            chunk_size: 256,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `linkguard_buffer=trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LinkguardConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Parse a single TOML file, without layering or environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let buffer = &self.buffer;
        if buffer.capacity == 0 {
            return Err(ConfigError::invalid("buffer.capacity", "must be at least 1"));
        }
        if buffer.chunk_size == 0 {
            return Err(ConfigError::invalid("buffer.chunk_size", "must be at least 1"));
        }
        if buffer.chunk_size > buffer.capacity {
            return Err(ConfigError::invalid(
                "buffer.chunk_size",
                format!(
                    "({}) exceeds buffer.capacity ({})",
                    buffer.chunk_size, buffer.capacity
                ),
            ));
        }

        if self.crc.custom.is_some_and(|custom| custom.msb_mask == 0) {
            return Err(ConfigError::invalid("crc.custom.msb_mask", "must be non-zero"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::invalid("logging.level", "must not be empty"));
        }

        Ok(())
    }
}
