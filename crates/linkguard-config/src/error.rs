//! Configuration error types

use std::path::PathBuf;

/// Errors raised while reading or checking a Linkguard configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A config file is not valid TOML for [`LinkguardConfig`](crate::LinkguardConfig).
    #[error("malformed {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A field holds a value the CRC engine or staging buffer cannot use.
    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: String },

    /// No home directory, so there is no user-level config layer.
    #[error("no home directory to hold the user config layer")]
    NoHomeDirectory,
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
