//! Configuration loader with multi-source merging

use crate::{ConfigSources, LinkguardConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    include_user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "LINKGUARD".to_string(),
            include_user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "LINKGUARD")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Skip ~/.config/linkguard/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.include_user_config = false;
        self
    }

    /// The file layers this loader reads, in precedence order.
    ///
    /// A missing home directory drops the user layer rather than failing.
    pub fn sources(&self) -> ConfigSources {
        let sources = ConfigSources::for_project(&self.project_dir);
        if !self.include_user_config {
            return sources;
        }
        match sources.clone().with_user_layer() {
            Ok(with_user) => with_user,
            Err(e) => {
                tracing::debug!(error = %e, "skipping user config layer");
                sources
            }
        }
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<LinkguardConfig> {
        let mut builder = config::Config::builder();

        // 1. Built-in defaults
        let defaults = LinkguardConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2-4. User, project and local files that exist
        for (layer, path) in self.sources().present() {
            tracing::debug!(%layer, path = %path.display(), "adding config layer");
            builder = builder.add_source(
                config::File::from(path)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // 5. Environment variables (LINKGUARD_BUFFER__CAPACITY=8192)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let linkguard_config: LinkguardConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        linkguard_config
            .validate()
            .context("Configuration failed validation")?;

        Ok(linkguard_config)
    }

    /// Load configuration or return defaults if not found
    pub fn load_or_default(self) -> LinkguardConfig {
        self.load().unwrap_or_default()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
