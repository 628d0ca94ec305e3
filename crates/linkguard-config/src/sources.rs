//! Config file layers and where they live on disk

use crate::ConfigError;
use directories::ProjectDirs;
use std::fmt;
use std::path::{Path, PathBuf};

/// Committed project file.
pub const PROJECT_FILE: &str = "linkguard.toml";
/// Per-checkout overrides, kept out of version control.
pub const LOCAL_FILE: &str = "linkguard.local.toml";

/// One file-backed layer, in increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigLayer {
    User,
    Project,
    Local,
}

impl ConfigLayer {
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Project => "project",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The candidate files for one project directory.
///
/// Built-in defaults sit below these layers and `LINKGUARD_*` environment
/// variables above them; neither is file-backed.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    user: Option<PathBuf>,
    project_dir: PathBuf,
}

impl ConfigSources {
    /// Project and local layers only.
    pub fn for_project(project_dir: impl AsRef<Path>) -> Self {
        Self {
            user: None,
            project_dir: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Adds `~/.config/linkguard/config.toml` (or the platform equivalent).
    pub fn with_user_layer(mut self) -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from("com", "Linkguard", "linkguard")
            .ok_or(ConfigError::NoHomeDirectory)?;
        self.user = Some(dirs.config_dir().join("config.toml"));
        Ok(self)
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path of `layer`, whether or not the file exists.
    pub fn path(&self, layer: ConfigLayer) -> Option<PathBuf> {
        match layer {
            ConfigLayer::User => self.user.clone(),
            ConfigLayer::Project => Some(self.project_dir.join(PROJECT_FILE)),
            ConfigLayer::Local => Some(self.project_dir.join(LOCAL_FILE)),
        }
    }

    /// Layers whose file exists, lowest precedence first.
    pub fn present(&self) -> Vec<(ConfigLayer, PathBuf)> {
        [ConfigLayer::User, ConfigLayer::Project, ConfigLayer::Local]
            .into_iter()
            .filter_map(|layer| self.path(layer).map(|path| (layer, path)))
            .filter(|(_, path)| path.is_file())
            .collect()
    }

    /// Whether the committed project file exists.
    pub fn has_project_file(&self) -> bool {
        self.present()
            .iter()
            .any(|(layer, _)| *layer == ConfigLayer::Project)
    }
}
