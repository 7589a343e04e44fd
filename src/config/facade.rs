//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::NsfsConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the global config file ($XDG_CONFIG_HOME/nsfs/config.toml on Linux)
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "nsfs", "nsfs")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the global file, an optional explicit file,
    /// and the environment.
    pub fn load(explicit: Option<&Path>) -> Result<NsfsConfig, ApiError> {
        let global = Self::global_config_path();
        MergeService::load(global.as_deref(), explicit)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<NsfsConfig, ApiError> {
        MergeService::load(None, Some(path))
    }
}
