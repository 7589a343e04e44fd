//! Configuration
//!
//! Layered configuration for the namespace, its rendering, and logging.
//! Sources are merged by [`merge::service::MergeService`]; callers go through
//! [`ConfigLoader`].

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::types::LookupStrategy;
use crate::views::RenderOptions;
use serde::{Deserialize, Serialize};

/// Namespace behaviour
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Name resolution strategy: indexed or tree_walk
    #[serde(default)]
    pub lookup: LookupStrategy,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NsfsConfig {
    #[serde(default)]
    pub namespace: NamespaceConfig,

    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl NsfsConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.render.indent_width == 0 {
            return Err(ApiError::ConfigError(
                "render.indent_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
