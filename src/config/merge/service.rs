//! MergeService: orchestrates sources, applies merge policy, deserializes to NsfsConfig.

use crate::config::sources::{environment, file};
use crate::config::NsfsConfig;
use crate::error::ApiError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the given files and the environment.
    /// Precedence: defaults (lowest) -> global file -> explicit file -> environment (highest).
    ///
    /// A missing global file is skipped; a missing explicit file is an error.
    pub fn load(global: Option<&Path>, explicit: Option<&Path>) -> Result<NsfsConfig, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        if let Some(path) = global {
            builder = file::add_to_builder(builder, path, false)?;
        }
        if let Some(path) = explicit {
            builder = file::add_to_builder(builder, path, true)?;
        }
        let builder = environment::add_to_builder(builder)?;

        let config: NsfsConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
