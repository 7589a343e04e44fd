//! Built-in defaults seeded into every config builder.

use crate::config::NsfsConfig;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Start a builder with every default value set, so that sources only need
/// to carry the keys they override.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = NsfsConfig::default();
    let builder = config::Config::builder()
        .set_default("namespace.lookup", defaults.namespace.lookup.to_string())?
        .set_default("render.indent_width", defaults.render.indent_width as i64)?
        .set_default("render.timestamps", defaults.render.timestamps)?
        .set_default("logging.enabled", defaults.logging.enabled)?
        .set_default("logging.level", defaults.logging.level)?
        .set_default("logging.format", defaults.logging.format)?
        .set_default("logging.output", defaults.logging.output)?
        .set_default("logging.color", defaults.logging.color)?;
    Ok(builder)
}
