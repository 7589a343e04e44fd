//! Config sources: TOML files and the environment.

pub mod environment;
pub mod file;
