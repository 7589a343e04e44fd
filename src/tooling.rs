//! Tooling & Integration Layer
//!
//! The `nsfs` command-line driver: script parsing, command execution, and
//! text formatting of query results.

pub mod cli;
pub mod format;
pub mod script;

pub use cli::{Cli, CliContext, CommandOutput, Commands, OutputFormat};
pub use script::{parse_script, ScriptCommand, ScriptLine};
