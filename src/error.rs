//! Error types
//!
//! `NamespaceError` covers every way a namespace operation can be rejected.
//! `ApiError` wraps it together with the failures of the surrounding tooling
//! (configuration, logging, scripts).

use thiserror::Error;

/// Coarse classification of a namespace error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied an argument the namespace cannot accept
    InvalidArgument,
    /// The named entry does not exist
    NotFound,
}

/// Rejection of a namespace operation
///
/// A rejected operation never mutates the namespace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("Name is too long: {name:?} ({len} characters, maximum is {max})")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("Name already exists in the namespace: {0}")]
    DuplicateName(String),

    #[error("Invalid file size {0}: size must be a positive number")]
    InvalidSize(i64),

    #[error("Parent directory not found: {0}")]
    ParentNotFound(String),

    #[error("File or directory not found: {0}")]
    EntryNotFound(String),

    #[error("Root directory cannot be deleted")]
    RootProtected,
}

impl NamespaceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NamespaceError::EntryNotFound(_) => ErrorKind::NotFound,
            NamespaceError::NameTooLong { .. }
            | NamespaceError::DuplicateName(_)
            | NamespaceError::InvalidSize(_)
            | NamespaceError::ParentNotFound(_)
            | NamespaceError::RootProtected => ErrorKind::InvalidArgument,
        }
    }
}

/// Errors raised by the tooling around the namespace
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Namespace(#[from] NamespaceError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Script error on line {line}: {message}")]
    ScriptError { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}
