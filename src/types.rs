//! Core types for the namespace.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a file or directory name
pub const MAX_NAME_LENGTH: usize = 32;

/// Name of the root directory
pub const ROOT_NAME: &str = "/";

/// NodeId: slot of a node in the namespace arena
///
/// Ids of deleted nodes are recycled, so an id is only meaningful while the
/// node it was handed out for is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How names are resolved to nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Flat name index kept alongside the tree
    #[default]
    Indexed,
    /// Pre-order walk from the root on every lookup
    TreeWalk,
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStrategy::Indexed => write!(f, "indexed"),
            LookupStrategy::TreeWalk => write!(f, "tree_walk"),
        }
    }
}
