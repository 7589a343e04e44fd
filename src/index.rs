//! Name Index
//!
//! Provides O(1) access from an entry name to the node that carries it.

use crate::types::NodeId;
use std::collections::HashMap;

/// Name index: name -> NodeId
#[derive(Debug, Default)]
pub struct NameIndex {
    pub(crate) names: HashMap<String, NodeId>,
}

impl NameIndex {
    pub fn new() -> Self {
        NameIndex {
            names: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Register a name; returns false and leaves the index untouched if the
    /// name is already taken
    pub fn register(&mut self, name: &str, node_id: NodeId) -> bool {
        if self.names.contains_key(name) {
            return false;
        }
        self.names.insert(name.to_string(), node_id);
        true
    }

    pub fn unregister(&mut self, name: &str) -> Option<NodeId> {
        self.names.remove(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
