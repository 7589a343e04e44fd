//! Node arena
//!
//! Owns every node of the namespace. Parent/child relationships are expressed
//! through `NodeId`s, never through references, and freed slots are reused.

use crate::tree::node::Node;
use crate::types::NodeId;

#[derive(Debug)]
struct Slot {
    node: Node,
    parent: Option<NodeId>,
}

/// Slot storage for namespace nodes
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Option<Slot>>,
    free: Vec<usize>,
    live: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id
    pub fn insert(&mut self, node: Node, parent: Option<NodeId>) -> NodeId {
        let slot = Some(Slot { node, parent });
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = slot;
                NodeId(index)
            }
            None => {
                self.slots.push(slot);
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release a single slot; children are not touched
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);
        self.live -= 1;
        Some(slot.node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)?.as_ref().map(|slot| &slot.node)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.0)?.as_mut().map(|slot| &mut slot.node)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0)?.as_ref()?.parent
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Ids of `root` and all of its descendants, pre-order
    pub fn subtree(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            out.push(id);
            if let Node::Directory(dir) = node {
                stack.extend(dir.directories.iter().rev().copied());
                stack.extend(dir.files.iter().rev().copied());
            }
        }
        out
    }
}
