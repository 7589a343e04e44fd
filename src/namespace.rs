//! Namespace Manager
//!
//! Owns the root directory and every entry below it. Names are unique across
//! the whole namespace, so every operation addresses entries by bare name
//! rather than by path.
//!
//! Each mutating operation validates completely before it touches the arena
//! or the name index; a rejected call leaves both exactly as they were.

use crate::config::NamespaceConfig;
use crate::error::NamespaceError;
use crate::index::NameIndex;
use crate::tree::{DirectoryNode, FileNode, Node, NodeArena};
use crate::types::{LookupStrategy, NodeId, MAX_NAME_LENGTH, ROOT_NAME};
use crate::views::{Render, RenderOptions};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

/// Entry counts and total declared size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceStats {
    pub files: usize,
    /// Includes the root directory
    pub directories: usize,
    pub total_size: u64,
}

/// In-memory hierarchical namespace
#[derive(Debug)]
pub struct Namespace {
    arena: NodeArena,
    root: NodeId,
    /// Present only with `LookupStrategy::Indexed`
    index: Option<NameIndex>,
    strategy: LookupStrategy,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Create a namespace holding only the root directory, using the name index
    pub fn new() -> Self {
        Self::with_strategy(LookupStrategy::Indexed)
    }

    pub fn with_strategy(strategy: LookupStrategy) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.insert(
            Node::Directory(DirectoryNode::new(ROOT_NAME.to_string())),
            None,
        );
        let index = match strategy {
            LookupStrategy::Indexed => {
                let mut index = NameIndex::new();
                index.register(ROOT_NAME, root);
                Some(index)
            }
            LookupStrategy::TreeWalk => None,
        };
        debug!(%strategy, "namespace created");
        Self {
            arena,
            root,
            index,
            strategy,
        }
    }

    pub fn from_config(config: &NamespaceConfig) -> Self {
        Self::with_strategy(config.lookup)
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Add a file of `size` under the directory named `parent`
    pub fn add_file(
        &mut self,
        parent: &str,
        name: &str,
        size: i64,
    ) -> Result<NodeId, NamespaceError> {
        self.try_add_file(parent, name, size)
            .inspect(|id| debug!(parent, name, size, node = %id, "file added"))
            .inspect_err(|e| debug!(parent, name, size, error = %e, "add file rejected"))
    }

    fn try_add_file(
        &mut self,
        parent: &str,
        name: &str,
        size: i64,
    ) -> Result<NodeId, NamespaceError> {
        self.check_new_name(name)?;
        let size = match u64::try_from(size) {
            Ok(size) if size > 0 => size,
            _ => return Err(NamespaceError::InvalidSize(size)),
        };
        let parent_id = self
            .resolve_directory(parent)
            .ok_or_else(|| NamespaceError::ParentNotFound(parent.to_string()))?;
        self.attach(
            parent_id,
            parent,
            Node::File(FileNode::new(name.to_string(), size)),
        )
    }

    /// Add an empty directory under the directory named `parent`
    pub fn add_dir(&mut self, parent: &str, name: &str) -> Result<NodeId, NamespaceError> {
        self.try_add_dir(parent, name)
            .inspect(|id| debug!(parent, name, node = %id, "directory added"))
            .inspect_err(|e| debug!(parent, name, error = %e, "add directory rejected"))
    }

    fn try_add_dir(&mut self, parent: &str, name: &str) -> Result<NodeId, NamespaceError> {
        self.check_new_name(name)?;
        let parent_id = self
            .resolve_directory(parent)
            .ok_or_else(|| NamespaceError::ParentNotFound(parent.to_string()))?;
        self.attach(
            parent_id,
            parent,
            Node::Directory(DirectoryNode::new(name.to_string())),
        )
    }

    /// Size of the file called `name`; directories never match
    pub fn get_file_size(&self, name: &str) -> Result<u64, NamespaceError> {
        self.resolve(name)
            .and_then(|id| self.arena.get(id))
            .and_then(Node::as_file)
            .map(|file| file.size)
            .ok_or_else(|| NamespaceError::EntryNotFound(name.to_string()))
    }

    /// The largest file, pre-order; the first of equally sized files wins
    pub fn get_biggest_file(&self) -> Option<&FileNode> {
        let mut best: Option<&FileNode> = None;
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(dir) = self.arena.get(id).and_then(Node::as_directory) else {
                continue;
            };
            for file in dir.files.iter().filter_map(|f| self.arena.get(*f)?.as_file()) {
                if best.map_or(true, |b| file.size > b.size) {
                    best = Some(file);
                }
            }
            stack.extend(dir.directories.iter().rev().copied());
        }
        best
    }

    /// Lazy rendering with the default options
    pub fn show_namespace(&self) -> Render<'_> {
        self.render(RenderOptions::default())
    }

    pub fn render(&self, options: RenderOptions) -> Render<'_> {
        Render::new(self, options)
    }

    /// Delete the entry called `name`, with its whole subtree if it is a directory
    pub fn delete(&mut self, name: &str) -> Result<(), NamespaceError> {
        self.try_delete(name)
            .inspect(|removed| debug!(name, removed, "entry deleted"))
            .inspect_err(|e| debug!(name, error = %e, "delete rejected"))
            .map(|_| ())
    }

    fn try_delete(&mut self, name: &str) -> Result<usize, NamespaceError> {
        if name == ROOT_NAME {
            return Err(NamespaceError::RootProtected);
        }
        let id = self
            .resolve(name)
            .ok_or_else(|| NamespaceError::EntryNotFound(name.to_string()))?;
        let parent = self.arena.parent(id).ok_or(NamespaceError::RootProtected)?;

        if let Some(dir) = self.arena.get_mut(parent).and_then(Node::as_directory_mut) {
            dir.detach(id);
        }
        let doomed = self.arena.subtree(id);
        let removed = doomed.len();
        for node_id in doomed {
            if let Some(node) = self.arena.remove(node_id) {
                if let Some(index) = self.index.as_mut() {
                    index.unregister(node.name());
                }
            }
        }
        Ok(removed)
    }

    /// Read-only view of the entry called `name`
    pub fn entry(&self, name: &str) -> Option<EntryRef<'_>> {
        let id = self.resolve(name)?;
        let node = self.arena.get(id)?;
        Some(EntryRef {
            namespace: self,
            id,
            node,
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Number of entries, root included
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when nothing but the root exists
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 1
    }

    pub fn stats(&self) -> NamespaceStats {
        let mut stats = NamespaceStats::default();
        for id in self.arena.subtree(self.root) {
            match self.arena.get(id) {
                Some(Node::File(file)) => {
                    stats.files += 1;
                    stats.total_size += file.size;
                }
                Some(Node::Directory(_)) => stats.directories += 1,
                None => {}
            }
        }
        stats
    }

    /// Check that the tree reaches every live node exactly once, that names
    /// are unique, and that the name index (if any) agrees with the tree
    pub fn verify_index(&self) -> bool {
        let reachable = self.arena.subtree(self.root);
        if reachable.len() != self.arena.len() {
            return false;
        }
        let mut seen = HashSet::new();
        for id in &reachable {
            let Some(node) = self.arena.get(*id) else {
                return false;
            };
            if !seen.insert(node.name()) {
                return false;
            }
            if let Some(index) = &self.index {
                if index.get(node.name()) != Some(*id) {
                    return false;
                }
            }
        }
        match &self.index {
            Some(index) => index.len() == reachable.len(),
            None => true,
        }
    }

    fn check_new_name(&self, name: &str) -> Result<(), NamespaceError> {
        let len = name.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(NamespaceError::NameTooLong {
                name: name.to_string(),
                len,
                max: MAX_NAME_LENGTH,
            });
        }
        if self.resolve(name).is_some() {
            return Err(NamespaceError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    fn attach(
        &mut self,
        parent_id: NodeId,
        parent: &str,
        node: Node,
    ) -> Result<NodeId, NamespaceError> {
        let is_file = node.is_file();
        let name = node.name().to_string();
        let id = self.arena.insert(node, Some(parent_id));
        match self.arena.get_mut(parent_id).and_then(Node::as_directory_mut) {
            Some(dir) if is_file => dir.files.push(id),
            Some(dir) => dir.directories.push(id),
            None => {
                self.arena.remove(id);
                return Err(NamespaceError::ParentNotFound(parent.to_string()));
            }
        }
        if let Some(index) = self.index.as_mut() {
            index.register(&name, id);
        }
        Ok(id)
    }

    fn resolve(&self, name: &str) -> Option<NodeId> {
        trace!(name, strategy = %self.strategy, "resolve");
        match &self.index {
            Some(index) => index.get(name),
            None => self.walk_find(name),
        }
    }

    fn resolve_directory(&self, name: &str) -> Option<NodeId> {
        self.resolve(name)
            .filter(|id| matches!(self.arena.get(*id), Some(Node::Directory(_))))
    }

    /// Pre-order search: a directory's own name, then its files, then each
    /// subdirectory in insertion order
    fn walk_find(&self, name: &str) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(dir) = self.arena.get(id).and_then(Node::as_directory) else {
                continue;
            };
            if dir.name == name {
                return Some(id);
            }
            for file_id in &dir.files {
                if self.arena.get(*file_id).map(Node::name) == Some(name) {
                    return Some(*file_id);
                }
            }
            stack.extend(dir.directories.iter().rev().copied());
        }
        None
    }
}

/// Read-only view of a single entry
#[derive(Debug, Clone, Copy)]
pub struct EntryRef<'a> {
    namespace: &'a Namespace,
    id: NodeId,
    node: &'a Node,
}

impl<'a> EntryRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.node.created_at()
    }

    pub fn is_file(&self) -> bool {
        self.node.is_file()
    }

    /// Declared size; `None` for directories
    pub fn size(&self) -> Option<u64> {
        self.node.as_file().map(|file| file.size)
    }

    /// Name of the containing directory; `None` for the root
    pub fn parent(&self) -> Option<&'a str> {
        let parent = self.namespace.arena.parent(self.id)?;
        self.namespace.arena.get(parent).map(Node::name)
    }

    /// Names of the child files, in insertion order
    pub fn files(&self) -> Vec<&'a str> {
        self.child_names(|dir| &dir.files)
    }

    /// Names of the child directories, in insertion order
    pub fn directories(&self) -> Vec<&'a str> {
        self.child_names(|dir| &dir.directories)
    }

    fn child_names(&self, pick: impl Fn(&'a DirectoryNode) -> &'a Vec<NodeId>) -> Vec<&'a str> {
        let arena = &self.namespace.arena;
        self.node
            .as_directory()
            .map(|dir| {
                pick(dir)
                    .iter()
                    .filter_map(|id| arena.get(*id).map(Node::name))
                    .collect()
            })
            .unwrap_or_default()
    }
}
