//! Namespace node types

use crate::types::NodeId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// File node representation
#[derive(Debug, Clone, Serialize)]
pub struct FileNode {
    pub name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

impl FileNode {
    pub fn new(name: String, size: u64) -> Self {
        Self {
            name,
            size,
            created_at: Utc::now(),
        }
    }
}

/// Directory node representation
///
/// Children are kept in insertion order, files and directories separately.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryNode {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub files: Vec<NodeId>,
    pub directories: Vec<NodeId>,
}

impl DirectoryNode {
    pub fn new(name: String) -> Self {
        Self {
            name,
            created_at: Utc::now(),
            files: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// Detach a child id from whichever collection holds it
    pub(crate) fn detach(&mut self, child: NodeId) -> bool {
        if let Some(pos) = self.files.iter().position(|id| *id == child) {
            self.files.remove(pos);
            return true;
        }
        if let Some(pos) = self.directories.iter().position(|id| *id == child) {
            self.directories.remove(pos);
            return true;
        }
        false
    }
}

/// Namespace node type
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => &file.name,
            Node::Directory(dir) => &dir.name,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        match self {
            Node::File(file) => file.created_at,
            Node::Directory(dir) => dir.created_at,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub(crate) fn as_directory_mut(&mut self) -> Option<&mut DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}
