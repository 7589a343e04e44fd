//! Namespace Views
//!
//! Lazy depth-first rendering of the namespace: each directory line is
//! followed by its files, then by its subdirectories, each one level deeper.

use crate::namespace::Namespace;
use crate::tree::Node;
use crate::types::NodeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces added per depth level
    pub indent_width: usize,
    /// Include creation timestamps
    pub timestamps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: 3,
            timestamps: true,
        }
    }
}

/// Entry kind of a rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Directory,
    File,
}

/// One rendered entry
#[derive(Debug, Clone, Serialize)]
pub struct RenderLine<'a> {
    pub depth: usize,
    pub kind: LineKind,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    options: RenderOptions,
}

impl fmt::Display for RenderLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = self.depth * self.options.indent_width;
        write!(f, "{:indent$}|-- {} (", "", self.name, indent = indent)?;
        match (self.kind, self.size) {
            (LineKind::File, Some(size)) => write!(f, "File, Size: {}", size)?,
            (LineKind::File, None) => write!(f, "File")?,
            (LineKind::Directory, _) => write!(f, "Dir")?,
        }
        if self.options.timestamps {
            write!(
                f,
                ", Creation Date: {}",
                self.created_at.format(TIMESTAMP_FORMAT)
            )?;
        }
        write!(f, ")")
    }
}

/// Lazy pre-order iterator over the namespace
///
/// Nothing is visited until the iterator is advanced. `Display` renders the
/// whole tree, one line per entry.
#[derive(Debug, Clone)]
pub struct Render<'a> {
    namespace: &'a Namespace,
    options: RenderOptions,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Render<'a> {
    pub(crate) fn new(namespace: &'a Namespace, options: RenderOptions) -> Self {
        Self {
            namespace,
            options,
            stack: vec![(namespace.root(), 0)],
        }
    }
}

impl<'a> Iterator for Render<'a> {
    type Item = RenderLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (id, depth) = self.stack.pop()?;
            let Some(node) = self.namespace.node(id) else {
                continue;
            };
            let line = match node {
                Node::File(file) => RenderLine {
                    depth,
                    kind: LineKind::File,
                    name: &file.name,
                    size: Some(file.size),
                    created_at: file.created_at,
                    options: self.options,
                },
                Node::Directory(dir) => {
                    self.stack
                        .extend(dir.directories.iter().rev().map(|id| (*id, depth + 1)));
                    self.stack
                        .extend(dir.files.iter().rev().map(|id| (*id, depth + 1)));
                    RenderLine {
                        depth,
                        kind: LineKind::Directory,
                        name: &dir.name,
                        size: None,
                        created_at: dir.created_at,
                        options: self.options,
                    }
                }
            };
            return Some(line);
        }
    }
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.clone() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
