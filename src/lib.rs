//! nsfs: In-Memory Hierarchical Namespace
//!
//! A simulated filesystem that keeps named files and directories in a tree.
//! Every name is unique across the whole namespace, so entries are addressed
//! by name alone. Files carry a declared size and nothing else.
//!
//! ```
//! use nsfs::Namespace;
//!
//! let mut ns = Namespace::new();
//! ns.add_dir("/", "Documents")?;
//! ns.add_file("Documents", "report.txt", 1024)?;
//! assert_eq!(ns.get_file_size("report.txt")?, 1024);
//!
//! ns.delete("Documents")?;
//! assert!(ns.get_file_size("report.txt").is_err());
//! # Ok::<(), nsfs::NamespaceError>(())
//! ```

pub mod concurrency;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod namespace;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use concurrency::SharedNamespace;
pub use error::{ApiError, ErrorKind, NamespaceError};
pub use namespace::{EntryRef, Namespace, NamespaceStats};
pub use tree::{DirectoryNode, FileNode, Node};
pub use types::{LookupStrategy, NodeId, MAX_NAME_LENGTH, ROOT_NAME};
pub use views::{LineKind, Render, RenderLine, RenderOptions};
