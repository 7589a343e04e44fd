//! Shared access to a namespace across threads
//!
//! The namespace itself is single-threaded. `SharedNamespace` puts it behind a
//! read-write lock so that readers proceed concurrently and every mutation is
//! serialized.

use crate::namespace::Namespace;
use crate::types::LookupStrategy;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a lock-protected namespace
#[derive(Debug, Clone, Default)]
pub struct SharedNamespace {
    inner: Arc<RwLock<Namespace>>,
}

impl SharedNamespace {
    pub fn new(namespace: Namespace) -> Self {
        Self {
            inner: Arc::new(RwLock::new(namespace)),
        }
    }

    pub fn with_strategy(strategy: LookupStrategy) -> Self {
        Self::new(Namespace::with_strategy(strategy))
    }

    /// Run `f` with shared access
    pub fn read<R>(&self, f: impl FnOnce(&Namespace) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Run `f` with exclusive access
    pub fn write<R>(&self, f: impl FnOnce(&mut Namespace) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}
