//! Identifier Allocation
//!
//! Monotonic source of generated node identifiers. Reference-valued
//! attributes store identifiers, not handles; when a referenced node has no
//! identifier yet, the allocator assigns the next one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use crate::Element;

/// Monotonic identifier source.
///
/// Cloning shares the underlying counter. [`IdAllocator::global`] is the
/// process-wide default used at the outermost composition point; tests
/// construct their own allocator so generated identifiers stay deterministic
/// across runs.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Arc<AtomicU64>,
}

impl IdAllocator {
    /// Fresh allocator, counting from 1.
    pub fn new() -> Self {
        Self {
            next: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The process-wide shared allocator. Never reset for the process
    /// lifetime, so generated identifiers never collide.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<IdAllocator> = OnceLock::new();
        GLOBAL.get_or_init(Self::new).clone()
    }

    /// Next generated identifier. The fetch-add is a single atomic step, so
    /// concurrent callers cannot observe the same value.
    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("aria-{n}")
    }

    /// Read-or-assign the identifier of `node`.
    ///
    /// An existing non-empty identifier is returned unchanged and the node is
    /// left untouched, so resolution is idempotent. Otherwise the next
    /// generated identifier is assigned and the node is re-read, so a host
    /// that refuses the assignment resolves to the empty string.
    pub fn resolve<E: Element>(&self, node: &mut E) -> String {
        let existing = node.id();
        if !existing.is_empty() {
            return existing;
        }
        let id = self.next_id();
        node.set_id(&id);
        tracing::debug!("assigned generated id {} to referenced node", id);
        node.id()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
