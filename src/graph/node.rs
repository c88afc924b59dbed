//! Node identifier implementation for the multigraph container.
//!
//! This module provides the [`NodeId`] type, a strongly-typed handle for
//! vertices. Unlike a per-graph index, handles are allocated from a
//! process-global counter: two graphs contain "the same node" exactly when
//! both reference the same handle, and handles minted by independent
//! constructions never collide.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// A strongly-typed, process-globally unique identifier for graph vertices.
///
/// `NodeId` wraps a `u64` drawn from a global counter at node creation.
/// The newtype prevents accidental mixing of node handles with other integer
/// values, and the global allocation makes sharing between graph containers
/// explicit: set membership throughout this crate is decided by handle
/// equality, never by payload content.
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`]; allocation uses an atomic
/// counter and is safe from any thread.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocates a fresh, never-before-issued node handle.
    pub(crate) fn fresh() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this handle.
    ///
    /// Useful for logging and for indexing external per-node tables; raw
    /// values are unique but not dense.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
