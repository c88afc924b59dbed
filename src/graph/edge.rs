//! Edge identifier implementation for the multigraph container.
//!
//! This module provides the [`EdgeId`] type, the edge counterpart of
//! [`NodeId`](crate::graph::NodeId): a strongly-typed handle allocated from a
//! process-global counter, so that edge identity survives sharing between
//! graph containers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_EDGE_ID: AtomicU64 = AtomicU64::new(0);

/// A strongly-typed, process-globally unique identifier for graph edges.
///
/// `EdgeId` wraps a `u64` drawn from a global counter at edge creation. Edge
/// set membership across graph containers is decided by handle equality;
/// several distinct edges (distinct handles) may connect the same vertex
/// pair, which is what makes the container a multigraph.
///
/// # Thread Safety
///
/// `EdgeId` is [`Copy`], [`Send`], and [`Sync`]; allocation uses an atomic
/// counter and is safe from any thread.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Allocates a fresh, never-before-issued edge handle.
    pub(crate) fn fresh() -> Self {
        EdgeId(NEXT_EDGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value of this handle.
    #[must_use]
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_ids_are_unique() {
        let ids: HashSet<EdgeId> = (0..100).map(|_| EdgeId::fresh()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_edge_id_display_format() {
        let id = EdgeId::fresh();
        assert_eq!(format!("{id}"), format!("e{}", id.value()));
        assert_eq!(format!("{id:?}"), format!("EdgeId({})", id.value()));
    }
}
