//! Target-graph edge implementation.
//!
//! An [`Edge`] connects two target-graph nodes and remembers the CFA edge it
//! was derived from. Like nodes, edges keep their payload behind an [`Arc`]
//! and carry identity in their [`EdgeId`] handle.
//!
//! Edges are only created through the target graph itself, which registers
//! every new edge in its container at creation time. There is no public
//! constructor, so a dangling edge (one that exists but belongs to no graph)
//! cannot be observed.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{cfa::CfaNode, graph::EdgeId, target::Node};

/// Shared payload of a target-graph edge.
struct EdgeData<N: CfaNode> {
    /// Handle owning this edge's identity
    id: EdgeId,
    /// Source node of the edge
    source: Node<N>,
    /// Target node of the edge
    target: Node<N>,
    /// The CFA edge this target-graph edge was derived from
    cfa_edge: N::Edge,
}

/// An edge of a target graph, derived from a CFA edge.
///
/// Several edges may connect the same node pair (the graph is a multigraph),
/// and an edge derived twice from the same CFA edge is two distinct edges.
/// [`PartialEq`] and [`Hash`] delegate to the [`EdgeId`] handle; cloning is
/// an [`Arc`] bump.
pub struct Edge<N: CfaNode> {
    inner: Arc<EdgeData<N>>,
}

impl<N: CfaNode> Edge<N> {
    /// Creates an edge under a fresh handle. Callers must register the edge
    /// in a graph container immediately.
    pub(crate) fn new(source: Node<N>, target: Node<N>, cfa_edge: N::Edge) -> Self {
        Edge {
            inner: Arc::new(EdgeData {
                id: EdgeId::fresh(),
                source,
                target,
                cfa_edge,
            }),
        }
    }

    /// Returns the handle identifying this edge.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.inner.id
    }

    /// Returns the source node of this edge.
    #[must_use]
    pub fn source(&self) -> &Node<N> {
        &self.inner.source
    }

    /// Returns the target node of this edge.
    #[must_use]
    pub fn target(&self) -> &Node<N> {
        &self.inner.target
    }

    /// Returns the CFA edge this edge was derived from.
    #[must_use]
    pub fn cfa_edge(&self) -> &N::Edge {
        &self.inner.cfa_edge
    }
}

impl<N: CfaNode> Clone for Edge<N> {
    fn clone(&self) -> Self {
        Edge {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N: CfaNode> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<N: CfaNode> Eq for Edge<N> {}

impl<N: CfaNode> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl<N: CfaNode> fmt::Debug for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("id", &self.inner.id)
            .field("source", &self.inner.source.id())
            .field("target", &self.inner.target.id())
            .field("cfa_edge", &self.inner.cfa_edge)
            .finish()
    }
}

impl<N: CfaNode> fmt::Display for Edge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            self.inner.source.id(),
            self.inner.target.id()
        )
    }
}
