//! Masking predicates for target-graph filtering.
//!
//! A [`GraphMask`] decides, per node and per edge, whether an element is
//! hidden from a filtered view. [`TargetGraph::masked`](crate::target::TargetGraph::masked)
//! materializes the visible subgraph; an edge is dropped when the mask hides
//! it or when either of its endpoints is hidden, so the result always
//! satisfies the endpoint invariant.

use crate::{
    cfa::CfaNode,
    target::{Edge, Node},
};

/// A filtering predicate over target-graph elements.
///
/// Masks express what to *hide*, not what to keep. Implementations must be
/// pure: the answer may depend only on the element itself.
pub trait GraphMask<N: CfaNode> {
    /// Returns `true` if the given node is hidden from the filtered view.
    fn hides_node(&self, node: &Node<N>) -> bool;

    /// Returns `true` if the given edge is hidden from the filtered view.
    ///
    /// Edges with a hidden endpoint are dropped regardless of this answer.
    fn hides_edge(&self, edge: &Edge<N>) -> bool;
}

/// Hides every node whose CFA location belongs to a different function.
///
/// Edges are never hidden directly; cross-function edges disappear because
/// one of their endpoints is hidden.
#[derive(Debug, Clone)]
pub struct FunctionNameMask {
    /// Name of the function to keep
    name: String,
}

impl FunctionNameMask {
    /// Creates a mask keeping only nodes of the named function.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        FunctionNameMask { name: name.into() }
    }
}

impl<N: CfaNode> GraphMask<N> for FunctionNameMask {
    fn hides_node(&self, node: &Node<N>) -> bool {
        node.cfa_node().function_name() != self.name
    }

    fn hides_edge(&self, _edge: &Edge<N>) -> bool {
        false
    }
}
