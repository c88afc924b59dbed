//! Capability traits for the control-flow automaton (CFA) collaborator.
//!
//! The CFA data structure is owned by an upstream layer; this crate only
//! needs a narrow, capability-style view of it. [`CfaNode`] and [`CfaEdge`]
//! describe that view: identity-comparable program locations with an ordered
//! list of leaving edges, an optional call-to-return summary edge, and
//! function entry/exit classification.
//!
//! # Design Principles
//!
//! ## Iterator-Based Traversal
//!
//! [`CfaNode::leaving_edges`] returns an iterator rather than a collection,
//! but the iteration order is contractual: edges must be yielded in their
//! original index order, since target-graph construction visits successors
//! in exactly that order.
//!
//! ## Identity, Not Content
//!
//! `CfaNode` requires [`Eq`] + [`Hash`] because construction deduplicates
//! nodes by CFA-node identity. Implementations backed by shared pointers
//! should compare by pointer identity, matching the "stable identity"
//! capability of the upstream node objects.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// A program location in the control-flow automaton.
///
/// Implemented by the upstream CFA layer. All methods are read-only
/// capabilities; this crate never mutates the CFA.
pub trait CfaNode: Clone + Eq + Hash + fmt::Debug {
    /// The edge type connecting locations of this CFA.
    type Edge: CfaEdge<Node = Self>;

    /// Returns the ordinary leaving edges of this location, in their
    /// original index order.
    ///
    /// The call-to-return summary edge is *not* part of this sequence; it is
    /// exposed separately through [`summary_edge`](Self::summary_edge).
    fn leaving_edges(&self) -> impl Iterator<Item = Self::Edge>;

    /// Returns the call-to-return summary edge leaving this location, if any.
    ///
    /// A summary edge abstracts a function call's effect without descending
    /// into the callee, connecting the call site directly to its return
    /// point.
    fn summary_edge(&self) -> Option<Self::Edge>;

    /// Returns `true` if this location is the entry node of a function.
    fn is_function_entry(&self) -> bool;

    /// Returns `true` if this location is the exit node of a function.
    fn is_exit(&self) -> bool;

    /// Returns the name of the function this location belongs to.
    fn function_name(&self) -> &str;
}

/// A directed edge of the control-flow automaton.
///
/// Edges are opaque to this crate apart from their successor location and
/// whether they are call-to-return summary edges; statement/assumption
/// content stays with the upstream layer.
pub trait CfaEdge: Clone + fmt::Debug {
    /// The node type this edge connects.
    type Node: CfaNode;

    /// Returns the CFA location this edge leads to.
    fn successor(&self) -> Self::Node;

    /// Returns `true` if this is a call-to-return summary edge.
    fn is_summary(&self) -> bool;
}

/// An opaque predicate token used as a node label during predicate splitting.
///
/// The predicate language and its evaluation live upstream; this crate only
/// needs an equality/hash-comparable key to record under which truth
/// assignment a split node is reachable. The name is interned, so cloning a
/// `Predicate` is cheap and every copy of a label compares equal to its
/// origin.
///
/// # Examples
///
/// ```rust
/// use targetgraph::cfa::Predicate;
///
/// let p = Predicate::new("x > 0");
/// assert_eq!(p.name(), "x > 0");
/// assert_eq!(p, p.clone());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Predicate {
    name: Arc<str>,
}

impl Predicate {
    /// Creates a predicate token from its display name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Predicate { name: name.into() }
    }

    /// Returns the display name of this predicate.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_predicate_equality_by_name() {
        let p1 = Predicate::new("x > 0");
        let p2 = Predicate::new("x > 0");
        let q = Predicate::new("y == 1");

        assert_eq!(p1, p2);
        assert_ne!(p1, q);
    }

    #[test]
    fn test_predicate_as_set_key() {
        let mut set = HashSet::new();
        set.insert(Predicate::new("a"));
        set.insert(Predicate::new("b"));
        set.insert(Predicate::new("a"));

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_predicate_display() {
        let p = Predicate::new("x > 0");
        assert_eq!(format!("{p}"), "x > 0");
    }
}
