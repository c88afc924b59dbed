//! Target-graph node implementation.
//!
//! A [`Node`] wraps a CFA location together with the predicate labels
//! accumulated by splitting. The payload lives behind an [`Arc`], so cloning
//! a node is cheap and every graph that contains the node shares the same
//! payload under the same [`NodeId`] handle.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{
    cfa::{CfaNode, Predicate},
    graph::NodeId,
};

/// Shared payload of a target-graph node.
struct NodeData<N> {
    /// Handle owning this node's identity
    id: NodeId,
    /// The CFA location this node wraps
    cfa_node: N,
    /// Predicate labels with their truth assignment, in split order
    predicates: Vec<(Predicate, bool)>,
}

/// A node of a target graph: a CFA location plus accumulated predicate
/// labels.
///
/// Identity is carried by the [`NodeId`] handle, never by content. Two nodes
/// wrapping the same CFA location are still distinct if they were created
/// separately, and a node shared between graphs (by union, intersection, or
/// shallow copy) is the same node everywhere. [`PartialEq`], [`Hash`], and
/// [`Ord`] all delegate to the handle.
///
/// Cloning is an [`Arc`] bump; the payload is immutable after creation.
pub struct Node<N> {
    inner: Arc<NodeData<N>>,
}

impl<N> Node<N> {
    /// Creates a node wrapping the given CFA location, under a fresh handle
    /// and with no predicate labels.
    pub(crate) fn new(cfa_node: N) -> Self {
        Node {
            inner: Arc::new(NodeData {
                id: NodeId::fresh(),
                cfa_node,
                predicates: Vec::new(),
            }),
        }
    }

    /// Returns the handle identifying this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.inner.id
    }

    /// Returns the CFA location this node wraps.
    #[must_use]
    pub fn cfa_node(&self) -> &N {
        &self.inner.cfa_node
    }

    /// Returns the predicate labels of this node with their truth
    /// assignments, in the order the splits were applied.
    #[must_use]
    pub fn predicates(&self) -> &[(Predicate, bool)] {
        &self.inner.predicates
    }
}

impl<N: CfaNode> Node<N> {
    /// Creates a relabeled copy of this node under a fresh handle.
    ///
    /// The copy wraps the same CFA location and carries all existing labels
    /// plus `(predicate, truth)` appended. The original is untouched.
    pub(crate) fn with_predicate(&self, predicate: Predicate, truth: bool) -> Self {
        let mut predicates = self.inner.predicates.clone();
        predicates.push((predicate, truth));
        Node {
            inner: Arc::new(NodeData {
                id: NodeId::fresh(),
                cfa_node: self.inner.cfa_node.clone(),
                predicates,
            }),
        }
    }
}

impl<N> Clone for Node<N> {
    fn clone(&self) -> Self {
        Node {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<N> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl<N> Eq for Node<N> {}

impl<N> Hash for Node<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl<N> PartialOrd for Node<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for Node<N> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.id.cmp(&other.inner.id)
    }
}

impl<N: fmt::Debug> fmt::Debug for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.inner.id)
            .field("cfa_node", &self.inner.cfa_node)
            .field("predicates", &self.inner.predicates)
            .finish()
    }
}

impl<N: fmt::Debug> fmt::Display for Node<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}", self.inner.id, self.inner.cfa_node)?;
        for (predicate, truth) in &self.inner.predicates {
            write!(f, ", {predicate}={truth}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::make_node;
    use std::collections::HashSet;

    #[test]
    fn test_identity_by_handle_not_content() {
        let location = make_node("main");
        let n1 = Node::new(location.clone());
        let n2 = Node::new(location);

        assert_ne!(n1, n2);
        assert_eq!(n1, n1.clone());
    }

    #[test]
    fn test_clone_shares_handle() {
        let node = Node::new(make_node("main"));
        let copy = node.clone();

        assert_eq!(node.id(), copy.id());
        let mut set = HashSet::new();
        set.insert(node);
        set.insert(copy);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_with_predicate_creates_fresh_identity() {
        let node = Node::new(make_node("main"));
        let labeled = node.with_predicate(Predicate::new("x > 0"), true);

        assert_ne!(node, labeled);
        assert!(node.predicates().is_empty());
        assert_eq!(labeled.predicates().len(), 1);
        assert_eq!(labeled.predicates()[0].1, true);
        assert_eq!(labeled.cfa_node(), node.cfa_node());
    }

    #[test]
    fn test_predicates_accumulate_in_split_order() {
        let node = Node::new(make_node("main"));
        let labeled = node
            .with_predicate(Predicate::new("p"), true)
            .with_predicate(Predicate::new("q"), false);

        let labels: Vec<(&str, bool)> = labeled
            .predicates()
            .iter()
            .map(|(p, t)| (p.name(), *t))
            .collect();
        assert_eq!(labels, vec![("p", true), ("q", false)]);
    }

    #[test]
    fn test_display_includes_labels() {
        let node = Node::new(make_node("main")).with_predicate(Predicate::new("x > 0"), false);
        let text = format!("{node}");

        assert!(text.starts_with(&format!("{}", node.id())));
        assert!(text.contains("x > 0=false"));
    }
}
