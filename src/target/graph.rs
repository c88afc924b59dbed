//! Target-graph construction and set algebra.
//!
//! A [`TargetGraph`] is built once from a control-flow automaton and then
//! refined by pure operators: function filtering, union, intersection,
//! difference, and predicate splitting. Every operator returns a new graph
//! and leaves its operands untouched; derived graphs share node and edge
//! payloads with their operands through the handle model.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use crate::{
    cfa::{CfaEdge, CfaNode, Predicate},
    graph::{DirectedMultigraph, EdgeId, NodeId},
    target::{Edge, FunctionNameMask, GraphMask, Node},
    util::escape_dot,
    Error, Result,
};

/// Number of predicates above which a multi-predicate split logs a warning,
/// since the result grows by 2^k vertices and 4^k edges.
const SPLIT_WARN_PREDICATES: usize = 10;

/// A directed multigraph over CFA locations with distinguished initial and
/// final node sets.
///
/// The graph is the working representation for coverage-goal computation:
/// construction mirrors the CFA, and the operators carve out the program
/// parts a test goal talks about.
///
/// # Identity Semantics
///
/// Node and edge membership is decided by handle, never by content. Two
/// graphs built independently from the same CFA share nothing, so their
/// intersection is empty; a graph derived from another (by an operator or
/// [`clone_shallow`](Self::clone_shallow)) shares its elements with the
/// original, so set operations between the two behave like textbook set
/// algebra.
///
/// # Invariants
///
/// Every reachable `TargetGraph` satisfies:
///
/// - initial and final nodes are vertices of the graph,
/// - every edge's endpoints are vertices of the graph.
///
/// Operations that would violate these fail without publishing a partial
/// graph.
///
/// # Examples
///
/// ```rust,ignore
/// use targetgraph::prelude::*;
///
/// let graph = TargetGraph::from_cfa(entry)?;
/// let in_main = graph.restrict_to_function("main")?;
/// let split = in_main.split_on_predicate(&Predicate::new("x > 0"))?;
/// ```
#[derive(Debug)]
pub struct TargetGraph<N: CfaNode> {
    /// Underlying handle-keyed multigraph
    graph: DirectedMultigraph<Node<N>, Edge<N>>,
    /// Handles of the initial nodes
    initial: FxHashSet<NodeId>,
    /// Handles of the final nodes
    finals: FxHashSet<NodeId>,
}

impl<N: CfaNode> Clone for TargetGraph<N> {
    fn clone(&self) -> Self {
        self.clone_shallow()
    }
}

impl<N: CfaNode> TargetGraph<N> {
    /// Builds a target graph from the CFA reachable from `entry`.
    ///
    /// Locations are discovered breadth-first along ordinary leaving edges
    /// and call-to-return summary edges. Each reachable CFA location becomes
    /// exactly one node, each traversed CFA edge exactly one edge. The
    /// initial set is the entry's node; the final set holds the nodes of
    /// locations with no leaving and no summary edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedCfa`] if a reachable dead-end location is
    /// not a function exit. No graph is returned in that case.
    pub fn from_cfa(entry: N) -> Result<Self> {
        let mut graph = DirectedMultigraph::new();
        let mut mapping: FxHashMap<N, Node<N>> = FxHashMap::default();
        let mut worklist: VecDeque<(N, Node<N>)> = VecDeque::new();

        let root = Node::new(entry.clone());
        graph.insert_vertex(root.id(), root.clone());
        mapping.insert(entry.clone(), root.clone());
        worklist.push_back((entry, root.clone()));

        let mut initial = FxHashSet::default();
        initial.insert(root.id());
        let mut finals = FxHashSet::default();

        while let Some((location, source)) = worklist.pop_front() {
            let mut outgoing: Vec<N::Edge> = location.leaving_edges().collect();
            if let Some(summary) = location.summary_edge() {
                outgoing.push(summary);
            }

            if outgoing.is_empty() {
                if !location.is_exit() {
                    return Err(Error::MalformedCfa {
                        message: format!(
                            "dead-end location {location:?} in function '{}' is not a function exit",
                            location.function_name()
                        ),
                    });
                }
                finals.insert(source.id());
                continue;
            }

            for cfa_edge in outgoing {
                let successor = cfa_edge.successor();
                let target = match mapping.get(&successor) {
                    Some(node) => node.clone(),
                    None => {
                        let node = Node::new(successor.clone());
                        graph.insert_vertex(node.id(), node.clone());
                        mapping.insert(successor.clone(), node.clone());
                        worklist.push_back((successor, node.clone()));
                        node
                    }
                };
                Self::connect(&mut graph, &source, &target, cfa_edge)?;
            }
        }

        Ok(TargetGraph {
            graph,
            initial,
            finals,
        })
    }

    /// Creates a fresh edge and registers it in the container, keeping edge
    /// creation and registration inseparable.
    fn connect(
        graph: &mut DirectedMultigraph<Node<N>, Edge<N>>,
        source: &Node<N>,
        target: &Node<N>,
        cfa_edge: N::Edge,
    ) -> Result<Edge<N>> {
        let edge = Edge::new(source.clone(), target.clone(), cfa_edge);
        graph.insert_edge(edge.id(), source.id(), target.id(), edge.clone())?;
        Ok(edge)
    }

    /// Returns a copy sharing all nodes and edges with this graph.
    ///
    /// The containers are independent (elements can be added to or removed
    /// from either side) but their elements are the same: set operations
    /// between original and copy see full overlap.
    #[must_use]
    pub fn clone_shallow(&self) -> Self {
        TargetGraph {
            graph: self.graph.clone(),
            initial: self.initial.clone(),
            finals: self.finals.clone(),
        }
    }

    /// Materializes the subgraph visible through the given mask.
    ///
    /// Hidden nodes are dropped together with their incident edges; an edge
    /// is also dropped when the mask hides it directly. Surviving elements
    /// are shared with this graph. Initial and final sets are restricted to
    /// surviving nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if the container rejects an edge, which
    /// indicates an internal invariant violation.
    pub fn masked(&self, mask: &impl GraphMask<N>) -> Result<Self> {
        let mut graph = DirectedMultigraph::new();
        for (id, node) in self.graph.vertices() {
            if !mask.hides_node(node) {
                graph.insert_vertex(id, node.clone());
            }
        }
        for (id, edge) in self.graph.edges() {
            if mask.hides_edge(edge) {
                continue;
            }
            if graph.contains_vertex(edge.source().id()) && graph.contains_vertex(edge.target().id())
            {
                graph.insert_edge(id, edge.source().id(), edge.target().id(), edge.clone())?;
            }
        }

        let initial = self
            .initial
            .iter()
            .copied()
            .filter(|&id| graph.contains_vertex(id))
            .collect();
        let finals = self
            .finals
            .iter()
            .copied()
            .filter(|&id| graph.contains_vertex(id))
            .collect();

        Ok(TargetGraph {
            graph,
            initial,
            finals,
        })
    }

    /// Returns the subgraph of nodes belonging to the named function.
    ///
    /// Cross-function edges disappear with their out-of-function endpoint.
    /// Unlike [`masked`](Self::masked), the initial and final sets are
    /// recomputed from the surviving nodes: initial nodes are the kept
    /// function entries, final nodes the kept function exits. An unknown
    /// function name yields an empty graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] on an internal invariant violation, see
    /// [`masked`](Self::masked).
    pub fn restrict_to_function(&self, function_name: &str) -> Result<Self> {
        let mut result = self.masked(&FunctionNameMask::new(function_name))?;
        result.initial = result
            .graph
            .vertices()
            .filter(|(_, node)| node.cfa_node().is_function_entry())
            .map(|(id, _)| id)
            .collect();
        result.finals = result
            .graph
            .vertices()
            .filter(|(_, node)| node.cfa_node().is_exit())
            .map(|(id, _)| id)
            .collect();
        Ok(result)
    }

    /// Returns the union of this graph and `other`.
    ///
    /// Vertices, edges, initial and final sets are united by handle; shared
    /// elements appear once. The operands are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] on an internal invariant violation.
    pub fn union(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone_shallow();
        for (id, node) in other.graph.vertices() {
            result.graph.insert_vertex(id, node.clone());
        }
        for (id, edge) in other.graph.edges() {
            result
                .graph
                .insert_edge(id, edge.source().id(), edge.target().id(), edge.clone())?;
        }
        result.initial.extend(other.initial.iter().copied());
        result.finals.extend(other.finals.iter().copied());
        Ok(result)
    }

    /// Returns the intersection of this graph and `other`.
    ///
    /// Only elements present in both graphs (by handle) survive. Two graphs
    /// built independently therefore intersect to the empty graph even when
    /// they cover the same CFA.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone_shallow();

        let foreign_vertices: Vec<NodeId> = result
            .graph
            .vertex_ids()
            .filter(|&id| !other.graph.contains_vertex(id))
            .collect();
        for id in foreign_vertices {
            result.graph.remove_vertex(id);
        }

        let foreign_edges: Vec<EdgeId> = result
            .graph
            .edge_ids()
            .filter(|&id| !other.graph.contains_edge(id))
            .collect();
        for id in foreign_edges {
            result.graph.remove_edge(id);
        }

        result.initial = self.initial.intersection(&other.initial).copied().collect();
        result.finals = self.finals.intersection(&other.finals).copied().collect();
        result
    }

    /// Returns the difference of this graph and `other`.
    ///
    /// Edges shared with `other` are removed before vertices, so edges of
    /// this graph that merely touch a removed vertex disappear with it
    /// rather than dangling. Initial and final nodes whose vertex was
    /// removed are dropped from their sets.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone_shallow();

        let shared_edges: Vec<EdgeId> = result
            .graph
            .edge_ids()
            .filter(|&id| other.graph.contains_edge(id))
            .collect();
        for id in shared_edges {
            result.graph.remove_edge(id);
        }

        let shared_vertices: Vec<NodeId> = result
            .graph
            .vertex_ids()
            .filter(|&id| other.graph.contains_vertex(id))
            .collect();
        for id in shared_vertices {
            result.graph.remove_vertex(id);
        }

        let graph = &result.graph;
        result.initial.retain(|id| graph.contains_vertex(*id));
        result.finals.retain(|id| graph.contains_vertex(*id));
        result
    }

    /// Splits every node on the given predicate.
    ///
    /// Each node is replaced by two relabeled copies, one per truth value of
    /// the predicate, and each edge by four copies connecting every variant
    /// pair. Initial and final status carries over to both variants. The
    /// result shares nothing with this graph; all elements are fresh.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] on an internal invariant violation.
    pub fn split_on_predicate(&self, predicate: &Predicate) -> Result<Self> {
        let mut graph = DirectedMultigraph::with_capacity(
            self.graph.vertex_count() * 2,
            self.graph.edge_count() * 4,
        );
        let mut variants: FxHashMap<NodeId, [Node<N>; 2]> = FxHashMap::default();

        for (id, node) in self.graph.vertices() {
            let on_true = node.with_predicate(predicate.clone(), true);
            let on_false = node.with_predicate(predicate.clone(), false);
            graph.insert_vertex(on_true.id(), on_true.clone());
            graph.insert_vertex(on_false.id(), on_false.clone());
            variants.insert(id, [on_true, on_false]);
        }

        for (id, edge) in self.graph.edges() {
            let sources = variants.get(&edge.source().id()).ok_or_else(|| {
                Error::GraphError(format!("edge {id} has an unregistered source"))
            })?;
            let targets = variants.get(&edge.target().id()).ok_or_else(|| {
                Error::GraphError(format!("edge {id} has an unregistered target"))
            })?;
            for source in sources {
                for target in targets {
                    Self::connect(&mut graph, source, target, edge.cfa_edge().clone())?;
                }
            }
        }

        let mut initial = FxHashSet::default();
        for id in &self.initial {
            if let Some([on_true, on_false]) = variants.get(id) {
                initial.insert(on_true.id());
                initial.insert(on_false.id());
            }
        }
        let mut finals = FxHashSet::default();
        for id in &self.finals {
            if let Some([on_true, on_false]) = variants.get(id) {
                finals.insert(on_true.id());
                finals.insert(on_false.id());
            }
        }

        Ok(TargetGraph {
            graph,
            initial,
            finals,
        })
    }

    /// Splits on each predicate in turn, left to right.
    ///
    /// With `k` predicates the result has `2^k` times the nodes and `4^k`
    /// times the edges of this graph; a warning is logged when `k` crosses
    /// the growth threshold. An empty slice yields a shallow copy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] on an internal invariant violation.
    pub fn split_on_predicates(&self, predicates: &[Predicate]) -> Result<Self> {
        if predicates.len() >= SPLIT_WARN_PREDICATES {
            warn!(
                predicates = predicates.len(),
                nodes = self.graph.vertex_count(),
                edges = self.graph.edge_count(),
                "predicate split grows the graph exponentially in the number of predicates"
            );
        }

        let mut result = self.clone_shallow();
        for predicate in predicates {
            result = result.split_on_predicate(predicate)?;
        }
        Ok(result)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Checks whether the given node is an element of this graph.
    #[must_use]
    pub fn contains_node(&self, node: &Node<N>) -> bool {
        self.graph.contains_vertex(node.id())
    }

    /// Checks whether the given edge is an element of this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: &Edge<N>) -> bool {
        self.graph.contains_edge(edge.id())
    }

    /// Returns an iterator over all nodes, in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> + '_ {
        self.graph.vertices().map(|(_, node)| node)
    }

    /// Returns an iterator over all edges, in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<N>> + '_ {
        self.graph.edges().map(|(_, edge)| edge)
    }

    /// Returns the initial nodes in ascending handle order.
    #[must_use]
    pub fn initial_nodes(&self) -> Vec<Node<N>> {
        self.sorted_members(&self.initial)
    }

    /// Returns the final nodes in ascending handle order.
    #[must_use]
    pub fn final_nodes(&self) -> Vec<Node<N>> {
        self.sorted_members(&self.finals)
    }

    /// Checks whether the given node is in the initial set.
    #[must_use]
    pub fn is_initial(&self, node: &Node<N>) -> bool {
        self.initial.contains(&node.id())
    }

    /// Checks whether the given node is in the final set.
    #[must_use]
    pub fn is_final(&self, node: &Node<N>) -> bool {
        self.finals.contains(&node.id())
    }

    fn sorted_members(&self, ids: &FxHashSet<NodeId>) -> Vec<Node<N>> {
        let mut members: Vec<Node<N>> = ids
            .iter()
            .filter_map(|&id| self.graph.vertex(id))
            .cloned()
            .collect();
        members.sort();
        members
    }

    /// Generates a Graphviz DOT representation of this graph.
    ///
    /// Initial nodes are filled light green, final nodes light coral.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional graph label rendered above the drawing
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        use std::fmt::Write;

        let mut dot = String::new();
        dot.push_str("digraph TargetGraph {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=ellipse];\n\n");

        let mut nodes: Vec<&Node<N>> = self.graph.vertices().map(|(_, node)| node).collect();
        nodes.sort();
        for node in nodes {
            let style = if self.initial.contains(&node.id()) {
                ", style=filled, fillcolor=lightgreen"
            } else if self.finals.contains(&node.id()) {
                ", style=filled, fillcolor=lightcoral"
            } else {
                ""
            };
            let _ = writeln!(
                dot,
                "    {} [label=\"{}\"{}];",
                node.id(),
                escape_dot(&node.to_string()),
                style
            );
        }

        dot.push('\n');
        let mut edges: Vec<&Edge<N>> = self.graph.edges().map(|(_, edge)| edge).collect();
        edges.sort_by_key(|edge| edge.id());
        for edge in edges {
            let _ = writeln!(dot, "    {} -> {};", edge.source().id(), edge.target().id());
        }

        dot.push_str("}\n");
        dot
    }
}

impl<N: CfaNode> fmt::Display for TargetGraph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INITIAL NODES:")?;
        for node in self.initial_nodes() {
            writeln!(f, "  {node}")?;
        }

        writeln!(f, "FINAL NODES:")?;
        for node in self.final_nodes() {
            writeln!(f, "  {node}")?;
        }

        writeln!(f, "EDGES:")?;
        let mut edges: Vec<&Edge<N>> = self.graph.edges().map(|(_, edge)| edge).collect();
        edges.sort_by_key(|edge| edge.id());
        for edge in edges {
            writeln!(f, "  {edge}")?;
        }
        Ok(())
    }
}
