//! Core directed multigraph implementation.
//!
//! This module provides [`DirectedMultigraph`], the container underneath
//! every target graph. Payloads are stored in hash maps keyed by the global
//! [`NodeId`] / [`EdgeId`] handles, with adjacency lists for both directions.
//!
//! The container enforces two structural rules:
//!
//! - an edge can only be inserted between registered vertices, and
//! - removing a vertex detaches and removes its incident edges,
//!
//! so no reachable state ever contains an edge with a missing endpoint.

use rustc_hash::FxHashMap;

use crate::{
    graph::{EdgeId, NodeId},
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeRecord<E> {
    /// Source vertex of the edge
    source: NodeId,
    /// Target vertex of the edge
    target: NodeId,
    /// User-provided edge payload
    data: E,
}

/// A directed multigraph with typed vertex and edge payloads, keyed by
/// global handles.
///
/// `DirectedMultigraph` differs from a dense index-based graph in two ways
/// that the target-graph algebra depends on:
///
/// - **Handle-keyed storage** - vertices and edges are addressed by
///   [`NodeId`] / [`EdgeId`] handles supplied by the caller, so the same
///   payload (same handle) can be registered in several containers, and
///   duplicate insertion is a no-op rather than a second copy.
/// - **Removal support** - edges and vertices can be removed again, which
///   set-difference and intersection need.
///
/// Multiple edges between the same vertex pair are allowed.
///
/// # Thread Safety
///
/// `DirectedMultigraph<V, E>` is [`Send`] and [`Sync`] when both `V` and `E`
/// are. The container does not support concurrent modification; build it
/// single-threaded, then share it immutably.
#[derive(Debug, Clone)]
pub struct DirectedMultigraph<V, E> {
    /// Vertex payloads by handle
    vertices: FxHashMap<NodeId, V>,
    /// Edge payloads and endpoints by handle
    edges: FxHashMap<EdgeId, EdgeRecord<E>>,
    /// Outgoing edges per vertex (adjacency list for successors)
    outgoing: FxHashMap<NodeId, Vec<EdgeId>>,
    /// Incoming edges per vertex (adjacency list for predecessors)
    incoming: FxHashMap<NodeId, Vec<EdgeId>>,
}

impl<V, E> Default for DirectedMultigraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> DirectedMultigraph<V, E> {
    /// Creates a new empty multigraph.
    #[must_use]
    pub fn new() -> Self {
        DirectedMultigraph {
            vertices: FxHashMap::default(),
            edges: FxHashMap::default(),
            outgoing: FxHashMap::default(),
            incoming: FxHashMap::default(),
        }
    }

    /// Creates a new multigraph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_capacity` - Expected number of vertices
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        DirectedMultigraph {
            vertices: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            edges: FxHashMap::with_capacity_and_hasher(edge_capacity, Default::default()),
            outgoing: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            incoming: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
        }
    }

    /// Registers a vertex under the given handle.
    ///
    /// Inserting a handle that is already present is a no-op that keeps the
    /// existing payload, matching set semantics.
    ///
    /// # Returns
    ///
    /// `true` if the vertex was newly inserted, `false` if it was already
    /// registered.
    pub fn insert_vertex(&mut self, id: NodeId, data: V) -> bool {
        if self.vertices.contains_key(&id) {
            return false;
        }
        self.vertices.insert(id, data);
        self.outgoing.insert(id, Vec::new());
        self.incoming.insert(id, Vec::new());
        true
    }

    /// Registers a directed edge under the given handle.
    ///
    /// Both endpoints must already be registered vertices; inserting a handle
    /// that is already present is a no-op.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the edge was newly inserted, `Ok(false)` if the handle
    /// was already registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphError`] if `source` or `target` is not a vertex
    /// of this container. The container is left unchanged.
    pub fn insert_edge(
        &mut self,
        id: EdgeId,
        source: NodeId,
        target: NodeId,
        data: E,
    ) -> Result<bool> {
        if self.edges.contains_key(&id) {
            return Ok(false);
        }
        if !self.vertices.contains_key(&source) {
            return Err(Error::GraphError(format!(
                "edge {id}: source vertex {source} is not registered"
            )));
        }
        if !self.vertices.contains_key(&target) {
            return Err(Error::GraphError(format!(
                "edge {id}: target vertex {target} is not registered"
            )));
        }

        self.edges.insert(
            id,
            EdgeRecord {
                source,
                target,
                data,
            },
        );
        self.outgoing.entry(source).or_default().push(id);
        self.incoming.entry(target).or_default().push(id);
        Ok(true)
    }

    /// Removes the edge with the given handle, detaching it from both
    /// adjacency lists.
    ///
    /// # Returns
    ///
    /// `true` if the edge was present and removed, `false` if the handle was
    /// unknown.
    pub fn remove_edge(&mut self, id: EdgeId) -> bool {
        let Some(record) = self.edges.remove(&id) else {
            return false;
        };
        if let Some(out) = self.outgoing.get_mut(&record.source) {
            out.retain(|&e| e != id);
        }
        if let Some(inc) = self.incoming.get_mut(&record.target) {
            inc.retain(|&e| e != id);
        }
        true
    }

    /// Removes the vertex with the given handle together with all its
    /// incident edges.
    ///
    /// # Returns
    ///
    /// `true` if the vertex was present and removed, `false` if the handle
    /// was unknown.
    pub fn remove_vertex(&mut self, id: NodeId) -> bool {
        if !self.vertices.contains_key(&id) {
            return false;
        }

        let mut incident: Vec<EdgeId> = Vec::new();
        if let Some(out) = self.outgoing.get(&id) {
            incident.extend(out.iter().copied());
        }
        if let Some(inc) = self.incoming.get(&id) {
            incident.extend(inc.iter().copied());
        }
        for edge in incident {
            self.remove_edge(edge);
        }

        self.vertices.remove(&id);
        self.outgoing.remove(&id);
        self.incoming.remove(&id);
        true
    }

    /// Returns a reference to the payload of the given vertex.
    #[must_use]
    pub fn vertex(&self, id: NodeId) -> Option<&V> {
        self.vertices.get(&id)
    }

    /// Returns a reference to the payload of the given edge.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&E> {
        self.edges.get(&id).map(|record| &record.data)
    }

    /// Returns the source and target vertices of the given edge.
    #[must_use]
    pub fn edge_endpoints(&self, id: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges
            .get(&id)
            .map(|record| (record.source, record.target))
    }

    /// Checks whether the given vertex handle is registered.
    #[must_use]
    pub fn contains_vertex(&self, id: NodeId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Checks whether the given edge handle is registered.
    #[must_use]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(&id)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the container holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns an iterator over all vertex handles.
    ///
    /// Iteration order is unspecified; callers that need determinism sort
    /// the handles.
    pub fn vertex_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.vertices.keys().copied()
    }

    /// Returns an iterator over all vertices with their handles.
    pub fn vertices(&self) -> impl Iterator<Item = (NodeId, &V)> + '_ {
        self.vertices.iter().map(|(&id, data)| (id, data))
    }

    /// Returns an iterator over all edge handles.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    /// Returns an iterator over all edges with their handles.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.edges.iter().map(|(&id, record)| (id, &record.data))
    }

    /// Returns an iterator over the outgoing edges of the given vertex.
    ///
    /// Yields nothing for an unknown vertex.
    pub fn outgoing_edges(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, &E)> + '_ {
        self.outgoing
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|&edge_id| self.edges.get(&edge_id).map(|record| (edge_id, &record.data)))
    }

    /// Returns the out-degree of the given vertex (0 for unknown handles).
    #[must_use]
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.outgoing.get(&id).map_or(0, Vec::len)
    }

    /// Returns the in-degree of the given vertex (0 for unknown handles).
    #[must_use]
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.incoming.get(&id).map_or(0, Vec::len)
    }
}
