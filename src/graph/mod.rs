//! Generic handle-based graph infrastructure.
//!
//! This module provides the domain-agnostic pieces underneath the target
//! graph: globally-unique [`NodeId`] / [`EdgeId`] handles and the
//! [`DirectedMultigraph`] container that stores typed payloads under them.
//!
//! # Architecture
//!
//! Handles are allocated from process-global atomic counters, never reused,
//! and own the identity of whatever they name. The container is a plain
//! adjacency-list multigraph keyed by those handles; the domain layer in
//! [`crate::target`] builds its set algebra on top.
//!
//! # Key Components
//!
//! - [`NodeId`] - strongly-typed vertex handle
//! - [`EdgeId`] - strongly-typed edge handle
//! - [`DirectedMultigraph`] - directed multigraph with typed vertex and edge
//!   payloads

mod edge;
mod multigraph;
mod node;

pub use edge::EdgeId;
pub use multigraph::DirectedMultigraph;
pub use node::NodeId;
