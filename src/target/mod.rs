//! Target-graph domain layer.
//!
//! This module implements the target graph itself: nodes wrapping CFA
//! locations, edges derived from CFA edges, masks for filtered views, and
//! the [`TargetGraph`] type with construction and the set-algebra operators.
//!
//! # Architecture
//!
//! The domain layer sits on top of [`crate::graph`]: payloads are
//! reference-counted and identified by their handles, so elements can be
//! shared between any number of graphs while each graph keeps an independent
//! container. The [`crate::cfa`] traits are the only coupling to the
//! upstream control-flow representation.
//!
//! # Key Components
//!
//! - [`Node`] - CFA location plus accumulated predicate labels
//! - [`Edge`] - connection derived from a CFA edge
//! - [`GraphMask`] / [`FunctionNameMask`] - filtering predicates
//! - [`TargetGraph`] - the graph with initial/final sets and operators

mod edge;
mod graph;
mod mask;
mod node;

pub use edge::Edge;
pub use graph::TargetGraph;
pub use mask::{FunctionNameMask, GraphMask};
pub use node::Node;
