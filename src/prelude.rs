//! # targetgraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits from the targetgraph library. Import this module to get quick
//! access to the essential types for target-graph construction and
//! transformation.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all targetgraph operations
pub use crate::Error;

/// The result type used throughout targetgraph
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The target graph with construction and the transformation algebra
pub use crate::target::TargetGraph;

/// Target-graph elements
pub use crate::target::{Edge, Node};

/// Filtering predicates for masked subgraph views
pub use crate::target::{FunctionNameMask, GraphMask};

// ================================================================================================
// CFA Collaborator Traits
// ================================================================================================

/// Capability traits the upstream control-flow automaton implements
pub use crate::cfa::{CfaEdge, CfaNode};

/// Opaque predicate token used as a node label during splitting
pub use crate::cfa::Predicate;

// ================================================================================================
// Graph Infrastructure
// ================================================================================================

/// Strongly-typed element handles
pub use crate::graph::{EdgeId, NodeId};

/// The underlying handle-keyed multigraph container
pub use crate::graph::DirectedMultigraph;
