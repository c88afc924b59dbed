// Copyright 2025 targetgraph contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # targetgraph
//!
//! Construction and transformation of *target graphs*: explicit directed
//! multigraphs derived from a program's control-flow automaton (CFA), used as
//! the substrate for reachability- and coverage-style analyses.
//!
//! A CFA is consumed through the capability traits in [`cfa`]: program
//! locations with ordered leaving edges, optional call-to-return summary
//! edges, and function entry/exit classification. [`target::TargetGraph`]
//! materializes the reachable sub-CFA into an explicit graph with designated
//! initial and final node sets, and provides a small algebra over such
//! graphs:
//!
//! - **Function scoping** - restrict a graph to the nodes of one function
//! - **Union / intersection / difference** - combine two graphs by node and
//!   edge identity
//! - **Predicate splitting** - duplicate every node into truth-labeled
//!   copies for a Boolean predicate, encoding path-sensitive case
//!   distinctions directly in the graph structure
//!
//! ## Identity model
//!
//! Every [`target::Node`] and [`target::Edge`] receives a process-globally
//! unique handle ([`graph::NodeId`] / [`graph::EdgeId`]) at creation, and all
//! set membership is decided by handle. Transformation operators share node
//! and edge payloads by reference, so "the same node" in two graphs means the
//! same handle: graphs built independently from the same CFA never share
//! nodes, while graphs derived from one another do. This is what makes
//! intersection and difference meaningful for derivation pipelines.
//!
//! ## Example
//!
//! ```rust,ignore
//! use targetgraph::prelude::*;
//!
//! let graph = TargetGraph::from_cfa(entry)?;
//! let scoped = graph.restrict_to_function("main")?;
//! let split = scoped.split_on_predicates(&[p, q])?;
//!
//! for node in split.initial_nodes() {
//!     println!("initial: {node}");
//! }
//! # Ok::<(), targetgraph::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! There are no recoverable errors in this crate: every failure is either a
//! structural inconsistency in the upstream CFA
//! ([`Error::MalformedCfa`]) or a programming error in graph usage
//! ([`Error::GraphError`]). Failures propagate immediately to the caller of
//! the top-level operation; no partial graph is ever returned.

pub(crate) mod error;
pub(crate) mod util;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,ignore
/// use targetgraph::prelude::*;
///
/// let graph = TargetGraph::from_cfa(entry)?;
/// # Ok::<(), targetgraph::Error>(())
/// ```
pub mod prelude;

/// Capability traits for the control-flow automaton collaborator.
///
/// The CFA itself, including how it was parsed and stored, is outside this
/// crate. [`cfa::CfaNode`] and [`cfa::CfaEdge`] describe the
/// minimal surface the target-graph engine needs: ordered leaving edges, an
/// optional call-to-return summary edge, function entry/exit classification,
/// and identity comparison. [`cfa::Predicate`] is the opaque label token
/// attached to nodes during predicate splitting; this crate never evaluates
/// predicates.
pub mod cfa;

/// Handle-keyed directed multigraph container.
///
/// [`graph::DirectedMultigraph`] stores vertex and edge payloads keyed by
/// process-globally unique [`graph::NodeId`] / [`graph::EdgeId`] handles,
/// with adjacency lists for both directions. Duplicate insertion of a handle
/// is a no-op, several edges may connect the same vertex pair, and removing
/// a vertex detaches its incident edges.
pub mod graph;

/// Target-graph construction and the transformation algebra.
///
/// # Key Types
///
/// - [`target::TargetGraph`] - a directed multigraph over [`target::Node`] /
///   [`target::Edge`] plus initial and final node sets
/// - [`target::Node`] - wrapper around one CFA node with accumulated
///   predicate labels
/// - [`target::Edge`] - one directed arc carrying its originating CFA edge
/// - [`target::FunctionNameMask`] - the node/edge predicate behind function
///   scoping
///
/// # Main Operations
///
/// - [`target::TargetGraph::from_cfa`] - worklist traversal of the reachable
///   sub-CFA
/// - [`target::TargetGraph::restrict_to_function`] - function scoping
/// - [`target::TargetGraph::union`] /
///   [`target::TargetGraph::intersection`] /
///   [`target::TargetGraph::difference`] - set algebra by handle identity
/// - [`target::TargetGraph::split_on_predicate`] /
///   [`target::TargetGraph::split_on_predicates`] - powerset expansion
pub mod target;

/// `targetgraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. Used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `targetgraph` Error type
///
/// The error type for all operations in this crate. Every variant signals a
/// fatal logic error, either a malformed upstream CFA or incorrect graph
/// usage, never a recoverable condition.
pub use error::Error;
