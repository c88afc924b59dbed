use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// This crate performs no I/O and makes no external calls, so every error is a
/// logic error: either the upstream CFA violates a structural invariant, or a
/// graph container was used incorrectly. Neither is recoverable; callers
/// should treat any `Err` as fatal to the operation that produced it. No
/// partial target graph is ever returned alongside an error.
///
/// # Error Categories
///
/// ## Upstream structure
/// - [`Error::MalformedCfa`] - the CFA handed to construction is structurally
///   inconsistent (e.g. a dead-end node that is not a function exit)
///
/// ## Internal usage
/// - [`Error::GraphError`] - a graph container operation was invoked with
///   invalid arguments (e.g. an edge endpoint that is not a vertex)
#[derive(Error, Debug)]
pub enum Error {
    /// The control-flow automaton is structurally inconsistent.
    ///
    /// Construction requires that every reachable CFA node with zero leaving
    /// edges and no call-to-return summary edge is a function exit node. A
    /// node violating this indicates a broken CFA in the upstream layer, not
    /// something this crate can recover from.
    #[error("malformed CFA: {message}")]
    MalformedCfa {
        /// Description of the structural inconsistency that was detected
        message: String,
    },

    /// Graph container misuse.
    ///
    /// Raised when a multigraph operation receives invalid input, such as
    /// inserting an edge whose endpoints are not registered vertices. This
    /// signals a programming error in the caller; the container is left
    /// unchanged.
    #[error("{0}")]
    GraphError(String),
}
