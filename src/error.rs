//! Error types for graph construction and layout setup.
//!
//! Only recoverable construction failures are represented here. Caller bugs
//! such as inverted normalization bounds panic instead.

use thiserror::Error;

/// Failure while building or mutating a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A graph needs at least one vertex.
    #[error("graph must contain at least one vertex")]
    Empty,

    /// The `n * n` adjacency storage could not be allocated.
    #[error("cannot allocate adjacency storage for {vertex_count} vertices")]
    Allocation { vertex_count: usize },

    /// An edge endpoint is not a vertex of the graph.
    #[error("edge {start} -> {end} is out of bounds for a graph with {vertex_count} vertices")]
    VertexOutOfBounds {
        start: usize,
        end: usize,
        vertex_count: usize,
    },
}

/// Failure while inserting a batch of edges.
///
/// `index` is the 0-based position of the first rejected edge in the batch.
/// Every edge before it has been applied, none from it onward.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("edge at index {index} was rejected")]
pub struct EdgeBatchError {
    pub index: usize,
    #[source]
    pub source: GraphError,
}

/// Failure while setting up a [`RenderContext`](crate::RenderContext).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A supplied position buffer does not have one entry per vertex.
    #[error("position buffer has {actual} entries but the graph has {expected} vertices")]
    PositionCount { expected: usize, actual: usize },

    /// The position buffer could not be allocated.
    #[error("cannot allocate positions for {vertex_count} vertices")]
    Allocation { vertex_count: usize },
}

/// An unknown force model name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown render method `{0}`")]
pub struct ParseMethodKindError(pub String);
