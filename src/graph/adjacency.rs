//! Graph - dense adjacency storage.
//!
//! Vertices are the indices `0..vertex_count` and carry no payload. The
//! adjacency relation is a single row-major `Vec<bool>` of `n * n` entries,
//! so `adjacency[a * n + b]` is true iff there is an edge from `a` to `b`.
//! The force models read whole rows of it once per vertex per step.

use std::collections::HashMap;

use log::debug;
use petgraph::EdgeType;
use petgraph::stable_graph::{IndexType, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};

use super::edge::Edge;
use crate::error::{EdgeBatchError, GraphError};

/// A fixed-size graph with a dense adjacency relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<bool>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// Fails if `vertex_count` is zero or the adjacency storage cannot be
    /// allocated. Nothing is allocated on failure.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::Empty);
        }

        let cells = vertex_count
            .checked_mul(vertex_count)
            .ok_or(GraphError::Allocation { vertex_count })?;

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(cells)
            .map_err(|_| GraphError::Allocation { vertex_count })?;
        adjacency.resize(cells, false);

        debug!(vertex_count = vertex_count; "Created graph");

        Ok(Self {
            vertex_count,
            adjacency,
        })
    }

    /// Build a dense graph from a petgraph `StableGraph`.
    ///
    /// Node indices are compacted in iteration order, so the `i`-th live node
    /// becomes vertex `i`. Edges of an undirected graph are inserted in both
    /// directions. Node and edge weights are ignored.
    pub fn from_petgraph<N, E, Ty, Ix>(source: &StableGraph<N, E, Ty, Ix>) -> Result<Self, GraphError>
    where
        Ty: EdgeType,
        Ix: IndexType,
    {
        let index_of: HashMap<_, _> = source
            .node_indices()
            .enumerate()
            .map(|(vertex, node)| (node, vertex))
            .collect();

        let mut graph = Self::new(index_of.len())?;
        let directed = source.is_directed();

        for edge in source.edge_references() {
            // Every edge endpoint is a live node, so both lookups succeed.
            if let (Some(&start), Some(&end)) =
                (index_of.get(&edge.source()), index_of.get(&edge.target()))
            {
                graph.add_edge(Edge {
                    start,
                    end,
                    directed,
                })?;
            }
        }

        Ok(graph)
    }

    /// Number of vertices, fixed at creation.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Insert an edge.
    ///
    /// Rejects the edge without touching the graph if either endpoint is out
    /// of range. Inserting an existing edge again succeeds and changes nothing.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        let n = self.vertex_count;
        if edge.start >= n || edge.end >= n {
            return Err(GraphError::VertexOutOfBounds {
                start: edge.start,
                end: edge.end,
                vertex_count: n,
            });
        }

        self.adjacency[edge.start * n + edge.end] = true;
        if !edge.directed {
            self.adjacency[edge.end * n + edge.start] = true;
        }
        Ok(())
    }

    /// Insert edges in order, stopping at the first rejected one.
    ///
    /// On failure the error carries the 0-based index of the rejected edge.
    /// Edges before it stay inserted.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<(), EdgeBatchError>
    where
        I: IntoIterator<Item = Edge>,
    {
        for (index, edge) in edges.into_iter().enumerate() {
            if let Err(source) = self.add_edge(edge) {
                debug!(index = index; "Stopped batch edge insertion at rejected edge");
                return Err(EdgeBatchError { index, source });
            }
        }
        Ok(())
    }

    /// Check whether there is an edge from `start` to `end`.
    ///
    /// Out-of-range vertices have no edges.
    #[inline]
    pub fn has_edge(&self, start: usize, end: usize) -> bool {
        start < self.vertex_count
            && end < self.vertex_count
            && self.adjacency[start * self.vertex_count + end]
    }

    /// Number of `true` entries in the adjacency relation.
    ///
    /// An undirected edge between distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().filter(|&&set| set).count()
    }

    /// Vertices reachable from `vertex` over one outgoing edge.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let row: &[bool] = if vertex < self.vertex_count {
            self.row(vertex)
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter_map(|(end, &set)| set.then_some(end))
    }

    /// All `(start, end)` pairs with an edge from `start` to `end`, row by row.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count;
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(move |(cell, &set)| set.then_some((cell / n, cell % n)))
    }

    /// The adjacency row of `vertex`. Panics if `vertex` is out of range.
    #[inline]
    pub(crate) fn row(&self, vertex: usize) -> &[bool] {
        let n = self.vertex_count;
        &self.adjacency[vertex * n..(vertex + 1) * n]
    }
}
