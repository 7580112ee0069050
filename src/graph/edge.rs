//! Edge insertion requests.
//!
//! Edges are not stored as values; the graph keeps a dense adjacency relation.
//! An [`Edge`] only describes what to insert:
//! - The start and end vertex indices
//! - Whether the reverse direction is inserted too

use std::fmt;

use serde::{Deserialize, Serialize};

/// A request to connect two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    pub directed: bool,
}

impl Edge {
    /// An edge that sets both `start -> end` and `end -> start`.
    #[inline]
    pub const fn undirected(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            directed: false,
        }
    }

    /// An edge that only sets `start -> end`.
    #[inline]
    pub const fn directed(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            directed: true,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "Edge({} {} {})", self.start, arrow, self.end)
    }
}

impl From<(usize, usize)> for Edge {
    /// Tuples become undirected edges.
    #[inline]
    fn from((start, end): (usize, usize)) -> Self {
        Self::undirected(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_constructors() {
        let u = Edge::undirected(1, 2);
        assert_eq!(u.start, 1);
        assert_eq!(u.end, 2);
        assert!(!u.directed);

        let d = Edge::directed(3, 0);
        assert_eq!(d.start, 3);
        assert_eq!(d.end, 0);
        assert!(d.directed);
    }

    #[test]
    fn test_edge_display() {
        assert_eq!(format!("{}", Edge::undirected(0, 1)), "Edge(0 -- 1)");
        assert_eq!(format!("{}", Edge::directed(2, 5)), "Edge(2 -> 5)");
    }

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge = (4, 7).into();
        assert_eq!(edge, Edge::undirected(4, 7));
    }
}
