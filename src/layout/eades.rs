//! Eades spring embedder.
//!
//! Connected vertices are joined by logarithmic springs of rest length `c2`:
//! the pull along an edge is `c1 * ln(d / c2)`, which turns into a push when
//! the vertices are closer than `c2`. Unconnected vertices repel each other
//! with `c3 / d²`. The gravity center is treated as a neighbor of every vertex.
//!
//! The summed force, scaled by `c4`, is added straight to the position. Vertices
//! are updated in index order and later vertices see the already moved earlier
//! ones within the same pass.

use super::force::{counterpart, direction, separation};
use super::method::EadesParams;
use crate::geometry::Vec2;
use crate::graph::Graph;

/// Run one full pass over all vertices.
pub(super) fn step(graph: &Graph, params: &EadesParams, positions: &mut [Vec2]) {
    let n = graph.vertex_count();

    for vertex in 0..n {
        let row = graph.row(vertex);
        let mut force = Vec2::ZERO;

        for other in 0..n {
            let target = counterpart(positions, vertex, other, params.gravity_center);
            let (delta, distance) = separation(positions[vertex], target);
            let unit = direction(delta, distance);

            if other == vertex || row[other] {
                force += unit * (params.c1 * (distance / params.c2).ln());
            } else {
                force += unit * -(params.c3 / (distance * distance));
            }
        }

        positions[vertex] += force * params.c4;
    }
}
