//! Fruchterman–Reingold with a linear cooling schedule.
//!
//! With ideal edge length `k = c * sqrt(area / n)`, connected vertices attract
//! with `d² / k` and all other pairs repel with `k² / d`. The gravity center is
//! treated as a neighbor of every vertex. The net force is scaled by the
//! current temperature, which drops by `decay` after every pass and is floored
//! at zero. A frozen model leaves positions untouched.
//!
//! Vertices are updated in index order; later vertices see the already moved
//! earlier ones within the same pass.

use log::debug;

use super::force::{counterpart, direction, separation};
use super::method::FruchtermanReingoldParams;
use crate::geometry::Vec2;
use crate::graph::Graph;

/// Run one full pass over all vertices, then cool.
pub(super) fn step(graph: &Graph, params: &mut FruchtermanReingoldParams, positions: &mut [Vec2]) {
    if !params.is_frozen() {
        displace(graph, params, positions);
    }

    let was_frozen = params.is_frozen();
    params.cool();
    if !was_frozen && params.is_frozen() {
        debug!("Fruchterman-Reingold temperature reached zero");
    }
}

fn displace(graph: &Graph, params: &FruchtermanReingoldParams, positions: &mut [Vec2]) {
    let n = graph.vertex_count();
    let k = params.ideal_length(n);

    for vertex in 0..n {
        let row = graph.row(vertex);
        let mut force = Vec2::ZERO;

        for other in 0..n {
            let target = counterpart(positions, vertex, other, params.gravity_center);
            let (delta, distance) = separation(positions[vertex], target);
            let unit = direction(delta, distance);

            if other == vertex || row[other] {
                force += unit * (delta.length_squared() / k);
            } else {
                force += unit * -(k * k / distance);
            }
        }

        positions[vertex] += force * params.temperature;
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::graph::Edge;

    #[test]
    fn test_single_vertex_attracted_to_gravity() {
        let graph = Graph::new(1).unwrap();
        let mut params = FruchtermanReingoldParams::default();
        let mut positions = [Vec2::new(2.0, 0.0)];

        step(&graph, &mut params, &mut positions);

        // k = 0.1 * sqrt(100 / 1) = 1, force = d² / k = 4 toward the origin.
        assert_approx_eq!(f32, positions[0].x, 2.0 - 0.1 * 4.0, epsilon = 1e-6);
        assert_approx_eq!(f32, positions[0].y, 0.0);
        assert_approx_eq!(f32, params.temperature, 0.099, epsilon = 1e-7);
    }

    #[test]
    fn test_unconnected_pair_repels() {
        let graph = Graph::new(2).unwrap();
        let mut params = FruchtermanReingoldParams {
            gravity_center: Vec2::new(0.0, 0.0),
            ..Default::default()
        };
        let mut positions = [Vec2::new(-0.5, 0.0), Vec2::new(0.5, 0.0)];

        step(&graph, &mut params, &mut positions);

        // k = 0.1 * sqrt(50). Gravity pulls vertex 0 by (0.25 / k) and the
        // repulsion pushes it by (k² / 1), which dominates.
        assert!(positions[0].x < -0.5);
        assert!(positions[1].x > 0.5);
    }

    #[test]
    fn test_connected_pair_attracts() {
        let mut graph = Graph::new(2).unwrap();
        graph.add_edge(Edge::undirected(0, 1)).unwrap();
        let mut params = FruchtermanReingoldParams::default();
        let mut positions = [Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0)];

        step(&graph, &mut params, &mut positions);

        assert!(positions[0].x > -2.0);
        assert!(positions[1].x < 2.0);
    }

    #[test]
    fn test_frozen_model_does_not_move() {
        let graph = Graph::new(3).unwrap();
        let mut params = FruchtermanReingoldParams {
            temperature: 0.0,
            decay: 0.0,
            ..Default::default()
        };
        let start = [
            Vec2::new(0.3, 0.1),
            Vec2::new(0.3, 0.1),
            Vec2::new(-4.0, 9.0),
        ];
        let mut positions = start;

        step(&graph, &mut params, &mut positions);

        assert_eq!(positions, start);
        assert_eq!(params.temperature, 0.0);
    }

    #[test]
    fn test_temperature_never_negative() {
        let graph = Graph::new(2).unwrap();
        let mut params = FruchtermanReingoldParams {
            temperature: 0.05,
            decay: 0.03,
            ..Default::default()
        };
        let mut positions = [Vec2::new(0.0, 1.0), Vec2::new(1.0, 0.0)];

        step(&graph, &mut params, &mut positions);
        assert_approx_eq!(f32, params.temperature, 0.02, epsilon = 1e-7);
        step(&graph, &mut params, &mut positions);
        assert_eq!(params.temperature, 0.0);
    }
}
