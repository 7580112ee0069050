//! Shared pieces of the per-pair force computation.

use crate::geometry::Vec2;

/// Stand-in for a distance of exactly zero, so it can be used as a divisor.
pub const DISTANCE_EPSILON: f32 = 1e-12;

/// Offset from `from` to `to` and its length.
///
/// A zero length is replaced by [`DISTANCE_EPSILON`]. The offset is then zero
/// too, so any force along it vanishes instead of becoming NaN.
#[inline]
pub(super) fn separation(from: Vec2, to: Vec2) -> (Vec2, f32) {
    let delta = to - from;
    let distance = delta.length();
    let distance = if distance == 0.0 {
        DISTANCE_EPSILON
    } else {
        distance
    };
    (delta, distance)
}

/// `delta / distance` component-wise.
#[inline]
pub(super) fn direction(delta: Vec2, distance: f32) -> Vec2 {
    Vec2::new(delta.x / distance, delta.y / distance)
}

/// The point vertex `vertex` interacts with when paired with `other`.
///
/// Pairing a vertex with itself yields the gravity center, which acts as an
/// implicit edge to every vertex.
#[inline]
pub(super) fn counterpart(positions: &[Vec2], vertex: usize, other: usize, gravity: Vec2) -> Vec2 {
    if other == vertex {
        gravity
    } else {
        positions[other]
    }
}
