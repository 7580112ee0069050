//! Rescaling positions into a target rectangle.

use log::debug;

use crate::geometry::{Vec2, lerp};

/// Lower-left corner used by [`RenderContext::normalize_default`](super::RenderContext::normalize_default).
pub const DEFAULT_NORMALIZE_MIN: Vec2 = Vec2::new(0.05, 0.05);

/// Upper-right corner used by [`RenderContext::normalize_default`](super::RenderContext::normalize_default).
pub const DEFAULT_NORMALIZE_MAX: Vec2 = Vec2::new(0.95, 0.95);

/// Component-wise bounding box of `positions` as `(min, max)`.
///
/// Returns `None` for an empty slice.
pub fn bounds(positions: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let (first, rest) = positions.split_first()?;
    Some(
        rest.iter()
            .fold((*first, *first), |(min, max), &p| (min.min(p), max.max(p))),
    )
}

/// Linearly remap every position from its current bounding box into
/// `[mins, maxs]`, per axis.
///
/// The minimum on an axis lands exactly on `mins`, the maximum on `maxs`.
/// When every position shares the same coordinate on an axis, that axis
/// collapses to the midpoint of the target range.
///
/// # Panics
///
/// Panics unless `mins.x < maxs.x` and `mins.y < maxs.y`.
pub fn normalize(positions: &mut [Vec2], mins: Vec2, maxs: Vec2) {
    assert!(
        mins.x < maxs.x && mins.y < maxs.y,
        "normalize target {mins:?}..{maxs:?} is empty or inverted"
    );

    let Some((min, max)) = bounds(positions) else {
        return;
    };

    let remap_x = axis_remap(min.x, max.x, mins.x, maxs.x);
    let remap_y = axis_remap(min.y, max.y, mins.y, maxs.y);
    if remap_x.is_none() || remap_y.is_none() {
        debug!(
            flat_x = remap_x.is_none(), flat_y = remap_y.is_none();
            "Normalizing degenerate layout onto the target midpoint"
        );
    }

    let center = mins.midpoint(maxs);
    for p in positions.iter_mut() {
        p.x = remap_x.as_ref().map_or(center.x, |r| r(p.x));
        p.y = remap_y.as_ref().map_or(center.y, |r| r(p.y));
    }
}

/// Remapping for one axis, or `None` if the source range is a single value.
fn axis_remap(min: f32, max: f32, to_min: f32, to_max: f32) -> Option<impl Fn(f32) -> f32> {
    if max > min {
        // Pin the extremes so rounding cannot push them outside the target.
        Some(move |v: f32| {
            if v <= min {
                to_min
            } else if v >= max {
                to_max
            } else {
                lerp(v, min, max, to_min, to_max).clamp(to_min, to_max)
            }
        })
    } else {
        None
    }
}
