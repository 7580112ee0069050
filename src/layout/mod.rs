//! Force-directed layout engine.
//!
//! A [`RenderContext`] drives one of the force models in [`RenderMethod`]
//! over a borrowed [`Graph`](crate::Graph), mutating a position buffer in
//! place one pass at a time. [`normalize`] rescales the result for drawing.

mod context;
mod eades;
mod force;
mod fruchterman_reingold;
mod method;
pub mod normalize;

pub use context::{RenderContext, random_positions};
pub use force::DISTANCE_EPSILON;
pub use method::{
    DEFAULT_GRAVITY_CENTER, DEFAULT_ITERATIONS, DEFAULT_METHOD_KIND, EadesParams,
    FruchtermanReingoldParams, RenderMethod, RenderMethodKind,
};
