//! RenderContext - simulation state for one layout.
//!
//! A context binds a borrowed [`Graph`] to an owned [`RenderMethod`] and a
//! position buffer with one entry per vertex. Stepping and normalization are
//! the only operations that change it.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::method::{DEFAULT_ITERATIONS, RenderMethod};
use super::normalize::{self, DEFAULT_NORMALIZE_MAX, DEFAULT_NORMALIZE_MIN};
use super::{eades, fruchterman_reingold};
use crate::error::LayoutError;
use crate::geometry::Vec2;
use crate::graph::Graph;

/// Position buffer of a [`RenderContext`].
///
/// An owned buffer is dropped with the context; a borrowed one stays with the
/// caller and keeps the final positions after the context is gone.
#[derive(Debug)]
enum Positions<'a> {
    Owned(Vec<Vec2>),
    Borrowed(&'a mut [Vec2]),
}

impl Positions<'_> {
    /// View the positions.
    #[inline]
    fn as_slice(&self) -> &[Vec2] {
        match self {
            Self::Owned(buffer) => buffer.as_slice(),
            Self::Borrowed(buffer) => &buffer[..],
        }
    }

    /// Mutably view the positions.
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Vec2] {
        match self {
            Self::Owned(buffer) => buffer.as_mut_slice(),
            Self::Borrowed(buffer) => &mut buffer[..],
        }
    }

    /// Whether the context owns this buffer.
    #[inline]
    fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }
}

/// Simulation state: graph, force model, positions and iteration counter.
///
/// The graph is only read. Several contexts may share one graph.
#[derive(Debug)]
pub struct RenderContext<'a> {
    graph: &'a Graph,
    method: RenderMethod,
    positions: Positions<'a>,
    iteration: usize,
}

impl<'a> RenderContext<'a> {
    /// Create a context with an owned buffer of random positions.
    ///
    /// Each coordinate is drawn independently and uniformly from `[0, 1)`.
    pub fn new<R>(graph: &'a Graph, method: RenderMethod, rng: &mut R) -> Result<Self, LayoutError>
    where
        R: Rng + ?Sized,
    {
        let buffer = random_positions(graph.vertex_count(), rng)?;
        Ok(Self::build(graph, method, Positions::Owned(buffer)))
    }

    /// Like [`new`](Self::new), seeding a [`StdRng`] so the initial layout
    /// is reproducible.
    pub fn seeded(graph: &'a Graph, method: RenderMethod, seed: u64) -> Result<Self, LayoutError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(graph, method, &mut rng)
    }

    /// Create a context that takes ownership of caller-provided positions.
    pub fn with_positions(
        graph: &'a Graph,
        method: RenderMethod,
        positions: Vec<Vec2>,
    ) -> Result<Self, LayoutError> {
        check_len(graph, positions.len())?;
        Ok(Self::build(graph, method, Positions::Owned(positions)))
    }

    /// Create a context that steps a caller-owned buffer in place.
    pub fn borrowed(
        graph: &'a Graph,
        method: RenderMethod,
        positions: &'a mut [Vec2],
    ) -> Result<Self, LayoutError> {
        check_len(graph, positions.len())?;
        Ok(Self::build(graph, method, Positions::Borrowed(positions)))
    }

    fn build(graph: &'a Graph, method: RenderMethod, positions: Positions<'a>) -> Self {
        debug!(
            "Created render context ({:?}, {} vertices, owned positions: {})",
            method.kind(),
            graph.vertex_count(),
            positions.is_owned()
        );
        Self {
            graph,
            method,
            positions,
            iteration: 0,
        }
    }

    /// Rebuild a context over state kept outside of it between calls.
    pub(crate) fn resume(
        graph: &'a Graph,
        method: RenderMethod,
        positions: &'a mut [Vec2],
        iteration: usize,
    ) -> Self {
        debug_assert_eq!(positions.len(), graph.vertex_count());
        Self {
            graph,
            method,
            positions: Positions::Borrowed(positions),
            iteration,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The graph being laid out.
    #[inline]
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// The force model and its current state.
    #[inline]
    pub fn method(&self) -> &RenderMethod {
        &self.method
    }

    /// Tweak the force model between steps.
    #[inline]
    pub fn method_mut(&mut self) -> &mut RenderMethod {
        &mut self.method
    }

    /// Current positions, indexed by vertex.
    #[inline]
    pub fn positions(&self) -> &[Vec2] {
        self.positions.as_slice()
    }

    /// Mutable positions, e.g. to restore a saved layout.
    #[inline]
    pub fn positions_mut(&mut self) -> &mut [Vec2] {
        self.positions.as_mut_slice()
    }

    /// Whether the position buffer is owned by this context.
    #[inline]
    pub fn owns_positions(&self) -> bool {
        self.positions.is_owned()
    }

    /// Number of steps taken so far.
    #[inline]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Current bounding box of the positions as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        // The buffer always holds at least one position.
        normalize::bounds(self.positions()).unwrap_or_default()
    }

    /// Take the owned positions out of the context.
    ///
    /// Returns `None` for a borrowed buffer; the caller already holds it.
    pub fn into_positions(self) -> Option<Vec<Vec2>> {
        match self.positions {
            Positions::Owned(buffer) => Some(buffer),
            Positions::Borrowed(_) => None,
        }
    }

    /// Take the force model, with its current state, out of the context.
    pub fn into_method(self) -> RenderMethod {
        self.method
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Run one full pass of the force model and advance the iteration counter.
    pub fn step(&mut self) {
        let positions = self.positions.as_mut_slice();
        debug_assert_eq!(positions.len(), self.graph.vertex_count());

        match &mut self.method {
            RenderMethod::Eades(params) => eades::step(self.graph, params, positions),
            RenderMethod::FruchtermanReingold(params) => {
                fruchterman_reingold::step(self.graph, params, positions)
            }
        }

        self.iteration += 1;
        trace!(iteration = self.iteration; "Layout step");
    }

    /// Step exactly `iterations` times.
    pub fn step_for(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.step();
        }
    }

    /// Step until the iteration counter reaches `target`.
    ///
    /// Does nothing if it already has.
    pub fn step_until(&mut self, target: usize) {
        while self.iteration < target {
            self.step();
        }
    }

    /// Step until [`DEFAULT_ITERATIONS`] is reached.
    pub fn run(&mut self) {
        self.step_until(DEFAULT_ITERATIONS);
    }

    /// Rescale positions into `[mins, maxs]`.
    ///
    /// See [`normalize::normalize`] for the mapping and the degenerate case.
    ///
    /// # Panics
    ///
    /// Panics unless `mins.x < maxs.x` and `mins.y < maxs.y`.
    pub fn normalize(&mut self, mins: Vec2, maxs: Vec2) {
        normalize::normalize(self.positions.as_mut_slice(), mins, maxs);
    }

    /// Rescale positions into `[0.05, 0.95]²`, leaving a margin for drawing.
    pub fn normalize_default(&mut self) {
        self.normalize(DEFAULT_NORMALIZE_MIN, DEFAULT_NORMALIZE_MAX);
    }
}

/// `vertex_count` positions with both coordinates drawn uniformly from `[0, 1)`.
pub fn random_positions<R>(vertex_count: usize, rng: &mut R) -> Result<Vec<Vec2>, LayoutError>
where
    R: Rng + ?Sized,
{
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(vertex_count)
        .map_err(|_| LayoutError::Allocation { vertex_count })?;
    buffer.extend((0..vertex_count).map(|_| Vec2::new(rng.random(), rng.random())));
    Ok(buffer)
}

fn check_len(graph: &Graph, actual: usize) -> Result<(), LayoutError> {
    let expected = graph.vertex_count();
    if actual == expected {
        Ok(())
    } else {
        Err(LayoutError::PositionCount { expected, actual })
    }
}
