//! Gray Layout - force-directed graph layout
//!
//! This crate computes 2D positions for the vertices of an arbitrary graph by
//! iterating a force-directed simulation. It is usable as a plain Rust library
//! and is also compiled to WebAssembly with a JavaScript-friendly facade.
//!
//! # Architecture
//!
//! - `graph`: Fixed-size graph with a dense adjacency relation
//! - `geometry`: The `Vec2` type shared by positions and forces
//! - `layout`: Force models (Eades, Fruchterman–Reingold), the simulation
//!   context and normalization
//! - `error`: Recoverable construction errors
//!
//! # Example
//!
//! ```
//! use gray_layout::{Edge, Graph, RenderContext, RenderMethod};
//!
//! let mut graph = Graph::new(3)?;
//! graph.add_edges([Edge::undirected(0, 1), Edge::undirected(1, 2)])?;
//!
//! let mut ctx = RenderContext::seeded(&graph, RenderMethod::default(), 42)?;
//! ctx.run();
//! ctx.normalize_default();
//!
//! for p in ctx.positions() {
//!     assert!((0.05..=0.95).contains(&p.x));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod geometry;
pub mod graph;
pub mod layout;

pub use error::{EdgeBatchError, GraphError, LayoutError, ParseMethodKindError};
pub use geometry::Vec2;
pub use graph::{Edge, Graph};
pub use layout::{
    DEFAULT_ITERATIONS, EadesParams, FruchtermanReingoldParams, RenderContext, RenderMethod,
    RenderMethodKind,
};

/// Initialize the WASM module.
///
/// Installs the panic hook and routes `log` output to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second initialization keeps the first logger.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Main entry point for JavaScript callers.
///
/// Owns the graph, the force model and the positions, and rebuilds a
/// [`RenderContext`] over them for every stepping call.
#[wasm_bindgen]
pub struct GrayLayoutWasm {
    graph: Graph,
    method: RenderMethod,
    positions: Vec<Vec2>,
    iteration: usize,
}

#[wasm_bindgen]
impl GrayLayoutWasm {
    /// Create a layout for `vertex_count` vertices with random positions
    /// derived from `seed`.
    #[wasm_bindgen(constructor)]
    pub fn new(vertex_count: usize, seed: u64) -> Result<GrayLayoutWasm, JsError> {
        let graph = Graph::new(vertex_count)?;
        let positions = layout::random_positions(vertex_count, &mut seeded_rng(seed))?;
        Ok(Self {
            graph,
            method: RenderMethod::default(),
            positions,
            iteration: 0,
        })
    }

    /// Create a layout seeded from `Math.random()`.
    #[wasm_bindgen(js_name = withRandomSeed)]
    pub fn with_random_seed(vertex_count: usize) -> Result<GrayLayoutWasm, JsError> {
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        log::info!("Seed: {seed}");
        Self::new(vertex_count, seed)
    }

    // =========================================================================
    // Graph Operations
    // =========================================================================

    /// Number of vertices.
    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Add an edge. Returns false if an endpoint is out of range.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, start: usize, end: usize, directed: bool) -> bool {
        self.graph
            .add_edge(Edge {
                start,
                end,
                directed,
            })
            .is_ok()
    }

    /// Add edges from pairs [start0, end0, start1, end1, ...].
    ///
    /// Stops at the first rejected pair and returns how many were added.
    #[wasm_bindgen(js_name = addEdgesFromPairs)]
    pub fn add_edges_from_pairs(&mut self, pairs: &[u32], directed: bool) -> u32 {
        let edges = pairs.chunks_exact(2).map(|pair| Edge {
            start: pair[0] as usize,
            end: pair[1] as usize,
            directed,
        });
        match self.graph.add_edges(edges) {
            Ok(()) => (pairs.len() / 2) as u32,
            Err(err) => err.index as u32,
        }
    }

    /// Check for an edge from `start` to `end`.
    #[wasm_bindgen(js_name = hasEdge)]
    pub fn has_edge(&self, start: usize, end: usize) -> bool {
        self.graph.has_edge(start, end)
    }

    /// Every adjacency entry as pairs [start0, end0, start1, end1, ...].
    #[wasm_bindgen(js_name = edgesFlat)]
    pub fn edges_flat(&self) -> Vec<u32> {
        self.graph
            .edges()
            .flat_map(|(start, end)| [start as u32, end as u32])
            .collect()
    }

    // =========================================================================
    // Force Model
    // =========================================================================

    /// Replace the force model with the defaults of `kind`
    /// (`"eades"` or `"fruchterman_reingold"`).
    #[wasm_bindgen(js_name = setMethod)]
    pub fn set_method(&mut self, kind: &str) -> Result<(), JsError> {
        self.method = RenderMethod::create(kind.parse()?);
        Ok(())
    }

    /// Replace the force model from a config object such as
    /// `{ kind: "eades", c4: 0.2 }`. Missing fields use the defaults.
    #[wasm_bindgen(js_name = setMethodConfig)]
    pub fn set_method_config(&mut self, config: JsValue) -> Result<(), JsError> {
        self.method = serde_wasm_bindgen::from_value(config)?;
        Ok(())
    }

    /// The current force model, including the cooling state.
    #[wasm_bindgen(js_name = methodConfig)]
    pub fn method_config(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.method)?)
    }

    /// Name of the current force model.
    #[wasm_bindgen(js_name = methodKind)]
    pub fn method_kind(&self) -> String {
        self.method.kind().to_string()
    }

    /// Current Fruchterman–Reingold temperature, if that model is active.
    pub fn temperature(&self) -> Option<f32> {
        match &self.method {
            RenderMethod::FruchtermanReingold(params) => Some(params.temperature),
            RenderMethod::Eades(_) => None,
        }
    }

    // =========================================================================
    // Simulation
    // =========================================================================

    /// Number of steps taken so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Run one step.
    pub fn step(&mut self) {
        self.with_context(|ctx| ctx.step());
    }

    /// Run exactly `iterations` steps.
    #[wasm_bindgen(js_name = stepFor)]
    pub fn step_for(&mut self, iterations: usize) {
        self.with_context(|ctx| ctx.step_for(iterations));
    }

    /// Step until `target` steps have been taken in total.
    #[wasm_bindgen(js_name = stepUntil)]
    pub fn step_until(&mut self, target: usize) {
        self.with_context(|ctx| ctx.step_until(target));
    }

    /// Step until the default iteration count is reached.
    pub fn run(&mut self) {
        self.with_context(|ctx| ctx.run());
    }

    /// Rescale positions into the given rectangle.
    ///
    /// Throws (via panic) unless `min_x < max_x` and `min_y < max_y`.
    pub fn normalize(&mut self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) {
        layout::normalize::normalize(
            &mut self.positions,
            Vec2::new(min_x, min_y),
            Vec2::new(max_x, max_y),
        );
    }

    /// Rescale positions into `[0.05, 0.95]²`.
    #[wasm_bindgen(js_name = normalizeDefault)]
    pub fn normalize_default(&mut self) {
        layout::normalize::normalize(
            &mut self.positions,
            layout::normalize::DEFAULT_NORMALIZE_MIN,
            layout::normalize::DEFAULT_NORMALIZE_MAX,
        );
    }

    // =========================================================================
    // Position Buffer Access
    // =========================================================================

    /// Positions as a Float32Array [x0, y0, x1, y1, ...].
    pub fn positions(&self) -> Float32Array {
        Float32Array::from(&self.positions_flat()[..])
    }

    /// Overwrite positions from [x0, y0, x1, y1, ...].
    ///
    /// Returns false, leaving positions untouched, unless the array holds
    /// exactly two values per vertex.
    #[wasm_bindgen(js_name = setPositions)]
    pub fn set_positions(&mut self, flat: &[f32]) -> bool {
        if flat.len() != self.positions.len() * 2 {
            return false;
        }
        for (p, xy) in self.positions.iter_mut().zip(flat.chunks_exact(2)) {
            *p = Vec2::new(xy[0], xy[1]);
        }
        true
    }

    /// Bounding box as [min_x, min_y, max_x, max_y].
    #[wasm_bindgen(js_name = getBounds)]
    pub fn get_bounds(&self) -> Vec<f32> {
        let (min, max) = layout::normalize::bounds(&self.positions).unwrap_or_default();
        vec![min.x, min.y, max.x, max.y]
    }
}

impl GrayLayoutWasm {
    /// Positions interleaved as [x0, y0, x1, y1, ...].
    pub fn positions_flat(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    fn with_context<T>(&mut self, f: impl FnOnce(&mut RenderContext<'_>) -> T) -> T {
        let mut ctx = RenderContext::resume(
            &self.graph,
            self.method,
            &mut self.positions,
            self.iteration,
        );
        let result = f(&mut ctx);
        self.iteration = ctx.iteration();
        self.method = ctx.into_method();
        result
    }
}

fn seeded_rng(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod integration_tests {
    use float_cmp::assert_approx_eq;
    use petgraph::stable_graph::StableUnGraph;

    use super::*;

    /// Binary-tree-like graph with a few cross links, 15 vertices.
    #[rustfmt::skip]
    const SAMPLE_EDGES: [(usize, usize); 17] = [
        (0, 1), (0, 2), (0, 14), (1, 3),
        (1, 4), (2, 5), (2, 6), (3, 7),
        (4, 7), (5, 8), (6, 7), (6, 9),
        (7, 10), (8, 11), (9, 12), (10, 13),
        (11, 14),
    ];

    fn sample_graph() -> Graph {
        let mut graph = Graph::new(15).unwrap();
        graph
            .add_edges(SAMPLE_EDGES.iter().map(|&pair| Edge::from(pair)))
            .unwrap();
        graph
    }

    /// Step in batches and normalize between them, the way a render loop does.
    #[test]
    fn test_render_loop_pipeline() {
        let graph = sample_graph();
        let mut ctx = RenderContext::seeded(&graph, RenderMethod::default(), 1234).unwrap();
        let target = 200;

        while ctx.iteration() < target {
            ctx.step_for(10);
            ctx.normalize_default();

            for p in ctx.positions() {
                assert!((0.05..=0.95).contains(&p.x), "x out of range: {p:?}");
                assert!((0.05..=0.95).contains(&p.y), "y out of range: {p:?}");
            }
        }
        assert_eq!(ctx.iteration(), target);
    }

    #[test]
    fn test_both_models_produce_finite_layouts() {
        let graph = sample_graph();
        for kind in [RenderMethodKind::Eades, RenderMethodKind::FruchtermanReingold] {
            let mut ctx = RenderContext::seeded(&graph, RenderMethod::create(kind), 99).unwrap();
            ctx.run();
            assert_eq!(ctx.iteration(), DEFAULT_ITERATIONS);
            assert!(
                ctx.positions().iter().all(|p| p.x.is_finite() && p.y.is_finite()),
                "{kind} produced non-finite positions"
            );
        }
    }

    #[test]
    fn test_connected_vertices_end_closer_than_average() {
        let graph = sample_graph();
        let mut ctx = RenderContext::seeded(
            &graph,
            RenderMethod::create(RenderMethodKind::FruchtermanReingold),
            7,
        )
        .unwrap();
        ctx.run();

        let p = ctx.positions();
        let dist = |a: usize, b: usize| (p[a] - p[b]).length();

        let edge_mean: f32 =
            SAMPLE_EDGES.iter().map(|&(a, b)| dist(a, b)).sum::<f32>() / SAMPLE_EDGES.len() as f32;
        let mut all = Vec::new();
        for a in 0..p.len() {
            for b in (a + 1)..p.len() {
                all.push(dist(a, b));
            }
        }
        let all_mean = all.iter().sum::<f32>() / all.len() as f32;

        assert!(edge_mean < all_mean, "edges {edge_mean} vs all pairs {all_mean}");
    }

    #[test]
    fn test_layout_from_petgraph() {
        let mut source = StableUnGraph::<&str, ()>::default();
        let a = source.add_node("a");
        let b = source.add_node("b");
        let c = source.add_node("c");
        source.add_edge(a, b, ());
        source.add_edge(b, c, ());

        let graph = Graph::from_petgraph(&source).unwrap();
        let mut ctx = RenderContext::seeded(&graph, RenderMethod::default(), 3).unwrap();
        ctx.step_for(25);
        ctx.normalize(Vec2::ZERO, Vec2::ONE);

        let (min, max) = ctx.bounds();
        assert_approx_eq!(f32, min.x, 0.0);
        assert_approx_eq!(f32, max.x, 1.0);
    }

    #[test]
    fn test_wasm_facade_matches_context() {
        let mut facade = GrayLayoutWasm::new(15, 55).ok().unwrap();
        let flat: Vec<u32> = SAMPLE_EDGES
            .iter()
            .flat_map(|&(a, b)| [a as u32, b as u32])
            .collect();
        assert_eq!(facade.add_edges_from_pairs(&flat, false), 17);

        let graph = sample_graph();
        let mut ctx = RenderContext::seeded(&graph, RenderMethod::default(), 55).unwrap();
        let expected_start: Vec<f32> = ctx.positions().iter().flat_map(|p| [p.x, p.y]).collect();
        assert_eq!(facade.positions_flat(), expected_start);

        facade.step_for(3);
        facade.step();
        ctx.step_for(4);

        assert_eq!(facade.iteration(), 4);
        let expected: Vec<f32> = ctx.positions().iter().flat_map(|p| [p.x, p.y]).collect();
        assert_eq!(facade.positions_flat(), expected);
    }

    #[test]
    fn test_wasm_facade_keeps_cooling_state() {
        let mut facade = GrayLayoutWasm::new(4, 1).ok().unwrap();
        assert_eq!(facade.temperature(), None);
        assert!(facade.set_method("fruchterman_reingold").is_ok());
        assert_eq!(facade.method_kind(), "fruchterman_reingold");

        facade.step_for(10);
        let temperature = facade.temperature().unwrap();
        assert_approx_eq!(f32, temperature, 0.09, epsilon = 1e-6);

        facade.step_until(5);
        assert_eq!(facade.iteration(), 10);
        assert_eq!(facade.temperature(), Some(temperature));

        facade.run();
        assert_eq!(facade.iteration(), DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_wasm_facade_edges_and_positions() {
        let mut facade = GrayLayoutWasm::new(3, 0).ok().unwrap();
        assert!(facade.add_edge(0, 1, false));
        assert!(facade.add_edge(2, 0, true));
        assert!(!facade.add_edge(0, 3, false));
        assert!(facade.has_edge(1, 0));
        assert!(!facade.has_edge(0, 2));
        assert_eq!(facade.edges_flat(), vec![0, 1, 1, 0, 2, 0]);

        assert_eq!(facade.add_edges_from_pairs(&[1, 2, 9, 9, 0, 2], false), 1);
        assert!(facade.has_edge(2, 1));
        assert!(!facade.has_edge(0, 2));

        assert!(!facade.set_positions(&[0.0, 1.0]));
        assert!(facade.set_positions(&[0.0, 0.0, 4.0, 2.0, 2.0, 1.0]));
        assert_eq!(facade.get_bounds(), vec![0.0, 0.0, 4.0, 2.0]);

        facade.normalize_default();
        let flat = facade.positions_flat();
        assert_eq!(&flat[..4], &[0.05, 0.05, 0.95, 0.95]);
        assert_approx_eq!(f32, flat[4], 0.5, epsilon = 1e-6);
        assert_approx_eq!(f32, flat[5], 0.5, epsilon = 1e-6);
    }
}
