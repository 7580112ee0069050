//! Force models and their default constants.
//!
//! A [`RenderMethod`] is one of a closed set of force laws together with its
//! tunable constants. The Fruchterman–Reingold variant also carries mutable
//! state (its current temperature) that changes as the simulation steps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMethodKindError;
use crate::geometry::Vec2;

/// Number of iterations [`RenderContext::run`](super::RenderContext::run) steps to.
pub const DEFAULT_ITERATIONS: usize = 100;

/// Force model used by [`RenderMethod::default`].
pub const DEFAULT_METHOD_KIND: RenderMethodKind = RenderMethodKind::Eades;

/// Gravity center shared by every default force model.
pub const DEFAULT_GRAVITY_CENTER: Vec2 = Vec2::ZERO;

/// Selector for [`RenderMethod::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMethodKind {
    /// Spring embedder with logarithmic springs.
    Eades,
    /// Fruchterman–Reingold with linear cooling.
    FruchtermanReingold,
}

impl RenderMethodKind {
    /// The name used in configs and by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eades => "eades",
            Self::FruchtermanReingold => "fruchterman_reingold",
        }
    }
}

impl fmt::Display for RenderMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMethodKind {
    type Err = ParseMethodKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eades" | "spring_1" => Ok(Self::Eades),
            "fruchterman_reingold" | "spring_2" => Ok(Self::FruchtermanReingold),
            other => Err(ParseMethodKindError(other.to_owned())),
        }
    }
}

/// Constants for the Eades spring embedder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EadesParams {
    /// Spring strength (default: 2.0).
    pub c1: f32,
    /// Spring rest length (default: 1.0).
    pub c2: f32,
    /// Repulsion strength between unconnected vertices (default: 1.0).
    pub c3: f32,
    /// Scale from net force to displacement (default: 0.1).
    pub c4: f32,
    /// Point every vertex is pulled toward (default: origin).
    pub gravity_center: Vec2,
}

impl Default for EadesParams {
    fn default() -> Self {
        Self {
            c1: 2.0,
            c2: 1.0,
            c3: 1.0,
            c4: 0.1,
            gravity_center: DEFAULT_GRAVITY_CENTER,
        }
    }
}

/// Constants and cooling state for Fruchterman–Reingold.
///
/// Set `temperature = 1.0` and `decay = 0.0` to disable cooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FruchtermanReingoldParams {
    /// Ideal edge length factor (default: 0.1).
    pub c: f32,
    /// Layout area used to derive the ideal edge length (default: 100.0).
    pub area: f32,
    /// Current temperature, the displacement scale of the next step (default: 0.1).
    pub temperature: f32,
    /// Amount the temperature drops after each step (default: 0.1 / 100).
    pub decay: f32,
    /// Point every vertex is pulled toward (default: origin).
    pub gravity_center: Vec2,
}

impl FruchtermanReingoldParams {
    const DEFAULT_TEMPERATURE: f32 = 0.1;

    /// Ideal edge length `k = c * sqrt(area / vertex_count)`.
    #[inline]
    pub fn ideal_length(&self, vertex_count: usize) -> f32 {
        self.c * (self.area / vertex_count as f32).sqrt()
    }

    /// Lower the temperature by one decay step, never below zero.
    #[inline]
    pub fn cool(&mut self) {
        self.temperature = (self.temperature - self.decay).max(0.0);
    }

    /// True once no further step can move a vertex.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.temperature <= 0.0
    }
}

impl Default for FruchtermanReingoldParams {
    fn default() -> Self {
        Self {
            c: 0.1,
            area: 100.0,
            temperature: Self::DEFAULT_TEMPERATURE,
            decay: Self::DEFAULT_TEMPERATURE / DEFAULT_ITERATIONS as f32,
            gravity_center: DEFAULT_GRAVITY_CENTER,
        }
    }
}

/// A force model with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderMethod {
    Eades(EadesParams),
    FruchtermanReingold(FruchtermanReingoldParams),
}

impl RenderMethod {
    /// The default force model of the given kind.
    pub fn create(kind: RenderMethodKind) -> Self {
        match kind {
            RenderMethodKind::Eades => Self::Eades(EadesParams::default()),
            RenderMethodKind::FruchtermanReingold => {
                Self::FruchtermanReingold(FruchtermanReingoldParams::default())
            }
        }
    }

    /// Which force model this is.
    pub fn kind(&self) -> RenderMethodKind {
        match self {
            Self::Eades(_) => RenderMethodKind::Eades,
            Self::FruchtermanReingold(_) => RenderMethodKind::FruchtermanReingold,
        }
    }

    /// The point vertices are attracted to.
    pub fn gravity_center(&self) -> Vec2 {
        match self {
            Self::Eades(params) => params.gravity_center,
            Self::FruchtermanReingold(params) => params.gravity_center,
        }
    }

    /// Move the gravity center.
    pub fn set_gravity_center(&mut self, center: Vec2) {
        match self {
            Self::Eades(params) => params.gravity_center = center,
            Self::FruchtermanReingold(params) => params.gravity_center = center,
        }
    }
}

impl Default for RenderMethod {
    fn default() -> Self {
        Self::create(DEFAULT_METHOD_KIND)
    }
}

impl From<RenderMethodKind> for RenderMethod {
    fn from(kind: RenderMethodKind) -> Self {
        Self::create(kind)
    }
}

impl From<EadesParams> for RenderMethod {
    fn from(params: EadesParams) -> Self {
        Self::Eades(params)
    }
}

impl From<FruchtermanReingoldParams> for RenderMethod {
    fn from(params: FruchtermanReingoldParams) -> Self {
        Self::FruchtermanReingold(params)
    }
}
