//! Minimal 2D vector math used by the force models.
//!
//! Positions, forces and gravity centers are all `Vec2`. Only the handful of
//! operations the simulation needs are provided.

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point or vector with `f32` components.
///
/// # Examples
///
/// ```
/// # use gray_layout::Vec2;
/// let a = Vec2::new(1.0, 2.0);
/// let b = Vec2::new(3.0, -1.0);
///
/// let sum = a + b;
/// assert_eq!(sum, Vec2::new(4.0, 1.0));
/// assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// `(1, 1)`.
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Vec2) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        self.scale(rhs)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f32, f32) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// Linearly remap `v` from `[min1, max1]` into `[min2, max2]`.
#[inline]
pub(crate) fn lerp(v: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    min2 + ((v - min1) / (max1 - min1)) * (max2 - min2)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_vec2_constants() {
        assert_eq!(Vec2::ZERO, Vec2::new(0.0, 0.0));
        assert_eq!(Vec2::ONE, Vec2::new(1.0, 1.0));
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);

        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, Vec2::new(2.0, 6.0));
        assert_eq!(a * 0.5, Vec2::new(1.5, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_vec2_length() {
        let v = Vec2::new(3.0, 4.0);
        assert_approx_eq!(f32, v.length_squared(), 25.0);
        assert_approx_eq!(f32, v.length(), 5.0);
        assert_approx_eq!(f32, Vec2::ZERO.length(), 0.0);
    }

    #[test]
    fn test_vec2_min_max_midpoint() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a.min(b), Vec2::new(1.0, -1.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
        assert_eq!(a.midpoint(b), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_vec2_tuple_conversion() {
        let v: Vec2 = (1.5, -2.5).into();
        let (x, y): (f32, f32) = v.into();
        assert_approx_eq!(f32, x, 1.5);
        assert_approx_eq!(f32, y, -2.5);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_approx_eq!(f32, lerp(0.0, 0.0, 10.0, 1.0, 2.0), 1.0);
        assert_approx_eq!(f32, lerp(10.0, 0.0, 10.0, 1.0, 2.0), 2.0);
        assert_approx_eq!(f32, lerp(5.0, 0.0, 10.0, 1.0, 2.0), 1.5);
    }
}
