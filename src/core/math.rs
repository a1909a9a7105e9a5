// Math utilities and helper functions

use std::f64::consts::TAU;

use glam::DVec2;

/// 2D point or delta in world units
///
/// Used for positions, accumulated motion and force accumulators. Mutated in
/// place by [`Vector2::scale`] and [`Vector2::add`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `coeff` in place
    pub fn scale(&mut self, coeff: f64) {
        self.x *= coeff;
        self.y *= coeff;
    }

    /// Add `other` to this vector in place
    pub fn add(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        DVec2::from(*self).length()
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Wrap an angle into `[0, 2π)`
///
/// Stance angles are stored raw; this is applied only where an angle is
/// consumed (drawing, body height, limb roots).
pub fn normalize_angle(theta: f64) -> f64 {
    let wrapped = theta % TAU;
    if wrapped < 0.0 {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Linear interpolation
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
