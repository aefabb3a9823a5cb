//! Ball result type and its tolerant containment predicate.
//!
//! - `Ball<D>`: closed ball `{ x : |x - center| <= radius }` in R^D.
//! - An empty input has no enclosing ball; that case is the sentinel
//!   `Ball::invalid()` with `radius = -1`.
//!
//! Invariants
//! - `is_valid() <=> radius >= 0`.
//! - Balls built from defining points (`Ball::fit`) take the largest distance
//!   to those points as radius, so each defining point passes `contains`.
//! - Distances go through `distance`, which stays finite for coordinates near
//!   the ends of the f64 range where `norm()` would overflow or flush to zero.

use nalgebra::SVector;

use crate::cfg::CONTAIN_EPS;

/// A point in R^D (always f64; widen f32 input with `Point::cast`).
pub type Point<const D: usize> = SVector<f64, D>;
pub type Vec2 = Point<2>;
pub type Vec3 = Point<3>;

/// Closed ball in R^D. `radius < 0` marks the empty-input sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball<const D: usize> {
    pub center: Point<D>,
    pub radius: f64,
}

pub type Circle2 = Ball<2>;
pub type Sphere3 = Ball<3>;

// Below this the squared components may be subnormal and `norm()` loses digits.
const NORM_SAFE_MIN: f64 = 1e-140;

/// Euclidean distance `|a - b|` without intermediate overflow or underflow.
#[inline]
pub fn distance<const D: usize>(a: &Point<D>, b: &Point<D>) -> f64 {
    let v = a - b;
    let n = v.norm();
    if n.is_nan() || (n.is_finite() && n >= NORM_SAFE_MIN) {
        return n;
    }
    let s = v.amax();
    if s == 0.0 || !s.is_finite() {
        return s;
    }
    s * (v / s).norm()
}

impl<const D: usize> Ball<D> {
    #[inline]
    pub fn new(center: Point<D>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Sentinel for "no ball" (empty input, degenerate boundary set).
    #[inline]
    pub fn invalid() -> Self {
        Self {
            center: Point::zeros(),
            radius: -1.0,
        }
    }

    /// Zero-radius ball at `p`.
    #[inline]
    pub fn point(p: Point<D>) -> Self {
        Self {
            center: p,
            radius: 0.0,
        }
    }

    /// Ball centered at `center` reaching the farthest of `points`.
    pub fn fit(center: Point<D>, points: &[Point<D>]) -> Self {
        let radius = points
            .iter()
            .map(|p| distance(p, &center))
            .fold(0.0, f64::max);
        if !(radius.is_finite() && center.iter().all(|x| x.is_finite())) {
            return Self::invalid();
        }
        Self { center, radius }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.radius >= 0.0
    }

    /// Containment with the default multiplicative slack (`CONTAIN_EPS`).
    #[inline]
    pub fn contains(&self, p: &Point<D>) -> bool {
        self.contains_eps(p, CONTAIN_EPS)
    }

    /// `|p - center| <= radius * (1 + eps)`. Never true for an invalid ball.
    #[inline]
    pub fn contains_eps(&self, p: &Point<D>, eps: f64) -> bool {
        self.is_valid() && distance(p, &self.center) <= self.radius * (1.0 + eps)
    }

    /// Orders valid balls before invalid ones, then by radius.
    #[inline]
    pub(crate) fn is_smaller_than(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => self.radius < other.radius,
            (true, false) => true,
            _ => false,
        }
    }
}
