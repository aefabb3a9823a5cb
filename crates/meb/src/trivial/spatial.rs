//! Circumcircles and circumspheres in R^3.
//!
//! Three boundary points only occur as an intermediate boundary set inside
//! the four-point search; the ball is the circumcircle of the triangle, i.e.
//! its center lies in the triangle's plane.

use super::{is_flat, small_ball, BoundarySolver};
use crate::ball::{Ball, Vec3};

/// Closed-form trivial balls for 3-space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spatial;

impl BoundarySolver<3> for Spatial {
    const NAME: &'static str = "spatial";

    fn circumball(&self, boundary: &[Vec3], eps_degenerate: f64) -> Ball<3> {
        if let Some(ball) = small_ball(boundary) {
            return ball;
        }
        match *boundary {
            [a, b, c] => triangle_circumball(a, b, c, eps_degenerate),
            [a, b, c, d] => tetra_circumsphere(a, b, c, d, eps_degenerate),
            _ => Ball::invalid(),
        }
    }
}

/// Smallest sphere through a triangle: center `a + (|u|^2 (v×w) + |v|^2 (w×u)) / 2|w|^2`
/// with `u = b - a`, `v = c - a`, `w = u×v`.
pub(crate) fn triangle_circumball(a: Vec3, b: Vec3, c: Vec3, eps: f64) -> Ball<3> {
    let u = b - a;
    let v = c - a;
    let w = u.cross(&v);
    let ww = w.norm_squared();
    if is_flat(ww, u.norm_squared() * v.norm_squared(), eps) {
        return Ball::invalid();
    }
    let offset = (v.cross(&w) * u.norm_squared() + w.cross(&u) * v.norm_squared()) / (2.0 * ww);
    Ball::fit(a + offset, &[a, b, c])
}

/// Circumsphere of a tetrahedron. After translating `a` to the origin the
/// 4x4 lifting determinant reduces to the triple product `det = u·(v×w)`.
pub(crate) fn tetra_circumsphere(a: Vec3, b: Vec3, c: Vec3, d: Vec3, eps: f64) -> Ball<3> {
    let u = b - a;
    let v = c - a;
    let w = d - a;
    let det = u.dot(&v.cross(&w));
    let diag = u.norm_squared() * v.norm_squared() * w.norm_squared();
    if is_flat(det * det, diag, eps) {
        return Ball::invalid();
    }
    let offset = (v.cross(&w) * u.norm_squared()
        + w.cross(&u) * v.norm_squared()
        + u.cross(&v) * w.norm_squared())
        / (2.0 * det);
    Ball::fit(a + offset, &[a, b, c, d])
}
