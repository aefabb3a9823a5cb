//! Circumcircles in R^2.

use nalgebra::Vector2;

use super::{is_flat, small_ball, BoundarySolver};
use crate::ball::{Ball, Vec2};

/// Closed-form trivial balls for the plane.
#[derive(Clone, Copy, Debug, Default)]
pub struct Planar;

impl BoundarySolver<2> for Planar {
    const NAME: &'static str = "planar";

    fn circumball(&self, boundary: &[Vec2], eps_degenerate: f64) -> Ball<2> {
        if let Some(ball) = small_ball(boundary) {
            return ball;
        }
        match *boundary {
            [a, b, c] => circumcircle(a, b, c, eps_degenerate),
            _ => Ball::invalid(),
        }
    }
}

/// Circle through `a, b, c`; invalid when the three are (nearly) collinear.
///
/// With `u = b - a`, `v = c - a` the center offset `o` solves
/// `2 o·u = |u|^2`, `2 o·v = |v|^2`, whose determinant is `cross(u, v)`.
pub(crate) fn circumcircle(a: Vec2, b: Vec2, c: Vec2, eps: f64) -> Ball<2> {
    let u = b - a;
    let v = c - a;
    let cross = u.x * v.y - u.y * v.x;
    let uu = u.norm_squared();
    let vv = v.norm_squared();
    if is_flat(cross * cross, uu * vv, eps) {
        return Ball::invalid();
    }
    let d = 2.0 * cross;
    let offset = Vector2::new((v.y * uu - u.y * vv) / d, (u.x * vv - v.x * uu) / d);
    Ball::fit(a + offset, &[a, b, c])
}

