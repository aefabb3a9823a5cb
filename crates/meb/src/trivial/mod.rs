//! Exact balls through small boundary sets (0..=D+1 points).
//!
//! Purpose
//! - Give the incremental driver one closed-form answer per boundary set:
//!   the smallest ball with every boundary point on its surface.
//! - Keep the driver dimension-agnostic; only the circumball formulas vary
//!   per dimension (`BoundarySolver` strategy).
//!
//! Cases
//! - Shared: `|B|=0` invalid, `|B|=1` point ball, `|B|=2` diameter ball.
//! - `Planar` (R^2): `|B|=3` circumcircle from the 2x2 cross-product system.
//! - `Spatial` (R^3): `|B|=3` circumcircle in the plane of the triangle,
//!   `|B|=4` circumsphere from the 3x3 (translated 4x4) determinant.
//! - `Affine` (any R^D): Gram-system solve; reference for the closed forms.
//!
//! Degenerate sets (collinear/coplanar/duplicates) yield `Ball::invalid()`.
//! `enclose_boundary` turns such a set into the smallest valid ball over its
//! subsets, so the driver never selects an invalid candidate.

mod affine;
mod planar;
mod spatial;

pub use affine::Affine;
pub use planar::Planar;
pub use spatial::Spatial;

use crate::ball::{Ball, Point};
use crate::cfg::MebCfg;
use crate::util::combinations;

/// Strategy for the exact circumball of an affinely independent point set.
pub trait BoundarySolver<const D: usize> {
    /// Short label for logs and bench ids.
    const NAME: &'static str;

    /// Smallest ball with all of `boundary` on its surface, or
    /// `Ball::invalid()` when the set is empty, degenerate, or larger than D+1.
    fn circumball(&self, boundary: &[Point<D>], eps_degenerate: f64) -> Ball<D>;
}

/// Shared cases `|B| <= 2`. `None` for larger sets.
#[inline]
pub fn small_ball<const D: usize>(boundary: &[Point<D>]) -> Option<Ball<D>> {
    match boundary {
        [] => Some(Ball::invalid()),
        [p] => Some(Ball::point(*p)),
        [p, q] => Some(Ball::fit((p + q) * 0.5, boundary)),
        _ => None,
    }
}

/// Circumball of `boundary`, or, if that is degenerate, the smallest ball over
/// its proper subsets that still covers every boundary point.
///
/// Candidates are widened (`Ball::fit`) to reach all boundary points, so the
/// result is valid for any non-empty set, including duplicates and flat sets.
pub fn enclose_boundary<const D: usize, S: BoundarySolver<D>>(
    solver: &S,
    boundary: &[Point<D>],
    cfg: MebCfg,
) -> Ball<D> {
    let direct = solver.circumball(boundary, cfg.eps_degenerate);
    if direct.is_valid() || boundary.len() <= 2 {
        return direct;
    }
    let mut best = Ball::invalid();
    for k in 2..boundary.len() {
        for subset in combinations(boundary, k) {
            let cand = solver.circumball(&subset, cfg.eps_degenerate);
            if !cand.is_valid() {
                continue;
            }
            let widened = Ball::fit(cand.center, boundary);
            if widened.is_smaller_than(&best) {
                best = widened;
            }
        }
    }
    best
}

/// Relative flatness test shared by the solvers: `det(G) <= eps^2 * prod(G_ii)`
/// for the Gram matrix `G` of the edge vectors (Hadamard ratio).
#[inline]
pub(crate) fn is_flat(det_gram: f64, diag_product: f64, eps: f64) -> bool {
    !(det_gram.is_finite() && diag_product.is_finite()) || det_gram <= eps * eps * diag_product
}

#[cfg(test)]
mod tests;
