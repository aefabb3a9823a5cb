//! Dimension-generic circumballs via the Gram system of edge vectors.
//!
//! For `B = {p0, ..., pk}` and `v_i = p_i - p0`, the center of the smallest
//! ball with all of `B` on its surface is `p0 + Σ λ_j v_j` where
//! `G λ = ½ diag(G)` and `G_ij = v_i·v_j`. Works for any `k <= D`.

use nalgebra::{DMatrix, DVector};

use super::{is_flat, small_ball, BoundarySolver};
use crate::ball::{Ball, Point};

/// Gram-system trivial balls for any dimension.
#[derive(Clone, Copy, Debug, Default)]
pub struct Affine;

impl<const D: usize> BoundarySolver<D> for Affine {
    const NAME: &'static str = "affine";

    fn circumball(&self, boundary: &[Point<D>], eps_degenerate: f64) -> Ball<D> {
        if let Some(ball) = small_ball(boundary) {
            return ball;
        }
        if boundary.len() > D + 1 {
            return Ball::invalid();
        }
        let p0 = boundary[0];
        let edges: Vec<Point<D>> = boundary[1..].iter().map(|p| p - p0).collect();
        let k = edges.len();
        let gram = DMatrix::from_fn(k, k, |i, j| edges[i].dot(&edges[j]));
        let diag: f64 = (0..k).map(|i| gram[(i, i)]).product();
        if is_flat(gram.determinant(), diag, eps_degenerate) {
            return Ball::invalid();
        }
        let rhs = DVector::from_fn(k, |i, _| 0.5 * gram[(i, i)]);
        let Some(lambda) = gram.lu().solve(&rhs) else {
            return Ball::invalid();
        };
        let offset = edges
            .iter()
            .zip(lambda.iter())
            .fold(Point::<D>::zeros(), |acc, (e, l)| acc + e * *l);
        Ball::fit(p0 + offset, boundary)
    }
}
