//! Test helpers: exhaustive reference solver and containment assertions.

use crate::ball::{distance, Ball, Point};
use crate::cfg::DEGENERATE_EPS;
use crate::trivial::BoundarySolver;
use crate::util::combinations;

/// Smallest circumball over all subsets of size 1..=D+1 that covers `points`.
/// Exponential; only for small reference sets.
pub(crate) fn brute_force<const D: usize, S: BoundarySolver<D>>(
    solver: &S,
    points: &[Point<D>],
) -> Ball<D> {
    let mut best = Ball::invalid();
    for k in 1..=(D + 1).min(points.len()) {
        for subset in combinations(points, k) {
            let cand = solver.circumball(&subset, DEGENERATE_EPS);
            if cand.is_smaller_than(&best) && points.iter().all(|p| cand.contains_eps(p, 1e-12)) {
                best = cand;
            }
        }
    }
    best
}

/// Panics unless `ball` is valid and covers every point with relative slack `eps`.
#[track_caller]
pub(crate) fn assert_encloses<const D: usize>(ball: &Ball<D>, points: &[Point<D>], eps: f64) {
    assert!(ball.is_valid(), "expected a valid ball, got {ball:?}");
    for (i, p) in points.iter().enumerate() {
        let d = distance(p, &ball.center);
        assert!(
            d <= ball.radius * (1.0 + eps),
            "point {i} at distance {d} outside radius {}",
            ball.radius
        );
    }
}
