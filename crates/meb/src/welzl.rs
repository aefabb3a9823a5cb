//! Randomized incremental construction (Welzl) over an explicit frame stack.
//!
//! Model
//! - A frame scans a prefix `points[..end]` with a fixed boundary set `R`;
//!   its ball starts as the exact ball through `R` and is the minimum ball of
//!   `points[..next] ∪ R` (with `R` on the surface) while scanning.
//! - A point outside the current ball must lie on the surface of the next
//!   optimum: it is pushed onto `R` and a child frame rescans the prefix
//!   before it. When the child finishes, its ball replaces the parent's and
//!   the point is popped from `R`.
//! - A boundary set of size `D + 1` (or an empty prefix) fixes the ball, so
//!   that child is resolved in place without a frame.
//!
//! The caller shuffles the input once; the frames walk that fixed order.
//! At most `D + 1` frames are live (root included).

use crate::ball::{Ball, Point};
use crate::cfg::MebCfg;
use crate::trivial::{enclose_boundary, BoundarySolver};

/// Work counters for one driver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverStats {
    /// Child frames opened (root excluded).
    pub frames_pushed: usize,
    /// Deepest frame stack seen, root included.
    pub max_depth: usize,
    /// Calls into the boundary solver.
    pub trivial_solves: usize,
}

struct Frame<const D: usize> {
    end: usize,
    next: usize,
    ball: Ball<D>,
}

/// Minimum enclosing ball of `points` in the given (already randomized) order.
///
/// Pre: none; empty input yields `Ball::invalid()`.
/// Post: a valid ball containing every point up to the driver's tolerance.
pub fn welzl<const D: usize, S: BoundarySolver<D>>(
    points: &[Point<D>],
    solver: &S,
    cfg: MebCfg,
) -> (Ball<D>, DriverStats) {
    let mut stats = DriverStats::default();
    if points.is_empty() {
        return (Ball::invalid(), stats);
    }
    let mut boundary: Vec<Point<D>> = Vec::with_capacity(D + 1);
    // `cur` is the frame being scanned; `parents` holds the suspended ones.
    let mut parents: Vec<Frame<D>> = Vec::with_capacity(D);
    let mut cur = Frame {
        end: points.len(),
        next: 0,
        ball: Ball::invalid(),
    };
    stats.max_depth = 1;

    loop {
        if cur.next < cur.end {
            let p = points[cur.next];
            if cur.ball.contains_eps(&p, cfg.eps_contain) {
                cur.next += 1;
                continue;
            }
            boundary.push(p);
            let end = cur.next;
            let seeded = enclose_boundary(solver, &boundary, cfg);
            stats.trivial_solves += 1;
            if end == 0 || boundary.len() == D + 1 {
                boundary.pop();
                cur.ball = seeded;
                cur.next += 1;
            } else {
                let child = Frame {
                    end,
                    next: 0,
                    ball: seeded,
                };
                parents.push(std::mem::replace(&mut cur, child));
                stats.frames_pushed += 1;
                stats.max_depth = stats.max_depth.max(parents.len() + 1);
            }
            continue;
        }

        let Some(mut parent) = parents.pop() else {
            return (cur.ball, stats);
        };
        boundary.pop();
        parent.ball = cur.ball;
        parent.next += 1;
        cur = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_encloses, brute_force};
    use crate::trivial::{Planar, Spatial};
    use nalgebra::{vector, Vector2, Vector3};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn empty_and_single() {
        let (b, stats) = welzl::<2, _>(&[], &Planar, MebCfg::default());
        assert!(!b.is_valid());
        assert_eq!(stats, DriverStats::default());

        let p = vector![0.5, -0.5];
        let (b, _) = welzl(&[p], &Planar, MebCfg::default());
        assert_eq!(b, Ball::point(p));
    }

    #[test]
    fn sorted_order_still_exact_2d() {
        // Points along a parabola, sorted by x: the worst case for unshuffled input.
        let pts: Vec<Vector2<f64>> = (0..200)
            .map(|i| {
                let x = i as f64 / 20.0;
                vector![x, x * x]
            })
            .collect();
        let (b, stats) = welzl(&pts, &Planar, MebCfg::default());
        assert_encloses(&b, &pts, 1e-12);
        assert!(stats.max_depth <= 3);
    }

    #[test]
    fn depth_bounded_by_dimension_3d() {
        let mut rng = StdRng::seed_from_u64(11);
        let pts: Vec<Vector3<f64>> = (0..500)
            .map(|_| {
                vector![
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0)
                ]
            })
            .collect();
        let (b, stats) = welzl(&pts, &Spatial, MebCfg::default());
        assert_encloses(&b, &pts, 1e-12);
        assert!(stats.max_depth <= 4);
        assert!(stats.trivial_solves >= 1);
    }

    #[test]
    fn matches_brute_force_small_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        for n in 2..=8 {
            for _ in 0..25 {
                let pts: Vec<Vector2<f64>> = (0..n)
                    .map(|_| vector![rng.gen_range(-3.0..3.0), rng.gen_range(-3.0..3.0)])
                    .collect();
                let (b, _) = welzl(&pts, &Planar, MebCfg::default());
                let exact = brute_force(&Planar, &pts);
                assert!((b.radius - exact.radius).abs() <= 1e-9 * (1.0 + exact.radius));
            }
        }
    }

    #[test]
    fn nested_frames_unwind_to_root() {
        // Sorted points on a circle force child frames on nearly every step.
        let pts: Vec<Vector2<f64>> = (0..64)
            .map(|i| {
                let t = i as f64 * std::f64::consts::TAU / 64.0;
                vector![t.cos(), t.sin()]
            })
            .collect();
        let (b, stats) = welzl(&pts, &Planar, MebCfg::default());
        assert!(stats.frames_pushed > 0);
        assert!(stats.max_depth >= 2 && stats.max_depth <= 3);
        assert_encloses(&b, &pts, 1e-12);
        assert!((b.radius - 1.0).abs() < 1e-12);
    }

    #[test]
    fn collinear_collapses_to_extreme_pair() {
        let pts = [vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 3.0]];
        let (b, _) = welzl(&pts, &Planar, MebCfg::default());
        assert!((b.center - vector![1.5, 1.5]).norm() < 1e-12);
        assert!((b.radius - 1.5 * 2f64.sqrt()).abs() < 1e-12);
    }
}
