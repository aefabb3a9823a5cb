//! Entry points: copy, shuffle once, run the driver, verify.
//!
//! - The caller's slice is never mutated; each call owns a shuffled copy.
//! - The copy is divided by a power of two near its largest coordinate, so the
//!   driver works on magnitudes around 1 whatever the input scale; the ball is
//!   scaled back afterwards. Power-of-two scaling is exact.
//! - Randomness comes from `thread_rng`, a seed, or a caller-supplied `Rng`.
//! - The returned ball is checked against every input point; a point outside
//!   the tolerance (float drift through the frame stack) widens the radius.
//!
//! Calls share no state, so independent threads may call concurrently.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::ball::{distance, Ball, Point, Vec2, Vec3};
use crate::cfg::MebCfg;
use crate::trivial::{BoundarySolver, Planar, Spatial};
use crate::welzl::{welzl, DriverStats};

/// Minimum enclosing ball with default tolerances and the thread RNG.
pub fn min_enclosing_ball<const D: usize, S: BoundarySolver<D>>(
    points: &[Point<D>],
    solver: &S,
) -> Ball<D> {
    min_enclosing_ball_with_cfg(points, solver, MebCfg::default())
}

/// Thread RNG with caller-chosen tolerances.
pub fn min_enclosing_ball_with_cfg<const D: usize, S: BoundarySolver<D>>(
    points: &[Point<D>],
    solver: &S,
    cfg: MebCfg,
) -> Ball<D> {
    min_enclosing_ball_with_rng(points, solver, &mut rand::thread_rng(), cfg)
}

/// Reproducible variant: the shuffle is drawn from `StdRng::seed_from_u64(seed)`.
pub fn min_enclosing_ball_seeded<const D: usize, S: BoundarySolver<D>>(
    points: &[Point<D>],
    solver: &S,
    seed: u64,
    cfg: MebCfg,
) -> Ball<D> {
    let mut rng = StdRng::seed_from_u64(seed);
    min_enclosing_ball_with_rng(points, solver, &mut rng, cfg)
}

/// Shuffle drawn from the caller's `rng`.
pub fn min_enclosing_ball_with_rng<const D: usize, S: BoundarySolver<D>, R: Rng + ?Sized>(
    points: &[Point<D>],
    solver: &S,
    rng: &mut R,
    cfg: MebCfg,
) -> Ball<D> {
    min_enclosing_ball_traced(points, solver, rng, cfg).0
}

/// Same as `min_enclosing_ball_with_rng`, also returning the driver counters.
pub fn min_enclosing_ball_traced<const D: usize, S: BoundarySolver<D>, R: Rng + ?Sized>(
    points: &[Point<D>],
    solver: &S,
    rng: &mut R,
    cfg: MebCfg,
) -> (Ball<D>, DriverStats) {
    match points {
        [] => return (Ball::invalid(), DriverStats::default()),
        [p] => return (Ball::point(*p), DriverStats::default()),
        _ => {}
    }
    let scale = pow2_scale(points);
    let mut order: Vec<Point<D>> = points.iter().map(|p| p / scale).collect();
    order.shuffle(rng);
    let (unit, stats) = welzl(&order, solver, cfg);
    let unit = cover_all(unit, &order, cfg);
    let ball = if unit.is_valid() {
        Ball::new(unit.center * scale, unit.radius * scale)
    } else {
        unit
    };
    tracing::debug!(
        solver = S::NAME,
        dim = D,
        n = points.len(),
        scale,
        radius = ball.radius,
        frames = stats.frames_pushed,
        max_depth = stats.max_depth,
        solves = stats.trivial_solves,
        "min_enclosing_ball"
    );
    (ball, stats)
}

/// Smallest enclosing circle of planar points.
pub fn min_enclosing_circle(points: &[Vec2]) -> Ball<2> {
    min_enclosing_ball(points, &Planar)
}

pub fn min_enclosing_circle_with_cfg(points: &[Vec2], cfg: MebCfg) -> Ball<2> {
    min_enclosing_ball_with_cfg(points, &Planar, cfg)
}

/// Smallest enclosing sphere of points in 3-space.
pub fn min_enclosing_sphere(points: &[Vec3]) -> Ball<3> {
    min_enclosing_ball(points, &Spatial)
}

pub fn min_enclosing_sphere_with_cfg(points: &[Vec3], cfg: MebCfg) -> Ball<3> {
    min_enclosing_ball_with_cfg(points, &Spatial, cfg)
}

/// Power of two at or above the largest coordinate magnitude, clamped to the
/// normal exponent range. `1.0` when every coordinate is zero.
fn pow2_scale<const D: usize>(points: &[Point<D>]) -> f64 {
    let amax = points.iter().map(|p| p.amax()).fold(0.0, f64::max);
    if amax == 0.0 || !amax.is_finite() {
        return 1.0;
    }
    let exp = (amax.log2().ceil() as i32).clamp(-1022, 1023);
    f64::from_bits(((exp + 1023) as u64) << 52)
}

fn cover_all<const D: usize>(ball: Ball<D>, points: &[Point<D>], cfg: MebCfg) -> Ball<D> {
    if !ball.is_valid() {
        return ball;
    }
    let far = points
        .iter()
        .map(|p| distance(p, &ball.center))
        .fold(0.0, f64::max);
    if far > ball.radius * (1.0 + cfg.eps_contain) {
        tracing::debug!(radius = ball.radius, far, "widening ball to cover drifted point");
        return Ball::new(ball.center, far);
    }
    ball
}

#[cfg(test)]
mod props;
