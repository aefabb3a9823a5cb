//! Reproducible point clouds in R^D (replay tokens + shape presets).
//!
//! Purpose
//! - Feed benches, tests and `meb-cli sample` with deterministic inputs whose
//!   enclosing ball is known or easy to bound.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th cloud of a run can be regenerated on its own.
//!
//! Shapes
//! - `Cube`: uniform in `[-h, h]^D`.
//! - `Shell`: directions uniform on the sphere, radius `r (1 - u)`,
//!   `u ∈ [0, jitter]`; the enclosing radius is at most `r`.
//! - `Solid`: uniform in the ball of radius `r` (rejection from the cube).
//! - `Collinear`: points on a random line through the origin; a degenerate
//!   stress input whose ball is the extreme pair's diameter ball.

use nalgebra::SVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ball::Point;

/// Cloud shape presets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Cube { half_extent: f64 },
    Shell { radius: f64, jitter: f64 },
    Solid { radius: f64 },
    Collinear { length: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: CloudShape::Cube { half_extent: 1.0 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points of the given shape.
pub fn draw_cloud<const D: usize>(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point<D>> {
    let mut rng = tok.to_std_rng();
    match cfg.shape {
        CloudShape::Cube { half_extent } => {
            let h = half_extent.abs();
            (0..cfg.count)
                .map(|_| SVector::from_fn(|_, _| rng.gen_range(-1.0..=1.0) * h))
                .collect()
        }
        CloudShape::Shell { radius, jitter } => {
            let j = jitter.clamp(0.0, 1.0);
            (0..cfg.count)
                .map(|_| {
                    let dir = unit_direction::<D, _>(&mut rng);
                    let u = rng.gen::<f64>() * j;
                    dir * (radius.abs() * (1.0 - u))
                })
                .collect()
        }
        CloudShape::Solid { radius } => (0..cfg.count)
            .map(|_| loop {
                let p: Point<D> = SVector::from_fn(|_, _| rng.gen_range(-1.0..=1.0));
                if p.norm_squared() <= 1.0 {
                    break p * radius.abs();
                }
            })
            .collect(),
        CloudShape::Collinear { length } => {
            let dir = unit_direction::<D, _>(&mut rng);
            let half = 0.5 * length.abs();
            (0..cfg.count)
                .map(|_| dir * rng.gen_range(-half..=half))
                .collect()
        }
    }
}

/// Uniform direction on the unit sphere (normalized cube rejection).
fn unit_direction<const D: usize, R: Rng>(rng: &mut R) -> Point<D> {
    loop {
        let v: Point<D> = SVector::from_fn(|_, _| rng.gen_range(-1.0..=1.0));
        let n2 = v.norm_squared();
        if n2 > 1e-12 && n2 <= 1.0 {
            return v / n2.sqrt();
        }
    }
}
