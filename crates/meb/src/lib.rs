//! Minimum enclosing balls (smallest circle / sphere around a point set).
//!
//! Layout
//! - `ball`: result type `Ball<D>` and the tolerant containment test.
//! - `trivial`: exact balls through 0..=D+1 boundary points, one strategy per
//!   dimension (`Planar`, `Spatial`) plus the generic `Affine` reference.
//! - `welzl`: randomized incremental driver on an explicit frame stack.
//! - `enclose`: entry points (copy, shuffle once, drive, verify).
//! - `api`: curated re-exports and the runtime-dimension call.
//! - `cloud`: reproducible point clouds for benches, tests and the CLI.
//!
//! API Policy
//! - Bounding-volume callers (camera framing, cell fitting) only need
//!   `min_enclosing_circle` / `min_enclosing_sphere` and `Ball`.
//! - Everything is pure and allocation-local; calls may run concurrently.

pub mod api;
pub mod ball;
pub mod cfg;
pub mod cloud;
pub mod enclose;
pub mod error;
pub mod trivial;
pub mod welzl;

mod util;

#[cfg(test)]
mod testing;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{compute_min_enclosing_ball, DynBall};
pub use ball::{Ball, Point, Vec2, Vec3};
pub use cfg::MebCfg;
pub use enclose::{min_enclosing_ball, min_enclosing_circle, min_enclosing_sphere};
pub use error::MebError;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{compute_min_enclosing_ball, DynBall};
    pub use crate::ball::{Ball, Circle2, Point, Sphere3, Vec2, Vec3};
    pub use crate::cfg::MebCfg;
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::enclose::{
        min_enclosing_ball, min_enclosing_ball_seeded, min_enclosing_ball_with_cfg,
        min_enclosing_ball_with_rng, min_enclosing_circle, min_enclosing_circle_with_cfg,
        min_enclosing_sphere, min_enclosing_sphere_with_cfg,
    };
    pub use crate::trivial::{Affine, BoundarySolver, Planar, Spatial};
}
