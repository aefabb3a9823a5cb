//! Bounding-sphere timing probe for camera framing.
//!
//! Purpose
//! - Give a reproducible, code-backed data point for "how long does framing a
//!   100k-vertex scene take?" and how deep the driver's frame stack gets.
//! - Show the numbers a framing caller needs: center, radius, and the camera
//!   distance that fits the sphere inside a vertical field of view.
//!
//! Why this shape
//! - One `Shell` cloud stands in for a scanned surface: the enclosing sphere is
//!   decided by many near-boundary points, the hard case for the driver.

use std::time::Instant;

use meb::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use meb::enclose::min_enclosing_ball_traced;
use meb::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let cfg = CloudCfg {
        count: 100_000,
        shape: CloudShape::Shell {
            radius: 5.0,
            jitter: 0.02,
        },
    };
    let pts: Vec<Vec3> = draw_cloud(cfg, ReplayToken { seed: 2024, index: 0 });

    let mut rng = StdRng::seed_from_u64(7);
    let start = Instant::now();
    let (ball, stats) = min_enclosing_ball_traced(&pts, &Spatial, &mut rng, MebCfg::default());
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    assert!(ball.is_valid(), "non-empty input must give a valid ball");

    let fov_y = 60f64.to_radians();
    let distance = ball.radius / (0.5 * fov_y).sin();

    println!(
        "n={} center=({:.6}, {:.6}, {:.6}) radius={:.9}",
        pts.len(),
        ball.center.x,
        ball.center.y,
        ball.center.z,
        ball.radius
    );
    println!(
        "frames={} max_depth={} solves={}",
        stats.frames_pushed, stats.max_depth, stats.trivial_solves
    );
    println!("camera_distance_fov60={distance:.6}");
    println!("sphere_time_ms={elapsed:.3}");
}
