//! Property tests: containment, minimality, monotonicity, order independence.
//!
//! Run with: cargo test -p meb -- props

use super::*;
use crate::testing::brute_force;
use nalgebra::{Vector2, Vector3};
use proptest::prelude::*;

fn arb_vec2() -> impl Strategy<Value = Vector2<f64>> {
    prop::array::uniform2(-100.0..100.0f64).prop_map(|[x, y]| Vector2::new(x, y))
}

fn arb_vec3() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|[x, y, z]| Vector3::new(x, y, z))
}

/// Coordinates snapped to a coarse grid so duplicates and collinear triples are common.
fn arb_grid2() -> impl Strategy<Value = Vector2<f64>> {
    prop::array::uniform2(-3i32..=3).prop_map(|[x, y]| Vector2::new(x as f64, y as f64))
}

fn arb_grid3() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-2i32..=2)
        .prop_map(|[x, y, z]| Vector3::new(x as f64, y as f64, z as f64))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn circle_contains_every_point(pts in prop::collection::vec(arb_vec2(), 1..200), seed in any::<u64>()) {
        let b = min_enclosing_ball_seeded(&pts, &Planar, seed, MebCfg::default());
        prop_assert!(b.is_valid());
        for p in &pts {
            prop_assert!(b.contains(p));
        }
    }

    #[test]
    fn sphere_contains_every_point(pts in prop::collection::vec(arb_vec3(), 1..200), seed in any::<u64>()) {
        let b = min_enclosing_ball_seeded(&pts, &Spatial, seed, MebCfg::default());
        prop_assert!(b.is_valid());
        for p in &pts {
            prop_assert!(b.contains(p));
        }
    }

    #[test]
    fn circle_is_minimal_on_small_sets(pts in prop::collection::vec(arb_vec2(), 1..=8)) {
        let b = min_enclosing_circle(&pts);
        let exact = brute_force(&Planar, &pts);
        prop_assert!(close(b.radius, exact.radius), "{} vs {}", b.radius, exact.radius);
    }

    #[test]
    fn sphere_is_minimal_on_small_sets(pts in prop::collection::vec(arb_vec3(), 1..=8)) {
        let b = min_enclosing_sphere(&pts);
        let exact = brute_force(&Spatial, &pts);
        prop_assert!(close(b.radius, exact.radius), "{} vs {}", b.radius, exact.radius);
    }

    #[test]
    fn degenerate_grid_sets_are_minimal(
        pts2 in prop::collection::vec(arb_grid2(), 1..=8),
        pts3 in prop::collection::vec(arb_grid3(), 1..=8),
    ) {
        let b2 = min_enclosing_circle(&pts2);
        prop_assert!(close(b2.radius, brute_force(&Planar, &pts2).radius));
        let b3 = min_enclosing_sphere(&pts3);
        prop_assert!(close(b3.radius, brute_force(&Spatial, &pts3).radius));
    }

    #[test]
    fn radius_is_monotone(pts in prop::collection::vec(arb_vec3(), 1..60), extra in arb_vec3()) {
        let before = min_enclosing_sphere(&pts).radius;
        let mut more = pts.clone();
        more.push(extra);
        let after = min_enclosing_sphere(&more).radius;
        prop_assert!(after >= before * (1.0 - 1e-12));
    }

    #[test]
    fn result_is_order_independent(pts in prop::collection::vec(arb_vec2(), 2..100), s1 in any::<u64>(), s2 in any::<u64>()) {
        let a = min_enclosing_ball_seeded(&pts, &Planar, s1, MebCfg::default());
        let b = min_enclosing_ball_seeded(&pts, &Planar, s2, MebCfg::default());
        prop_assert!(close(a.radius, b.radius));
        prop_assert!((a.center - b.center).norm() <= 1e-7 * (1.0 + a.radius));
    }
}
