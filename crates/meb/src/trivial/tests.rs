use super::*;
use crate::cfg::{MebCfg, DEGENERATE_EPS};
use nalgebra::{vector, Vector2, Vector3};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn rand2(rng: &mut StdRng) -> Vector2<f64> {
    Vector2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0))
}

fn rand3(rng: &mut StdRng) -> Vector3<f64> {
    Vector3::new(
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
        rng.gen_range(-5.0..5.0),
    )
}

fn on_surface<const D: usize>(ball: &Ball<D>, pts: &[Point<D>]) -> bool {
    pts.iter()
        .all(|p| ((p - ball.center).norm() - ball.radius).abs() <= 1e-9 * (1.0 + ball.radius))
}

#[test]
fn shared_small_cases() {
    let s = Planar;
    assert!(!s.circumball(&[], DEGENERATE_EPS).is_valid());
    let p = vector![1.0, 2.0];
    assert_eq!(s.circumball(&[p], DEGENERATE_EPS), Ball::point(p));
    let b = s.circumball(&[vector![0.0, 0.0], vector![2.0, 0.0]], DEGENERATE_EPS);
    assert!((b.center - vector![1.0, 0.0]).norm() < 1e-15);
    assert!((b.radius - 1.0).abs() < 1e-15);
}

#[test]
fn planar_circumcircle_right_isoceles() {
    // All three points lie at distance 2 from (2, 0).
    let pts = [vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 2.0]];
    let b = Planar.circumball(&pts, DEGENERATE_EPS);
    assert!(b.is_valid());
    assert!((b.center - vector![2.0, 0.0]).norm() < 1e-12);
    assert!((b.radius - 2.0).abs() < 1e-12);
}

#[test]
fn planar_collinear_and_duplicate_are_invalid() {
    let collinear = [vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 3.0]];
    assert!(!Planar.circumball(&collinear, DEGENERATE_EPS).is_valid());
    let dup = [vector![1.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert!(!Planar.circumball(&dup, DEGENERATE_EPS).is_valid());
    let too_many = [vector![0.0, 0.0]; 4];
    assert!(!Planar.circumball(&too_many, DEGENERATE_EPS).is_valid());
}

#[test]
fn spatial_tetra_regular() {
    let pts = [
        vector![1.0, 1.0, 1.0],
        vector![1.0, -1.0, -1.0],
        vector![-1.0, 1.0, -1.0],
        vector![-1.0, -1.0, 1.0],
    ];
    let b = Spatial.circumball(&pts, DEGENERATE_EPS);
    assert!(b.is_valid());
    assert!(b.center.norm() < 1e-12);
    assert!((b.radius - 3f64.sqrt()).abs() < 1e-12);
}

#[test]
fn spatial_triangle_center_in_plane() {
    let pts = [
        vector![0.0, 0.0, 1.0],
        vector![4.0, 0.0, 1.0],
        vector![2.0, 2.0, 1.0],
    ];
    let b = Spatial.circumball(&pts, DEGENERATE_EPS);
    assert!((b.center - vector![2.0, 0.0, 1.0]).norm() < 1e-12);
    assert!((b.radius - 2.0).abs() < 1e-12);
}

#[test]
fn spatial_coplanar_tetra_is_invalid() {
    let pts = [
        vector![0.0, 0.0, 0.0],
        vector![1.0, 0.0, 0.0],
        vector![0.0, 1.0, 0.0],
        vector![1.0, 1.0, 0.0],
    ];
    assert!(!Spatial.circumball(&pts, DEGENERATE_EPS).is_valid());
    let line = [
        vector![0.0, 0.0, 0.0],
        vector![1.0, 1.0, 1.0],
        vector![2.0, 2.0, 2.0],
    ];
    assert!(!Spatial.circumball(&line, DEGENERATE_EPS).is_valid());
}

#[test]
fn closed_forms_agree_with_gram_solver_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let tri = [rand2(&mut rng), rand2(&mut rng), rand2(&mut rng)];
        let a = Planar.circumball(&tri, DEGENERATE_EPS);
        let g = Affine.circumball(&tri, DEGENERATE_EPS);
        assert_eq!(a.is_valid(), g.is_valid());
        if a.is_valid() {
            assert!(on_surface(&a, &tri));
            assert!((a.center - g.center).norm() <= 1e-7 * (1.0 + a.radius));
        }

        let tet = [
            rand3(&mut rng),
            rand3(&mut rng),
            rand3(&mut rng),
            rand3(&mut rng),
        ];
        for k in 3..=4 {
            let s = Spatial.circumball(&tet[..k], DEGENERATE_EPS);
            let g = Affine.circumball(&tet[..k], DEGENERATE_EPS);
            assert_eq!(s.is_valid(), g.is_valid());
            if s.is_valid() {
                assert!(on_surface(&s, &tet[..k]));
                assert!((s.center - g.center).norm() <= 1e-7 * (1.0 + s.radius));
            }
        }
    }
}

#[test]
fn affine_handles_four_dimensions() {
    let pts: Vec<Point<4>> = (0..4)
        .map(|i| {
            let mut p = Point::<4>::zeros();
            p[i] = 1.0;
            p
        })
        .chain(std::iter::once(Point::<4>::zeros()))
        .collect();
    let b = Affine.circumball(&pts, DEGENERATE_EPS);
    assert!(b.is_valid());
    assert!((b.center - Point::<4>::repeat(0.5)).norm() < 1e-12);
    assert!(on_surface(&b, &pts));
}

#[test]
fn enclose_collinear_collapses_to_extreme_pair() {
    let pts = [vector![1.0, 1.0], vector![0.0, 0.0], vector![3.0, 3.0]];
    let b = enclose_boundary(&Planar, &pts, MebCfg::default());
    assert!(b.is_valid());
    assert!((b.center - vector![1.5, 1.5]).norm() < 1e-12);
    assert!((b.radius - 1.5 * 2f64.sqrt()).abs() < 1e-12);
}

#[test]
fn enclose_coplanar_collapses_to_circle() {
    // Unit square in the z = 2 plane: its circumcircle covers all four.
    let pts = [
        vector![0.0, 0.0, 2.0],
        vector![1.0, 0.0, 2.0],
        vector![0.0, 1.0, 2.0],
        vector![1.0, 1.0, 2.0],
    ];
    let b = enclose_boundary(&Spatial, &pts, MebCfg::default());
    assert!(b.is_valid());
    assert!((b.center - vector![0.5, 0.5, 2.0]).norm() < 1e-12);
    assert!((b.radius - 0.5f64.sqrt()).abs() < 1e-12);
    for p in &pts {
        assert!(b.contains(p));
    }
}

#[test]
fn enclose_all_duplicates() {
    let p = vector![3.0, -1.0, 0.5];
    let b = enclose_boundary(&Spatial, &[p, p, p, p], MebCfg::default());
    assert!(b.is_valid());
    assert_eq!(b.radius, 0.0);
    assert_eq!(b.center, p);
}
