//! PyO3 bindings for the `meb` enclosing-ball entry points.
//!
//! Notes
//! - Bindings stay thin: points cross the boundary as tuples, results come
//!   back as `(center, radius)` or `None` for an empty input.
//! - Validation of untyped rows lives in `meb::compute_min_enclosing_ball`.

use nalgebra::{Vector2, Vector3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Smallest enclosing circle of 2D points; `None` for an empty list.
#[pyfunction]
#[pyo3(signature = (points, seed=None))]
fn min_enclosing_circle(
    points: Vec<(f64, f64)>,
    seed: Option<u64>,
) -> Option<((f64, f64), f64)> {
    let pts: Vec<Vector2<f64>> = points.into_iter().map(|(x, y)| Vector2::new(x, y)).collect();
    let ball = match seed {
        Some(s) => meb::enclose::min_enclosing_ball_seeded(
            &pts,
            &meb::trivial::Planar,
            s,
            meb::MebCfg::default(),
        ),
        None => meb::min_enclosing_circle(&pts),
    };
    ball.is_valid()
        .then(|| ((ball.center.x, ball.center.y), ball.radius))
}

/// Smallest enclosing sphere of 3D points; `None` for an empty list.
#[pyfunction]
#[pyo3(signature = (points, seed=None))]
fn min_enclosing_sphere(
    points: Vec<(f64, f64, f64)>,
    seed: Option<u64>,
) -> Option<((f64, f64, f64), f64)> {
    let pts: Vec<Vector3<f64>> = points
        .into_iter()
        .map(|(x, y, z)| Vector3::new(x, y, z))
        .collect();
    let ball = match seed {
        Some(s) => meb::enclose::min_enclosing_ball_seeded(
            &pts,
            &meb::trivial::Spatial,
            s,
            meb::MebCfg::default(),
        ),
        None => meb::min_enclosing_sphere(&pts),
    };
    ball.is_valid()
        .then(|| ((ball.center.x, ball.center.y, ball.center.z), ball.radius))
}

/// Runtime-dimension variant over coordinate rows; raises `ValueError` on bad rows.
#[pyfunction]
#[pyo3(signature = (rows, dim, seed=None))]
fn min_enclosing_ball(
    rows: Vec<Vec<f64>>,
    dim: usize,
    seed: Option<u64>,
) -> PyResult<(Vec<f64>, f64, bool)> {
    let ball = meb::compute_min_enclosing_ball(&rows, dim, seed)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok((ball.center, ball.radius, ball.valid))
}

#[pymodule]
fn meb_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(min_enclosing_circle, m)?)?;
    m.add_function(wrap_pyfunction!(min_enclosing_sphere, m)?)?;
    m.add_function(wrap_pyfunction!(min_enclosing_ball, m)?)?;
    Ok(())
}
