//! Curated entry surface plus the runtime-dimension call.
//!
//! Typed callers use `min_enclosing_circle` / `min_enclosing_sphere` (or the
//! generic `min_enclosing_ball` with a `BoundarySolver`). Callers holding
//! untyped coordinate rows (CSV readers, Python bindings) use
//! `compute_min_enclosing_ball`, which validates rows and picks the solver.

pub use crate::ball::{distance, Ball, Circle2, Point, Sphere3, Vec2, Vec3};
pub use crate::cfg::MebCfg;
pub use crate::enclose::{
    min_enclosing_ball, min_enclosing_ball_seeded, min_enclosing_ball_traced,
    min_enclosing_ball_with_cfg, min_enclosing_ball_with_rng, min_enclosing_circle,
    min_enclosing_circle_with_cfg, min_enclosing_sphere, min_enclosing_sphere_with_cfg,
};
pub use crate::error::MebError;
pub use crate::trivial::{BoundarySolver, Planar, Spatial};

/// Dimension-erased ball. `valid == false` (and `radius < 0`) for empty input.
#[derive(Clone, Debug, PartialEq)]
pub struct DynBall {
    pub center: Vec<f64>,
    pub radius: f64,
    pub valid: bool,
}

impl<const D: usize> From<Ball<D>> for DynBall {
    fn from(b: Ball<D>) -> Self {
        Self {
            center: b.center.iter().copied().collect(),
            radius: b.radius,
            valid: b.is_valid(),
        }
    }
}

/// Minimum enclosing ball of coordinate rows in R^`dim` (`dim` ∈ {2, 3}).
///
/// Pre: every row has exactly `dim` finite coordinates.
/// Post: `Ok` with the ball (invalid for empty input); `Err` names the first bad row.
/// With `seed = None` the shuffle uses the thread RNG.
pub fn compute_min_enclosing_ball<P: AsRef<[f64]>>(
    points: &[P],
    dim: usize,
    seed: Option<u64>,
) -> Result<DynBall, MebError> {
    match dim {
        2 => solve_rows::<2, _, _>(points, &Planar, seed),
        3 => solve_rows::<3, _, _>(points, &Spatial, seed),
        _ => Err(MebError::UnsupportedDim { dim }),
    }
}

fn solve_rows<const D: usize, P: AsRef<[f64]>, S: BoundarySolver<D>>(
    rows: &[P],
    solver: &S,
    seed: Option<u64>,
) -> Result<DynBall, MebError> {
    let pts = rows_to_points::<D, _>(rows)?;
    let ball = match seed {
        Some(s) => min_enclosing_ball_seeded(&pts, solver, s, MebCfg::default()),
        None => min_enclosing_ball(&pts, solver),
    };
    Ok(ball.into())
}

fn rows_to_points<const D: usize, P: AsRef<[f64]>>(rows: &[P]) -> Result<Vec<Point<D>>, MebError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let row = row.as_ref();
            if row.len() != D {
                return Err(MebError::DimensionMismatch {
                    index,
                    expected: D,
                    found: row.len(),
                });
            }
            if !row.iter().all(|x| x.is_finite()) {
                return Err(MebError::NonFinite { index });
            }
            Ok(Point::<D>::from_column_slice(row))
        })
        .collect()
}
