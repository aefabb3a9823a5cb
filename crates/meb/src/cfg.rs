//! Tolerances for ball containment and degeneracy detection.
//!
//! Policy
//! - Defaults are fixed constants so call sites never juggle epsilons.
//! - `MebCfg` bundles them for the `_with_cfg`, `_seeded` and `_with_rng`
//!   entry points; most callers use `MebCfg::default()`.

/// Multiplicative slack of the containment test `|p - c| <= r (1 + eps)`.
pub const CONTAIN_EPS: f64 = 1e-14;
/// Relative sine threshold below which a boundary set counts as flat
/// (collinear in 2D, coplanar in 3D).
pub const DEGENERATE_EPS: f64 = 1e-10;

/// Tolerance configuration for the enclosing-ball driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MebCfg {
    pub eps_contain: f64,
    pub eps_degenerate: f64,
}

impl Default for MebCfg {
    fn default() -> Self {
        Self {
            eps_contain: CONTAIN_EPS,
            eps_degenerate: DEGENERATE_EPS,
        }
    }
}
