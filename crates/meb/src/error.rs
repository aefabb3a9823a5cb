//! Input errors for the runtime-dimension entry point.
//!
//! The typed entry points are infallible: every well-typed point slice,
//! including empty, duplicate, collinear and coplanar sets, has a defined
//! result. Only untyped coordinate rows can be malformed.

use std::fmt;

/// Malformed input to `compute_min_enclosing_ball`.
#[derive(Clone, Debug, PartialEq)]
pub enum MebError {
    /// Only R^2 and R^3 are supported.
    UnsupportedDim { dim: usize },
    /// A point row has the wrong number of coordinates.
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for MebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MebError::UnsupportedDim { dim } => {
                write!(f, "unsupported dimension {dim} (expected 2 or 3)")
            }
            MebError::DimensionMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "point {index} has {found} coordinates, expected {expected}"
            ),
            MebError::NonFinite { index } => {
                write!(f, "point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for MebError {}
