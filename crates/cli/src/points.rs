//! Point CSV I/O: one row per point, columns `x, y[, z]`.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::provenance::ensure_parent;

pub const AXES: [&str; 3] = ["x", "y", "z"];

/// Read `dim` coordinate columns from a headed CSV. Nulls are rejected.
pub fn read_points(path: &Path, dim: usize) -> Result<Vec<Vec<f64>>> {
    if !(2..=3).contains(&dim) {
        bail!("unsupported dimension {dim} (expected 2 or 3)");
    }
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let mut rows = vec![Vec::with_capacity(dim); df.height()];
    for axis in &AXES[..dim] {
        let col = df
            .column(axis)
            .with_context(|| format!("{} has no column {axis:?}", path.display()))?
            .cast(&DataType::Float64)?;
        for (i, v) in col.f64()?.into_iter().enumerate() {
            let Some(v) = v else {
                bail!("row {i}: missing {axis} value");
            };
            rows[i].push(v);
        }
    }
    tracing::debug!(rows = rows.len(), dim, "read_points");
    Ok(rows)
}

/// Write rows of equal length as a headed CSV.
pub fn write_points(path: &Path, rows: &[Vec<f64>], dim: usize) -> Result<()> {
    if !(2..=3).contains(&dim) {
        bail!("unsupported dimension {dim} (expected 2 or 3)");
    }
    let columns: Vec<Series> = AXES[..dim]
        .iter()
        .enumerate()
        .map(|(k, axis)| {
            let values: Vec<f64> = rows.iter().map(|r| r[k]).collect();
            Series::new((*axis).into(), values)
        })
        .collect();
    let mut df = DataFrame::new(columns)?;
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
