use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meb::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
use meb::{compute_min_enclosing_ball, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use provenance::{ensure_parent, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "meb-cli")]
#[command(about = "Minimum enclosing balls for point CSVs")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the enclosing ball of a point CSV and write it as JSON
    Ball {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 3)]
        dim: usize,
        /// Fixed shuffle seed (default: thread RNG)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write a reproducible point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 3)]
        dim: usize,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, value_enum, default_value_t = ShapeArg::Cube)]
        shape: ShapeArg,
        /// Half extent (cube), radius (shell/solid) or length (collinear)
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Relative radial jitter for shells
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Cube,
    Shell,
    Solid,
    Collinear,
}

impl ShapeArg {
    fn to_shape(self, scale: f64, jitter: f64) -> CloudShape {
        match self {
            ShapeArg::Cube => CloudShape::Cube { half_extent: scale },
            ShapeArg::Shell => CloudShape::Shell {
                radius: scale,
                jitter,
            },
            ShapeArg::Solid => CloudShape::Solid { radius: scale },
            ShapeArg::Collinear => CloudShape::Collinear { length: scale },
        }
    }
}

/// JSON written by `ball`.
#[derive(Debug, Serialize)]
struct BallReport {
    dim: usize,
    n: usize,
    valid: bool,
    center: Vec<f64>,
    radius: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Ball {
            input,
            dim,
            seed,
            out,
        } => ball(&input, dim, seed, &out, cmd.tag).map(|_| ()),
        Action::Sample {
            dim,
            count,
            shape,
            scale,
            jitter,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.to_shape(scale, jitter),
            };
            sample(dim, cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn ball(
    input: &Path,
    dim: usize,
    seed: Option<u64>,
    out: &Path,
    tag: Option<String>,
) -> Result<BallReport> {
    tracing::info!(input = %input.display(), dim, seed = ?seed, tag = ?tag, "ball");
    let rows = points::read_points(input, dim)?;
    let result = compute_min_enclosing_ball(&rows, dim, seed)
        .with_context(|| format!("computing ball for {}", input.display()))?;
    let report = BallReport {
        dim,
        n: rows.len(),
        valid: result.valid,
        center: result.center,
        radius: result.radius,
    };
    if report.valid {
        tracing::info!(n = report.n, radius = report.radius, center = ?report.center, "ball_done");
    } else {
        tracing::warn!(input = %input.display(), "no points; wrote the empty-ball sentinel");
    }

    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(&report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "dim": dim,
        "seed": seed,
    });
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(report)
}

fn sample(dim: usize, cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(dim, count = cfg.count, shape = ?cfg.shape, seed = tok.seed, index = tok.index, "sample");
    let rows: Vec<Vec<f64>> = match dim {
        2 => rows_of(draw_cloud::<2>(cfg, tok)),
        3 => rows_of(draw_cloud::<3>(cfg, tok)),
        _ => anyhow::bail!("unsupported dimension {dim} (expected 2 or 3)"),
    };
    points::write_points(out, &rows, dim)?;
    let params = serde_json::json!({
        "dim": dim,
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(())
}

fn rows_of<const D: usize>(pts: Vec<Point<D>>) -> Vec<Vec<f64>> {
    pts.iter().map(|p| p.iter().copied().collect()).collect()
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "meb_version": meb::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
