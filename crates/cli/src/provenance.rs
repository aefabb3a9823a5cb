//! Provenance sidecars: `<stem>.provenance.json` next to every CLI output.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters and optional run label recorded beside an artifact.
pub struct Payload {
    pub params: Value,
    pub tag: Option<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self { params, tag: None }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let target = provenance_path(artifact);
    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "meb_version": meb::VERSION,
        "callsite": format!("{}:{}", callsite.file(), callsite.line()),
        "tag": payload.tag,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()],
    });
    ensure_parent(&target)?;
    fs::write(&target, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", target.display()))?;
    Ok(target)
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display())),
        _ => Ok(()),
    }
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let build_time = option_env!("GIT_COMMIT").map(str::to_string);
    let runtime = std::env::var("GIT_COMMIT").ok();
    build_time
        .into_iter()
        .chain(runtime)
        .find(|rev| !rev.is_empty())
        .or_else(git_head)
        .unwrap_or_else(|| "unknown".to_string())
}

fn git_head() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
