//! Artifact writing with JSON metadata sidecars.

use anyhow::{Context, Result};
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `artifact` plus a `<stem>.meta.json` sidecar describing how to
/// regenerate it. Returns the sidecar path.
pub fn write_with_meta<P: AsRef<Path>>(artifact: P, contents: &str, meta: Value) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    if let Some(parent) = artifact.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating artifact dir {}", parent.display()))?;
        }
    }
    fs::write(artifact, contents).with_context(|| format!("writing {}", artifact.display()))?;

    let meta_path = meta_path(artifact);
    fs::write(&meta_path, serde_json::to_vec_pretty(&meta)?)
        .with_context(|| format!("writing {}", meta_path.display()))?;
    Ok(meta_path)
}

fn meta_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".meta.json");
    artifact.with_file_name(name)
}
