//! `<artifact>.provenance.json` sidecars next to every written result.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters and input files recorded alongside one artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_string_lossy().into_owned());
        self
    }
}

/// Full provenance document; also printed by `simplx report`.
pub fn document(payload: Payload, outputs: &[String]) -> Value {
    json!({
        "code_rev": current_git_rev(),
        "version": simplx::VERSION,
        "params": payload.params,
        "inputs": payload.inputs,
        "outputs": outputs,
    })
}

pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let doc = document(payload, &[artifact.to_string_lossy().into_owned()]);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
