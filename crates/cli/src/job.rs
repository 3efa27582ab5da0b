//! JSON job files: one polyline, its constraint rings, and run options.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use simplx::prelude::*;
use std::fs;
use std::path::Path;

/// Input document read by `simplify` and `check`.
#[derive(Debug, Deserialize)]
pub struct Job {
    pub polyline: Vec<[f64; 2]>,
    #[serde(default)]
    pub constraints: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    pub options: Config,
}

/// Result document written by `simplify`.
#[derive(Debug, Serialize)]
pub struct JobOutput {
    pub indices: Vec<usize>,
    pub simple: Vec<[f64; 2]>,
    pub warnings: Vec<Warning>,
    pub stats: Stats,
}

/// Self-intersection report written by `check`.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub points: usize,
    pub planar: Vec<(Chord, Chord)>,
    pub non_planar: Vec<(Chord, Chord)>,
}

impl Job {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing job {}", path.display()))
    }

    pub fn run(&self) -> Result<JobOutput> {
        let polyline = Polyline::from_coords(&self.polyline)?;
        let constraints = Polygon::from_rings(&self.constraints)?;
        let out = simplify(&polyline, &constraints, &self.options)?;
        let simple = out.coords(&polyline).iter().map(|p| [p.x, p.y]).collect();
        Ok(JobOutput {
            indices: out.indices.into_vec(),
            simple,
            warnings: out.warnings,
            stats: out.stats,
        })
    }

    /// Scan the input polyline itself, every vertex retained.
    pub fn check(&self) -> Result<CheckReport> {
        let polyline = Polyline::from_coords(&self.polyline)?;
        let all: Vec<usize> = (0..polyline.len()).collect();
        Ok(CheckReport {
            points: polyline.len(),
            planar: self_intersections(polyline.points(), &all, SelfIntersectMode::Planar),
            non_planar: self_intersections(polyline.points(), &all, SelfIntersectMode::NonPlanar),
        })
    }
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
