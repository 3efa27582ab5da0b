use anyhow::Result;
use clap::{Parser, Subcommand};
use simplx::OffsetMetric;
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod job;
mod provenance;

use job::{write_json, Job};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "simplx")]
#[command(about = "Constrained polyline simplification")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Simplify the polyline of a JSON job file
    Simplify {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Override `options.threshold`
        #[arg(long)]
        threshold: Option<f64>,
        /// Override `options.offset` (dp | sed)
        #[arg(long)]
        offset: Option<OffsetMetric>,
        /// Exit non-zero if the result carries warnings
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Report self-intersections of a job's input polyline
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Simplify {
            input,
            out,
            threshold,
            offset,
            strict,
        } => run(input, out, threshold, offset, strict),
        Action::Check { input } => check(input),
        Action::Report => report(),
    }
}

fn run(
    input: PathBuf,
    out: PathBuf,
    threshold: Option<f64>,
    offset: Option<OffsetMetric>,
    strict: bool,
) -> Result<()> {
    let mut job = Job::load(&input)?;
    if let Some(t) = threshold {
        job.options.threshold = t;
    }
    if let Some(m) = offset {
        job.options.offset_metric = m;
    }
    tracing::info!(
        input = %input.display(),
        points = job.polyline.len(),
        constraints = job.constraints.len(),
        "simplify"
    );
    let result = job.run()?;
    tracing::info!(
        retained = result.indices.len(),
        warnings = result.warnings.len(),
        "done"
    );
    write_json(&out, &result)?;
    let payload = Payload::new(serde_json::to_value(job.options)?).with_input(&input);
    provenance::write_sidecar(&out, payload)?;

    if strict && !result.warnings.is_empty() {
        anyhow::bail!("{} post-condition warning(s)", result.warnings.len());
    }
    Ok(())
}

fn check(input: PathBuf) -> Result<()> {
    let report = Job::load(&input)?.check()?;
    tracing::info!(
        planar = report.planar.len(),
        non_planar = report.non_planar.len(),
        "check"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(Payload::new(serde_json::json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
