use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use survey_cli::pipeline::{ReportRequest, list_partitions, run_clean, run_report};
use survey_cli::types::{CleanOutcome, PartitionListing, ReportOutcome};
use survey_report::{ReportKind, save_snapshot};
use survey_transform::CleanOptions;

use crate::cli::{CleanArgs, ReportArgs};

pub fn run_clean_command(args: &CleanArgs, data_dir: &Path) -> Result<CleanOutcome> {
    let options = CleanOptions {
        outlier_sigma: args.sigma,
    };
    run_clean(&args.input, data_dir, &options)
}

pub fn run_partitions(data_dir: &Path) -> Result<PartitionListing> {
    list_partitions(data_dir)
}

pub fn run_report_command(args: &ReportArgs, data_dir: &Path) -> Result<ReportOutcome> {
    let kind = ReportKind::from(args.kind);
    if !kind.needs_dataset() && args.dataset.is_some() {
        warn!(report = kind.title(), "--dataset is ignored for this report");
    }
    run_report(&ReportRequest {
        kind,
        partition: args.dataset.clone(),
        data_dir: data_dir.to_path_buf(),
        top_n: args.top,
    })
}

/// Prints the report and, when asked, saves it. Returns false when saving failed.
pub fn emit_report(
    outcome: &ReportOutcome,
    args: &ReportArgs,
    data_dir: &Path,
) -> Result<bool> {
    if args.json {
        let json = serde_json::to_string_pretty(&outcome.data).context("serialize report")?;
        println!("{json}");
    } else {
        println!("{}", outcome.rendered.title());
        println!("{}", outcome.rendered.body.trim_end());
    }
    if !args.save {
        return Ok(true);
    }
    let generated = chrono::Local::now().naive_local();
    match save_snapshot(data_dir, &outcome.rendered, generated) {
        Ok(path) => {
            eprintln!("Saved: {}", path.display());
            Ok(true)
        }
        Err(error) => {
            eprintln!("error: failed to save report: {error}");
            Ok(false)
        }
    }
}
