//! Command pipelines shared by the binary and the integration tests.
//!
//! Each function takes plain paths and option structs, runs the library
//! crates in order, and returns an outcome the caller prints.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use survey_ingest::{list_available_partitions, read_csv_frame, write_partitions};
use survey_model::PartitionId;
use survey_report::{
    LoadedDataset, RenderedReport, ReportKind, ReportOptions, bonus_statistics,
    cross_currency_comparison, render_bonus, render_summary, render_table, salary_by_age,
    salary_by_country, salary_by_job, summary_statistics,
};
use survey_standards::default_standards;
use survey_transform::{CleanOptions, clean_survey, partition_by_currency};

use crate::types::{CleanOutcome, PartitionListing, ReportData, ReportOutcome};

/// Cleans `input` and writes one CSV per currency plus the ALL dataset into `data_dir`.
///
/// A partition that cannot be written is recorded in the outcome; the
/// remaining partitions are still written.
pub fn run_clean(input: &Path, data_dir: &Path, options: &CleanOptions) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %input.display());
    let _guard = span.enter();

    let standards = default_standards().context("load survey standards")?;
    let raw = read_csv_frame(input).with_context(|| format!("read {}", input.display()))?;
    info!(rows = raw.height(), columns = raw.width(), "survey export loaded");

    let (cleaned, report) =
        clean_survey(&raw, options, standards).context("clean survey export")?;
    let partitions = partition_by_currency(&cleaned).context("partition by currency")?;
    let writes = write_partitions(data_dir, &partitions);

    Ok(CleanOutcome {
        input: input.to_path_buf(),
        data_dir: data_dir.to_path_buf(),
        report,
        partitions: writes,
    })
}

/// Datasets in `data_dir` that reports can select.
pub fn list_partitions(data_dir: &Path) -> Result<PartitionListing> {
    let standards = default_standards().context("load survey standards")?;
    Ok(PartitionListing {
        data_dir: data_dir.to_path_buf(),
        partitions: list_available_partitions(data_dir, &standards.rates),
    })
}

#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub kind: ReportKind,
    /// Required by every report except the cross-currency comparison.
    pub partition: Option<PartitionId>,
    pub data_dir: PathBuf,
    /// Overrides the per-report default group limit.
    pub top_n: Option<usize>,
}

fn load_dataset(request: &ReportRequest) -> Result<LoadedDataset> {
    let Some(partition) = &request.partition else {
        bail!(
            "the {} report needs a dataset (use --dataset)",
            request.kind.title()
        );
    };
    LoadedDataset::load(&request.data_dir, partition)
        .with_context(|| format!("load dataset {partition}"))
}

/// Computes and renders one report.
pub fn run_report(request: &ReportRequest) -> Result<ReportOutcome> {
    let span = info_span!("report", kind = request.kind.title());
    let _guard = span.enter();

    let rates = &default_standards().context("load survey standards")?.rates;
    let options = |default: ReportOptions| ReportOptions {
        top_n: request.top_n.unwrap_or(default.top_n),
    };

    let (partition, body, data) = match request.kind {
        ReportKind::CrossCurrency => {
            let table = cross_currency_comparison(&request.data_dir, rates)
                .context("compare currencies")?;
            (PartitionId::All, render_table(&table), ReportData::Table(table))
        }
        ReportKind::JobTitle => {
            let dataset = load_dataset(request)?;
            let table = salary_by_job(&dataset, options(ReportOptions::JOB_TITLE_DEFAULT), rates)?;
            (dataset.partition().clone(), render_table(&table), ReportData::Table(table))
        }
        ReportKind::Age => {
            let dataset = load_dataset(request)?;
            let table = salary_by_age(&dataset, rates)?;
            (dataset.partition().clone(), render_table(&table), ReportData::Table(table))
        }
        ReportKind::Country => {
            let dataset = load_dataset(request)?;
            let table =
                salary_by_country(&dataset, options(ReportOptions::COUNTRY_DEFAULT), rates)?;
            (dataset.partition().clone(), render_table(&table), ReportData::Table(table))
        }
        ReportKind::Bonus => {
            let dataset = load_dataset(request)?;
            let stats = bonus_statistics(&dataset, rates)?;
            (dataset.partition().clone(), render_bonus(&stats), ReportData::Bonus(stats))
        }
        ReportKind::Summary => {
            let dataset = load_dataset(request)?;
            let stats = summary_statistics(&dataset, rates)?;
            (dataset.partition().clone(), render_summary(&stats), ReportData::Summary(stats))
        }
    };

    Ok(ReportOutcome {
        rendered: RenderedReport {
            kind: request.kind,
            partition,
            body,
        },
        data,
    })
}
