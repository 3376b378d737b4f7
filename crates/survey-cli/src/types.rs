use std::path::PathBuf;

use serde::Serialize;

use survey_ingest::PartitionWrite;
use survey_model::{AggregationTable, CleaningReport, PartitionId};
use survey_report::{BonusStatistics, RenderedReport, SummaryStatistics};

#[derive(Debug)]
pub struct CleanOutcome {
    pub input: PathBuf,
    pub data_dir: PathBuf,
    pub report: CleaningReport,
    pub partitions: Vec<PartitionWrite>,
}

impl CleanOutcome {
    /// True when at least one partition could not be written.
    pub fn has_errors(&self) -> bool {
        self.partitions.iter().any(|write| !write.is_ok())
    }

    pub fn written(&self) -> usize {
        self.partitions.iter().filter(|write| write.is_ok()).count()
    }
}

/// Structured result behind a rendered report, for `--json` output.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportData {
    Table(AggregationTable),
    Bonus(BonusStatistics),
    Summary(SummaryStatistics),
}

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub rendered: RenderedReport,
    pub data: ReportData,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartitionListing {
    pub data_dir: PathBuf,
    pub partitions: Vec<PartitionId>,
}
