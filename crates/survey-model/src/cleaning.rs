//! Cleaning run bookkeeping.

use serde::Serialize;

/// Pipeline stages that can remove records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Deduplicate,
    RequiredFields,
    Outliers,
}

impl Stage {
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Deduplicate => "Duplicates",
            Stage::RequiredFields => "Missing required fields",
            Stage::Outliers => "Statistical outliers",
        }
    }
}

/// Row counts around one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageCount {
    pub stage: Stage,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl StageCount {
    pub fn removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Salary window applied by the outlier stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBounds {
    pub mean: f64,
    pub std_dev: f64,
    /// `max(0, mean - k * std_dev)`.
    pub lower: f64,
    /// `mean + k * std_dev`.
    pub upper: f64,
}

impl SalaryBounds {
    pub fn contains(&self, salary: f64) -> bool {
        salary >= self.lower && salary <= self.upper
    }
}

/// Outcome of one cleaning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CleaningReport {
    pub original_rows: usize,
    pub stages: Vec<StageCount>,
    /// `None` when the salary column is absent or fewer than two rows survive validation.
    pub salary_bounds: Option<SalaryBounds>,
    pub final_rows: usize,
}

impl CleaningReport {
    pub fn removed_by(&self, stage: Stage) -> usize {
        self.stages
            .iter()
            .filter(|count| count.stage == stage)
            .map(StageCount::removed)
            .sum()
    }

    pub fn total_removed(&self) -> usize {
        self.original_rows.saturating_sub(self.final_rows)
    }
}
