//! The ordered cleaning run.
//!
//! Stages run strictly in this order, each on the survivors of the previous:
//!
//! 1. exact duplicate removal on raw values
//! 2. column labels lower-cased
//! 3. salary parsed (thousands separators stripped, non-numeric -> null)
//! 4. bonus parsed, defaulting to 0
//! 5. required-field enforcement
//! 6. single-pass salary outlier trimming
//! 7. currency, other-currency and country canonicalization
//!
//! Stages 1, 5 and 6 report how many rows they removed.

use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use survey_model::{CleaningReport, Stage, StageCount};
use survey_standards::SurveyStandards;

use crate::canonicalize::canonicalize_text_fields;
use crate::columns::{lowercase_columns, parse_bonus, parse_salary};
use crate::dedupe::deduplicate;
use crate::error::Result;
use crate::outlier::{check_sigma, trim_outliers};
use crate::validate::enforce_required_fields;

/// Tunables for a cleaning run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CleanOptions {
    /// Width of the kept salary window in standard deviations.
    pub outlier_sigma: f64,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self { outlier_sigma: 3.0 }
    }
}

impl CleanOptions {
    /// # Errors
    ///
    /// [`TransformError::InvalidSigma`](crate::TransformError::InvalidSigma)
    /// unless `outlier_sigma` is finite and positive.
    pub fn validate(&self) -> Result<()> {
        check_sigma(self.outlier_sigma)
    }
}

fn record_stage(report: &mut CleaningReport, stage: Stage, rows_before: usize, rows_after: usize) {
    let count = StageCount {
        stage,
        rows_before,
        rows_after,
    };
    info!(
        stage = stage.label(),
        rows_before,
        rows_after,
        removed = count.removed(),
        "stage complete"
    );
    report.stages.push(count);
}

/// Cleans a raw survey export.
///
/// The outlier statistics are computed over every surviving row regardless
/// of currency, so a mixed-currency export is trimmed on unconverted amounts.
///
/// Invalid options are rejected before any stage runs.
pub fn clean_survey(
    raw: &DataFrame,
    options: &CleanOptions,
    standards: &SurveyStandards,
) -> Result<(DataFrame, CleaningReport)> {
    options.validate()?;
    let span = info_span!("clean_survey", rows = raw.height(), columns = raw.width());
    let _guard = span.enter();

    let mut report = CleaningReport {
        original_rows: raw.height(),
        ..CleaningReport::default()
    };

    let mut df = {
        let _stage = info_span!("deduplicate").entered();
        let deduped = deduplicate(raw)?;
        record_stage(&mut report, Stage::Deduplicate, raw.height(), deduped.height());
        deduped
    };

    {
        let _stage = info_span!("coerce_columns").entered();
        let missing = lowercase_columns(&mut df)?;
        if !missing.is_empty() {
            info!(count = missing.len(), "export lacks some survey columns");
        }
        let unparseable = parse_salary(&mut df)?;
        if unparseable > 0 {
            warn!(cells = unparseable, "non-numeric salaries treated as missing");
        }
        let defaulted = parse_bonus(&mut df)?;
        info!(cells = defaulted, "bonus defaulted to 0");
    }

    let mut df = {
        let _stage = info_span!("required_fields").entered();
        let validated = enforce_required_fields(&df)?;
        record_stage(&mut report, Stage::RequiredFields, df.height(), validated.height());
        validated
    };

    df = {
        let _stage = info_span!("outliers", sigma = options.outlier_sigma).entered();
        let (trimmed, bounds) = trim_outliers(&df, options.outlier_sigma)?;
        if let Some(bounds) = bounds {
            info!(
                mean = bounds.mean,
                std_dev = bounds.std_dev,
                lower = bounds.lower,
                upper = bounds.upper,
                "salary bounds"
            );
        }
        report.salary_bounds = bounds;
        record_stage(&mut report, Stage::Outliers, df.height(), trimmed.height());
        trimmed
    };

    {
        let _stage = info_span!("canonicalize").entered();
        let changed = canonicalize_text_fields(&mut df, standards)?;
        info!(cells = changed, "text fields canonicalized");
    }

    report.final_rows = df.height();
    info!(
        original = report.original_rows,
        final_rows = report.final_rows,
        removed = report.total_removed(),
        "cleaning complete"
    );
    Ok((df, report))
}
