use std::collections::BTreeSet;

use serde::Serialize;

use survey_common::{describe, quantile};
use survey_model::{CurrencyBasis, Field};
use survey_standards::ExchangeRates;

use crate::convert::to_basis;
use crate::dataset::LoadedDataset;
use crate::error::{ReportError, Result};

/// Whole-dataset overview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStatistics {
    pub basis: CurrencyBasis,
    pub total_records: usize,
    pub unique_job_titles: usize,
    pub unique_countries: usize,
    pub salary_min: f64,
    pub salary_q1: f64,
    pub salary_median: f64,
    pub salary_mean: f64,
    pub salary_q3: f64,
    pub salary_max: f64,
    /// Job title and country of the first record holding the maximum salary.
    pub max_job_title: Option<String>,
    pub max_country: Option<String>,
    pub salary_std_dev: Option<f64>,
}

fn distinct(cells: &[Option<String>]) -> usize {
    cells.iter().flatten().collect::<BTreeSet<_>>().len()
}

/// Computes record counts and the salary distribution of a dataset.
///
/// # Errors
///
/// [`ReportError::MissingColumn`] without a salary column and
/// [`ReportError::EmptyDataset`] when no salary is present.
pub fn summary_statistics(
    dataset: &LoadedDataset,
    rates: &ExchangeRates,
) -> Result<SummaryStatistics> {
    let salaries = to_basis(dataset, dataset.amounts(Field::Salary)?, rates)?;
    let present: Vec<f64> = salaries.iter().flatten().copied().collect();
    let Some(stats) = describe(&present) else {
        return Err(ReportError::EmptyDataset {
            partition: dataset.partition().to_string(),
        });
    };
    let jobs = dataset.text_or_missing(Field::JobTitle)?;
    let countries = dataset.text_or_missing(Field::Country)?;
    let max_row = salaries.iter().position(|salary| *salary == Some(stats.max));
    let at_max = |cells: &[Option<String>]| max_row.and_then(|idx| cells[idx].clone());

    Ok(SummaryStatistics {
        basis: dataset.basis(),
        total_records: dataset.height(),
        unique_job_titles: distinct(&jobs),
        unique_countries: distinct(&countries),
        salary_min: stats.min,
        salary_q1: quantile(&present, 0.25)?.unwrap_or(stats.min),
        salary_median: stats.median,
        salary_mean: stats.mean,
        salary_q3: quantile(&present, 0.75)?.unwrap_or(stats.max),
        salary_max: stats.max,
        max_job_title: at_max(&jobs),
        max_country: at_max(&countries),
        salary_std_dev: stats.std_dev,
    })
}
