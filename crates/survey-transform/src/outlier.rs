//! Single-pass salary outlier trimming.

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{amount_cells, describe, filter_rows, has_column};
use survey_model::{Field, SalaryBounds};

use crate::error::{Result, TransformError};

/// Rejects window widths that would empty or invert the salary window.
pub fn check_sigma(sigma: f64) -> Result<()> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(TransformError::InvalidSigma { sigma })
    }
}

/// Computes `max(0, mean - k*sd) ..= mean + k*sd` over `salaries`.
///
/// Returns `None` below two values, where the sample standard deviation is
/// undefined.
pub fn salary_bounds(salaries: &[f64], sigma: f64) -> Option<SalaryBounds> {
    let summary = describe(salaries)?;
    let std_dev = summary.std_dev?;
    Some(SalaryBounds {
        mean: summary.mean,
        std_dev,
        lower: (summary.mean - sigma * std_dev).max(0.0),
        upper: summary.mean + sigma * std_dev,
    })
}

/// Keeps rows whose salary lies inside the bounds computed from this frame.
///
/// The statistics are taken once over the rows passed in; the filter is not
/// repeated on its own output. Rows are kept unchanged when the salary
/// column is absent or there are too few salaries to bound.
///
/// # Errors
///
/// [`TransformError::InvalidSigma`] unless `sigma` is finite and positive.
pub fn trim_outliers(df: &DataFrame, sigma: f64) -> Result<(DataFrame, Option<SalaryBounds>)> {
    check_sigma(sigma)?;
    let name = Field::Salary.column();
    if !has_column(df, name) {
        debug!("salary column absent, outlier trimming skipped");
        return Ok((df.clone(), None));
    }
    let cells = amount_cells(df, name)?;
    let salaries: Vec<f64> = cells.iter().flatten().copied().collect();
    let Some(bounds) = salary_bounds(&salaries, sigma) else {
        debug!(rows = salaries.len(), "too few salaries to bound");
        return Ok((df.clone(), None));
    };
    let keep: Vec<bool> = cells
        .iter()
        .map(|cell| cell.is_some_and(|salary| bounds.contains(salary)))
        .collect();
    Ok((filter_rows(df, &keep)?, Some(bounds)))
}
