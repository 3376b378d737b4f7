//! Descriptive statistics over plain `f64` slices.
//!
//! Values are wrapped in a `Float64Chunked` so the figures match what Polars
//! reports for the same column: sample standard deviation (`ddof = 1`) and
//! linearly interpolated quantiles.

use polars::prelude::*;

/// Summary of one set of amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; `None` below two values.
    pub std_dev: Option<f64>,
}

fn chunked(values: &[f64]) -> Float64Chunked {
    Float64Chunked::from_slice("values".into(), values)
}

/// Describes `values`, or `None` when the slice is empty.
///
/// # Examples
///
/// ```
/// use survey_common::describe;
///
/// let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(summary.mean, 5.0);
/// assert_eq!(summary.median, 4.5);
/// assert!((summary.std_dev.unwrap() - 2.138_089_935).abs() < 1e-9);
/// ```
pub fn describe(values: &[f64]) -> Option<Describe> {
    if values.is_empty() {
        return None;
    }
    let ca = chunked(values);
    let std_dev = if values.len() < 2 {
        None
    } else {
        ca.std(1).filter(|v| v.is_finite())
    };
    Some(Describe {
        count: values.len(),
        mean: ca.mean()?,
        median: ca.median()?,
        min: ca.min()?,
        max: ca.max()?,
        std_dev,
    })
}

/// Linearly interpolated quantile, `q` in `[0, 1]`.
pub fn quantile(values: &[f64], q: f64) -> PolarsResult<Option<f64>> {
    if values.is_empty() {
        return Ok(None);
    }
    chunked(values).quantile(q, QuantileMethod::Linear)
}
