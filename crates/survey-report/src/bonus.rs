use serde::Serialize;

use survey_common::{describe, quantile};
use survey_model::{CurrencyBasis, Field};
use survey_standards::ExchangeRates;

use crate::convert::to_basis;
use crate::dataset::LoadedDataset;
use crate::error::{ReportError, Result};

/// Additional-compensation figures for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusStatistics {
    pub basis: CurrencyBasis,
    pub respondents: usize,
    pub with_bonus: usize,
    /// Share of respondents reporting a positive bonus, in percent.
    pub with_bonus_pct: f64,
    pub median_all: f64,
    /// Median over positive bonuses only; `None` when nobody reported one.
    pub median_positive: Option<f64>,
    pub mean_all: f64,
    pub max: f64,
}

/// Summarizes the bonus column. Missing bonuses count as 0.
///
/// # Errors
///
/// [`ReportError::MissingColumn`] without a bonus column and
/// [`ReportError::EmptyDataset`] for a dataset with no rows.
pub fn bonus_statistics(dataset: &LoadedDataset, rates: &ExchangeRates) -> Result<BonusStatistics> {
    let raw = dataset.amounts(Field::Bonus)?;
    let filled = raw.into_iter().map(|bonus| Some(bonus.unwrap_or(0.0))).collect();
    let bonuses: Vec<f64> = to_basis(dataset, filled, rates)?.into_iter().flatten().collect();
    let Some(all) = describe(&bonuses) else {
        return Err(ReportError::EmptyDataset {
            partition: dataset.partition().to_string(),
        });
    };
    let positive: Vec<f64> = bonuses.iter().copied().filter(|bonus| *bonus > 0.0).collect();
    Ok(BonusStatistics {
        basis: dataset.basis(),
        respondents: all.count,
        with_bonus: positive.len(),
        with_bonus_pct: positive.len() as f64 / all.count as f64 * 100.0,
        median_all: all.median,
        median_positive: quantile(&positive, 0.5)?,
        mean_all: all.mean,
        max: all.max,
    })
}
