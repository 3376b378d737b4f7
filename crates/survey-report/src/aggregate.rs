//! Grouped salary statistics.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info_span, warn};

use survey_common::describe;
use survey_ingest::{list_available_partitions, load_partition};
use survey_model::{
    AggregationTable, CurrencyBasis, Field, GroupStats, Grouping, PartitionId, SortOrder,
    ValueKind,
};
use survey_standards::ExchangeRates;

use crate::convert::to_basis;
use crate::dataset::LoadedDataset;
use crate::error::{ReportError, Result};

/// Presentation limits for grouped reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Groups kept after sorting.
    pub top_n: usize,
}

impl ReportOptions {
    pub const JOB_TITLE_DEFAULT: Self = Self { top_n: 10 };
    pub const COUNTRY_DEFAULT: Self = Self { top_n: 15 };
}

fn group_values(keys: &[Option<String>], values: &[Option<f64>]) -> BTreeMap<String, Vec<f64>> {
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (key, value) in keys.iter().zip(values) {
        if let (Some(key), Some(value)) = (key, value) {
            groups.entry(key.clone()).or_default().push(*value);
        }
    }
    groups
}

fn build_rows(groups: BTreeMap<String, Vec<f64>>, grouping: Grouping) -> Vec<GroupStats> {
    let mut rows: Vec<GroupStats> = groups
        .into_iter()
        .filter_map(|(key, values)| {
            let summary = describe(&values)?;
            Some(GroupStats {
                key,
                count: summary.count,
                mean: summary.mean,
                median: summary.median,
                min: summary.min,
                max: summary.max,
                std_dev: summary.std_dev,
            })
        })
        .filter(|row| row.count >= grouping.min_count())
        .collect();
    match grouping.sort_order() {
        // Groups arrive in key order; a stable sort keeps ties alphabetical.
        SortOrder::MedianDescending => rows.sort_by(|a, b| b.median.total_cmp(&a.median)),
        SortOrder::KeyAscending => {}
    }
    rows
}

/// Groups `value` by a record column of the dataset.
///
/// Amounts are converted to USD first when the dataset's basis requires it.
/// Groups below the grouping's minimum size are dropped, the rest are sorted
/// and optionally truncated to `top_n`.
pub fn aggregate(
    dataset: &LoadedDataset,
    grouping: Grouping,
    value: ValueKind,
    top_n: Option<usize>,
    rates: &ExchangeRates,
) -> Result<AggregationTable> {
    let _span = info_span!("aggregate", partition = %dataset.partition(), grouping = grouping.key_label())
        .entered();
    let Some(key_field) = grouping.field() else {
        return Err(ReportError::MissingColumn {
            column: grouping.key_label().to_string(),
            partition: dataset.partition().to_string(),
        });
    };
    let keys = dataset.text(key_field)?;
    let amounts = to_basis(dataset, dataset.amounts(value.field())?, rates)?;
    let mut rows = build_rows(group_values(&keys, &amounts), grouping);
    if let Some(limit) = top_n {
        rows.truncate(limit);
    }
    debug!(groups = rows.len(), "aggregated");
    Ok(AggregationTable {
        grouping,
        value,
        basis: dataset.basis(),
        top_n,
        rows,
    })
}

/// Salary by job title: groups of at least 5, top `top_n` by median.
pub fn salary_by_job(
    dataset: &LoadedDataset,
    options: ReportOptions,
    rates: &ExchangeRates,
) -> Result<AggregationTable> {
    aggregate(dataset, Grouping::JobTitle, ValueKind::Salary, Some(options.top_n), rates)
}

/// Salary by age bracket, every bracket, in bracket order.
pub fn salary_by_age(dataset: &LoadedDataset, rates: &ExchangeRates) -> Result<AggregationTable> {
    aggregate(dataset, Grouping::Age, ValueKind::Salary, None, rates)
}

/// Salary by country: groups of at least 10, top `top_n` by median.
pub fn salary_by_country(
    dataset: &LoadedDataset,
    options: ReportOptions,
    rates: &ExchangeRates,
) -> Result<AggregationTable> {
    aggregate(dataset, Grouping::Country, ValueKind::Salary, Some(options.top_n), rates)
}

/// Compares USD-converted salaries across every per-currency partition in `dir`.
///
/// Each partition is converted with its own currency's rate. A partition
/// that fails to load is skipped with a warning.
///
/// # Errors
///
/// [`ReportError::NoPartitions`] when no per-currency partition can be loaded.
pub fn cross_currency_comparison(dir: &Path, rates: &ExchangeRates) -> Result<AggregationTable> {
    let _span = info_span!("cross_currency_comparison", dir = %dir.display()).entered();
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for partition in list_available_partitions(dir, rates) {
        let PartitionId::Currency(code) = &partition else {
            continue;
        };
        let frame = match load_partition(dir, &partition) {
            Ok(frame) => frame,
            Err(error) => {
                warn!(partition = %partition, error = %error, "skipping partition");
                continue;
            }
        };
        let dataset = LoadedDataset::new(partition.clone(), frame);
        let salaries = match dataset.amounts(Field::Salary) {
            Ok(salaries) => salaries,
            Err(error) => {
                warn!(partition = %partition, error = %error, "skipping partition");
                continue;
            }
        };
        let rate = rates.currency_rate(code).unwrap_or(1.0);
        groups
            .entry(code.clone())
            .or_default()
            .extend(salaries.into_iter().flatten().map(|salary| salary * rate));
    }
    if groups.is_empty() {
        return Err(ReportError::NoPartitions {
            dir: dir.to_path_buf(),
        });
    }
    Ok(AggregationTable {
        grouping: Grouping::OriginalCurrency,
        value: ValueKind::Salary,
        basis: CurrencyBasis::UsdConverted,
        top_n: None,
        rows: build_rows(groups, Grouping::OriginalCurrency),
    })
}
