//! Currency partitioning.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{filter_rows, has_column, string_cells};
use survey_model::{Field, PartitionId};

use crate::error::Result;

/// Splits cleaned records by canonical currency code.
///
/// Produces one partition per distinct non-missing currency, in ascending
/// code order, followed by [`PartitionId::All`] holding every record. Without
/// a currency column only the `ALL` partition is produced.
pub fn partition_by_currency(df: &DataFrame) -> Result<Vec<(PartitionId, DataFrame)>> {
    let name = Field::Currency.column();
    let mut partitions = Vec::new();
    if has_column(df, name) {
        let cells = string_cells(df, name)?;
        let codes: BTreeSet<&str> = cells
            .iter()
            .flatten()
            .map(String::as_str)
            .filter(|code| !code.trim().is_empty())
            .collect();
        for code in codes {
            let keep: Vec<bool> = cells
                .iter()
                .map(|cell| cell.as_deref() == Some(code))
                .collect();
            let subset = filter_rows(df, &keep)?;
            debug!(currency = code, rows = subset.height(), "partitioned");
            partitions.push((PartitionId::Currency(code.to_string()), subset));
        }
    }
    partitions.push((PartitionId::All, df.clone()));
    Ok(partitions)
}
