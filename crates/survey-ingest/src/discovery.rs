//! Discovery and loading of persisted partitions.

use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{amount_cells, has_column, set_amount_cells};
use survey_model::{Field, PartitionId};
use survey_standards::ExchangeRates;

use crate::csv_table::read_csv_frame;
use crate::error::{IngestError, Result};

/// Location of a partition file inside `dir`.
pub fn partition_path(dir: &Path, partition: &PartitionId) -> PathBuf {
    dir.join(partition.file_name())
}

/// Lists partitions present in `dir`.
///
/// Only currencies known to the exchange rate table are considered, plus
/// `ALL`. Identifiers are sorted alphabetically.
pub fn list_available_partitions(dir: &Path, rates: &ExchangeRates) -> Vec<PartitionId> {
    let mut found: Vec<PartitionId> = rates
        .codes()
        .map(|code| PartitionId::Currency(code.to_string()))
        .chain(std::iter::once(PartitionId::All))
        .filter(|partition| partition_path(dir, partition).is_file())
        .collect();
    found.sort_by_key(ToString::to_string);
    debug!(dir = %dir.display(), count = found.len(), "discovered partitions");
    found
}

/// Loads a persisted partition.
///
/// Salary and bonus columns, when present, are converted back to `Float64`.
///
/// # Errors
///
/// [`IngestError::FileNotFound`] when the partition was never written and
/// [`IngestError::Malformed`] when the file cannot be parsed.
pub fn load_partition(dir: &Path, partition: &PartitionId) -> Result<DataFrame> {
    let path = partition_path(dir, partition);
    let mut df = read_csv_frame(&path).map_err(|error| match error {
        IngestError::CsvParse { path, message } => IngestError::Malformed {
            path,
            reason: message,
        },
        IngestError::EmptyCsv { path } => IngestError::Malformed {
            path,
            reason: "file is empty".to_string(),
        },
        other => other,
    })?;
    for field in Field::ALL.into_iter().filter(|field| field.is_numeric()) {
        let name = field.column();
        if has_column(&df, name) {
            let values = amount_cells(&df, name)?;
            set_amount_cells(&mut df, name, values)?;
        }
    }
    debug!(partition = %partition, rows = df.height(), "loaded partition");
    Ok(df)
}
