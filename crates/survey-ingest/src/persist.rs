//! Partition persistence.
//!
//! Every write is a full overwrite of one file. A failed write is reported
//! for that partition only; the remaining partitions are still written.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::{info, warn};

use survey_model::PartitionId;

use crate::discovery::partition_path;
use crate::error::{IngestError, Result};

/// Outcome of persisting one partition.
#[derive(Debug)]
pub struct PartitionWrite {
    pub partition: PartitionId,
    pub rows: usize,
    pub result: Result<PathBuf>,
}

impl PartitionWrite {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Writes one partition to `<dir>/cleaned_data_<ID>.csv`.
pub fn write_partition(dir: &Path, partition: &PartitionId, df: &DataFrame) -> Result<PathBuf> {
    let path = partition_path(dir, partition);
    let write_error = |message: String| IngestError::FileWrite {
        path: path.clone(),
        message,
    };
    std::fs::create_dir_all(dir).map_err(|e| write_error(e.to_string()))?;
    let file = File::create(&path).map_err(|e| write_error(e.to_string()))?;
    let mut frame = df.clone();
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut frame)
        .map_err(|e| write_error(e.to_string()))?;
    Ok(path)
}

/// Writes every partition, collecting one outcome per partition.
pub fn write_partitions(dir: &Path, partitions: &[(PartitionId, DataFrame)]) -> Vec<PartitionWrite> {
    partitions
        .iter()
        .map(|(partition, df)| {
            let result = write_partition(dir, partition, df);
            match &result {
                Ok(path) => info!(
                    partition = %partition,
                    rows = df.height(),
                    path = %path.display(),
                    "partition written"
                ),
                Err(error) => warn!(
                    partition = %partition,
                    error = %error,
                    "failed to write partition"
                ),
            }
            PartitionWrite {
                partition: partition.clone(),
                rows: df.height(),
                result,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn frame(currencies: &[&str]) -> DataFrame {
        df!("currency" => currencies, "salary" => vec![1.0; currencies.len()]).unwrap()
    }

    #[test]
    fn test_write_partition_names_file_from_currency() {
        let dir = TempDir::new().unwrap();
        let partition = PartitionId::parse("AUD/NZD");
        let path = write_partition(dir.path(), &partition, &frame(&["AUD/NZD"])).unwrap();

        assert!(path.ends_with("cleaned_data_AUD_NZD.csv"));
        assert!(path.is_file());
    }

    #[test]
    fn test_write_partitions_continues_after_failure() {
        let dir = TempDir::new().unwrap();
        // A directory occupying the target name makes that one write fail.
        std::fs::create_dir(dir.path().join("cleaned_data_EUR.csv")).unwrap();
        let partitions = vec![
            (PartitionId::parse("EUR"), frame(&["EUR"])),
            (PartitionId::parse("USD"), frame(&["USD", "USD"])),
            (PartitionId::All, frame(&["EUR", "USD", "USD"])),
        ];

        let outcomes = write_partitions(dir.path(), &partitions);

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].is_ok());
        assert!(matches!(
            outcomes[0].result,
            Err(IngestError::FileWrite { .. })
        ));
        assert!(outcomes[1].is_ok());
        assert_eq!(outcomes[2].rows, 3);
        assert!(dir.path().join("cleaned_data_all.csv").is_file());
    }
}
