//! Error types for reporting.

use std::path::PathBuf;

use thiserror::Error;

use survey_ingest::IngestError;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A column the report needs is absent from the dataset.
    #[error("column '{column}' not found in dataset {partition}")]
    MissingColumn { column: String, partition: String },

    /// The dataset has no usable rows for this report.
    #[error("dataset {partition} has no rows to report on")]
    EmptyDataset { partition: String },

    /// No per-currency partition exists to compare.
    #[error("no currency partitions found in {dir}")]
    NoPartitions { dir: PathBuf },

    /// Loading a partition failed.
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Writing a report snapshot failed.
    #[error("failed to write report {path}: {source}")]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ReportError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
