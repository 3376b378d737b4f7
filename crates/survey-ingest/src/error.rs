//! Error types for survey data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing survey files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input or partition file does not exist.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write an output file.
    #[error("failed to write file {path}: {message}")]
    FileWrite { path: PathBuf, message: String },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no header.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// File parsed but does not look like a survey partition.
    #[error("malformed partition file {path}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
