//! Error types for the cleaning pipeline.
//!
//! Row-level problems (missing values, unparseable amounts) are never errors:
//! they drop or default the cell and show up in the stage counts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Lower-casing labels would merge two distinct columns.
    #[error("columns collide after lower-casing: '{first}' and '{second}'")]
    DuplicateColumn { first: String, second: String },

    /// The outlier window width must be a finite number above zero.
    #[error("outlier sigma must be a finite number greater than 0, got {sigma}")]
    InvalidSigma { sigma: f64 },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
