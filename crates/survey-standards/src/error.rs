//! Error types for loading reference tables.

use thiserror::Error;

/// Errors raised while parsing or validating a reference table.
#[derive(Debug, Clone, Error)]
pub enum StandardsError {
    /// The TOML source could not be parsed.
    #[error("failed to parse {table}: {message}")]
    Parse { table: String, message: String },

    /// An exchange rate is zero, negative or not finite.
    #[error("invalid exchange rate {rate} for '{key}' in {table}")]
    InvalidRate {
        table: String,
        key: String,
        rate: f64,
    },

    /// Two alias keys collapse to the same normalized key with different targets.
    #[error("conflicting alias '{key}' in {table}: '{first}' vs '{second}'")]
    ConflictingAlias {
        table: String,
        key: String,
        first: String,
        second: String,
    },
}

/// Result type for reference table operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
