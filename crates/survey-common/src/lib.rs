//! Shared utilities for the salary survey crates.
//!
//! This crate provides common helpers used across the workspace, including
//! Polars `AnyValue` conversions, column read/write helpers, survey-style
//! numeric parsing and descriptive statistics.

pub mod frame;
pub mod polars;
pub mod stats;

// Re-export commonly used functions at crate root for convenience
pub use frame::{
    amount_cells, filter_rows, has_column, set_amount_cells, set_string_cells, string_cells,
};
pub use polars::{any_to_f64, any_to_string, format_numeric, parse_amount, parse_f64};
pub use stats::{Describe, describe, quantile};
