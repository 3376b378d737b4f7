//! Salary survey cleaning pipeline.
//!
//! - **dedupe**: exact full-row duplicate removal on raw values
//! - **columns**: label lower-casing and salary/bonus parsing
//! - **validate**: required-field enforcement
//! - **outlier**: single-pass k-sigma salary trimming
//! - **canonicalize**: currency and country text canonicalization
//! - **pipeline**: the ordered cleaning run and its stage counts
//! - **partition**: per-currency split plus the combined `ALL` set

pub mod canonicalize;
pub mod columns;
pub mod dedupe;
pub mod error;
pub mod outlier;
pub mod partition;
pub mod pipeline;
pub mod validate;

pub use canonicalize::canonicalize_text_fields;
pub use columns::{lowercase_columns, parse_bonus, parse_salary};
pub use dedupe::deduplicate;
pub use error::{Result, TransformError};
pub use outlier::{check_sigma, salary_bounds, trim_outliers};
pub use partition::partition_by_currency;
pub use pipeline::{CleanOptions, clean_survey};
pub use validate::enforce_required_fields;
