//! Salary survey reporting.
//!
//! Reports operate on an explicit [`LoadedDataset`] rather than on shared
//! session state:
//!
//! - **aggregate**: grouped salary statistics (job title, age, country,
//!   original currency)
//! - **bonus** / **summary**: whole-dataset figures
//! - **render**: plain-text presentation
//! - **snapshot**: persisting rendered text under `results_<ID>/`

mod aggregate;
mod bonus;
mod convert;
mod dataset;
mod error;
mod render;
mod snapshot;
mod summary;

pub use aggregate::{
    ReportOptions, aggregate, cross_currency_comparison, salary_by_age, salary_by_country,
    salary_by_job,
};
pub use bonus::{BonusStatistics, bonus_statistics};
pub use dataset::LoadedDataset;
pub use error::{ReportError, Result};
pub use render::{RenderedReport, ReportKind, format_amount, render_bonus, render_summary, render_table};
pub use snapshot::{SNAPSHOT_RULE_WIDTH, save_snapshot, snapshot_path};
pub use summary::{SummaryStatistics, summary_statistics};
