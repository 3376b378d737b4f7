//! Salary survey data model.
//!
//! Types shared by the cleaning pipeline, the aggregation engine and the CLI:
//! the canonical field registry, partition identifiers, cleaning stage counts
//! and aggregation results.

pub mod aggregation;
pub mod cleaning;
pub mod field;
pub mod partition;

pub use aggregation::{AggregationTable, CurrencyBasis, GroupStats, Grouping, SortOrder, ValueKind};
pub use cleaning::{CleaningReport, SalaryBounds, Stage, StageCount};
pub use field::Field;
pub use partition::{ALL_PARTITION, PartitionId, safe_partition_name};
