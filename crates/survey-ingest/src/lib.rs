//! Survey data ingestion and partition storage.
//!
//! Reads the raw survey export into a string-typed `DataFrame`, writes the
//! cleaned per-currency partitions and reads them back for reporting.

pub mod csv_table;
pub mod discovery;
pub mod error;
pub mod persist;

pub use csv_table::read_csv_frame;
pub use discovery::{list_available_partitions, load_partition, partition_path};
pub use error::{IngestError, Result};
pub use persist::{PartitionWrite, write_partition, write_partitions};
