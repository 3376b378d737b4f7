//! Partition discovery and loading against a temporary data directory.

use polars::prelude::*;
use survey_ingest::{IngestError, list_available_partitions, load_partition, write_partitions};
use survey_model::{Field, PartitionId};
use survey_standards::default_standards;
use tempfile::TempDir;

fn cleaned(currencies: &[&str], salaries: &[f64]) -> DataFrame {
    df!(
        Field::JobTitle.column() => vec!["Engineer"; currencies.len()],
        Field::Currency.column() => currencies,
        Field::Salary.column() => salaries,
    )
    .unwrap()
}

#[test]
fn lists_only_known_currencies_and_all_sorted() {
    let dir = TempDir::new().unwrap();
    let rates = &default_standards().unwrap().rates;
    write_partitions(
        dir.path(),
        &[
            (PartitionId::parse("USD"), cleaned(&["USD"], &[50000.0])),
            (PartitionId::parse("EUR"), cleaned(&["EUR"], &[40000.0])),
            (PartitionId::parse("XYZ"), cleaned(&["XYZ"], &[1.0])),
            (PartitionId::All, cleaned(&["USD", "EUR", "XYZ"], &[50000.0, 40000.0, 1.0])),
        ],
    );

    let listed: Vec<String> = list_available_partitions(dir.path(), rates)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(listed, vec!["ALL", "EUR", "USD"]);
}

#[test]
fn empty_directory_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let rates = &default_standards().unwrap().rates;
    assert!(list_available_partitions(dir.path(), rates).is_empty());
}

#[test]
fn load_restores_numeric_salary() {
    let dir = TempDir::new().unwrap();
    write_partitions(
        dir.path(),
        &[(PartitionId::parse("USD"), cleaned(&["USD", "USD"], &[50000.0, 72500.5]))],
    );

    let df = load_partition(dir.path(), &PartitionId::parse("USD")).unwrap();
    let salary = df
        .column(Field::Salary.column())
        .unwrap();

    assert_eq!(df.height(), 2);
    assert_eq!(salary.dtype(), &DataType::Float64);
    assert_eq!(salary.get(1).unwrap(), AnyValue::Float64(72500.5));
}

#[test]
fn load_missing_partition_is_not_found() {
    let dir = TempDir::new().unwrap();
    let result = load_partition(dir.path(), &PartitionId::parse("GBP"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn load_empty_partition_is_malformed() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("cleaned_data_all.csv"), "").unwrap();
    let result = load_partition(dir.path(), &PartitionId::All);
    assert!(matches!(result, Err(IngestError::Malformed { .. })));
}
