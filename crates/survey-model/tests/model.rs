//! Tests for the survey data model.

use survey_model::{
    AggregationTable, CleaningReport, CurrencyBasis, Field, GroupStats, Grouping, PartitionId,
    SalaryBounds, SortOrder, Stage, StageCount, ValueKind,
};

#[test]
fn field_resolves_from_raw_and_lowercased_labels() {
    assert_eq!(Field::from_column("Job title"), Some(Field::JobTitle));
    assert_eq!(Field::from_column("job title"), Some(Field::JobTitle));
    assert_eq!(
        Field::from_column("please indicate the currency"),
        Some(Field::Currency)
    );
    assert_eq!(Field::from_column("Timestamp"), None);
}

#[test]
fn grouping_thresholds_and_order() {
    assert_eq!(Grouping::JobTitle.min_count(), 5);
    assert_eq!(Grouping::Country.min_count(), 10);
    assert_eq!(Grouping::Age.min_count(), 0);
    assert_eq!(Grouping::Age.sort_order(), SortOrder::KeyAscending);
    assert_eq!(
        Grouping::OriginalCurrency.sort_order(),
        SortOrder::MedianDescending
    );
    assert_eq!(Grouping::OriginalCurrency.field(), None);
}

#[test]
fn cleaning_report_counts_removed_rows() {
    let report = CleaningReport {
        original_rows: 6,
        stages: vec![
            StageCount {
                stage: Stage::Deduplicate,
                rows_before: 6,
                rows_after: 5,
            },
            StageCount {
                stage: Stage::RequiredFields,
                rows_before: 5,
                rows_after: 3,
            },
            StageCount {
                stage: Stage::Outliers,
                rows_before: 3,
                rows_after: 3,
            },
        ],
        salary_bounds: None,
        final_rows: 3,
    };
    assert_eq!(report.removed_by(Stage::Deduplicate), 1);
    assert_eq!(report.removed_by(Stage::RequiredFields), 2);
    assert_eq!(report.removed_by(Stage::Outliers), 0);
    assert_eq!(report.total_removed(), 3);
}

#[test]
fn salary_bounds_are_inclusive() {
    let bounds = SalaryBounds {
        mean: 100.0,
        std_dev: 10.0,
        lower: 70.0,
        upper: 130.0,
    };
    assert!(bounds.contains(70.0));
    assert!(bounds.contains(130.0));
    assert!(!bounds.contains(130.5));
    assert!(!bounds.contains(69.9));
}

#[test]
fn partition_ordering_puts_currencies_before_all() {
    let mut ids = vec![
        PartitionId::All,
        PartitionId::parse("USD"),
        PartitionId::parse("EUR"),
    ];
    ids.sort();
    assert_eq!(
        ids,
        vec![
            PartitionId::parse("EUR"),
            PartitionId::parse("USD"),
            PartitionId::All
        ]
    );
}

#[test]
fn aggregation_table_serializes() {
    let table = AggregationTable {
        grouping: Grouping::Country,
        value: ValueKind::Salary,
        basis: CurrencyBasis::UsdConverted,
        top_n: Some(15),
        rows: vec![GroupStats {
            key: "Canada".to_string(),
            count: 12,
            mean: 70000.0,
            median: 68000.0,
            min: 40000.0,
            max: 120000.0,
            std_dev: Some(15000.0),
        }],
    };
    let json = serde_json::to_value(&table).expect("serialize table");
    assert_eq!(json["grouping"], "country");
    assert_eq!(json["basis"], "usd_converted");
    assert_eq!(json["rows"][0]["key"], "Canada");
    assert_eq!(table.keys(), vec!["Canada"]);
}
