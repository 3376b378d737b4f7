//! Aggregation result types.
//!
//! Results are ephemeral: they are recomputed for every report request and
//! only persisted as rendered text.

use std::fmt;

use serde::Serialize;

use crate::field::Field;

/// Column a report groups records by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grouping {
    JobTitle,
    Age,
    Country,
    /// Currency of the partition the record was loaded from.
    OriginalCurrency,
}

impl Grouping {
    /// Field holding the group key, if the key comes from a record column.
    pub const fn field(self) -> Option<Field> {
        match self {
            Grouping::JobTitle => Some(Field::JobTitle),
            Grouping::Age => Some(Field::Age),
            Grouping::Country => Some(Field::Country),
            Grouping::OriginalCurrency => None,
        }
    }

    /// Smallest group size reported as significant.
    pub const fn min_count(self) -> usize {
        match self {
            Grouping::JobTitle => 5,
            Grouping::Country => 10,
            Grouping::Age | Grouping::OriginalCurrency => 0,
        }
    }

    pub const fn sort_order(self) -> SortOrder {
        match self {
            Grouping::Age => SortOrder::KeyAscending,
            Grouping::JobTitle | Grouping::Country | Grouping::OriginalCurrency => {
                SortOrder::MedianDescending
            }
        }
    }

    pub const fn key_label(self) -> &'static str {
        match self {
            Grouping::JobTitle => "Job title",
            Grouping::Age => "Age group",
            Grouping::Country => "Country",
            Grouping::OriginalCurrency => "Original currency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    MedianDescending,
    KeyAscending,
}

/// Which amount a report aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Salary,
    Bonus,
}

impl ValueKind {
    pub const fn field(self) -> Field {
        match self {
            ValueKind::Salary => Field::Salary,
            ValueKind::Bonus => Field::Bonus,
        }
    }
}

/// Currency the reported figures are expressed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyBasis {
    /// Figures are in the partition's own currency.
    Native(String),
    /// Figures were converted to USD with the exchange rate table.
    UsdConverted,
}

impl CurrencyBasis {
    pub fn is_converted(&self) -> bool {
        matches!(self, CurrencyBasis::UsdConverted)
    }

    /// Unit shown next to amounts.
    pub fn unit(&self) -> &str {
        match self {
            CurrencyBasis::Native(code) => code,
            CurrencyBasis::UsdConverted => "USD",
        }
    }
}

impl fmt::Display for CurrencyBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyBasis::Native(code) => f.write_str(code),
            CurrencyBasis::UsdConverted => f.write_str("USD (converted from multiple currencies)"),
        }
    }
}

/// Descriptive statistics of one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub key: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation; `None` for single-member groups.
    pub std_dev: Option<f64>,
}

/// Grouped statistics, filtered and ordered for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationTable {
    pub grouping: Grouping,
    pub value: ValueKind,
    pub basis: CurrencyBasis,
    /// Truncation applied after sorting, if any.
    pub top_n: Option<usize>,
    pub rows: Vec<GroupStats>,
}

impl AggregationTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&GroupStats> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.key.as_str()).collect()
    }
}
