//! Partition identifiers and their file names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the partition that holds every cleaned record.
pub const ALL_PARTITION: &str = "ALL";

const FILE_PREFIX: &str = "cleaned_data_";

/// A persisted subset of cleaned records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PartitionId {
    /// Records sharing one canonical currency code.
    Currency(String),
    /// Every cleaned record regardless of currency.
    All,
}

impl PartitionId {
    /// Parses a user-facing identifier; `ALL` (any case) selects the combined set.
    pub fn parse(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        if trimmed.eq_ignore_ascii_case(ALL_PARTITION) {
            PartitionId::All
        } else {
            PartitionId::Currency(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PartitionId::All)
    }

    /// Filesystem-safe identifier (`AUD/NZD` becomes `AUD_NZD`).
    pub fn safe_name(&self) -> String {
        match self {
            PartitionId::Currency(code) => safe_partition_name(code),
            PartitionId::All => ALL_PARTITION.to_string(),
        }
    }

    /// File name the partition is persisted under.
    ///
    /// # Examples
    ///
    /// ```
    /// use survey_model::PartitionId;
    ///
    /// assert_eq!(PartitionId::parse("USD").file_name(), "cleaned_data_USD.csv");
    /// assert_eq!(PartitionId::parse("AUD/NZD").file_name(), "cleaned_data_AUD_NZD.csv");
    /// assert_eq!(PartitionId::All.file_name(), "cleaned_data_all.csv");
    /// ```
    pub fn file_name(&self) -> String {
        match self {
            PartitionId::Currency(code) => {
                format!("{FILE_PREFIX}{}.csv", safe_partition_name(code))
            }
            PartitionId::All => format!("{FILE_PREFIX}all.csv"),
        }
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionId::Currency(code) => f.write_str(code),
            PartitionId::All => f.write_str(ALL_PARTITION),
        }
    }
}

/// Replaces path separators so a currency code can name a file.
pub fn safe_partition_name(code: &str) -> String {
    code.replace(['/', '\\'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_all_in_any_case() {
        assert_eq!(PartitionId::parse("all"), PartitionId::All);
        assert_eq!(PartitionId::parse(" ALL "), PartitionId::All);
        assert_eq!(
            PartitionId::parse("EUR"),
            PartitionId::Currency("EUR".to_string())
        );
    }

    #[test]
    fn safe_name_replaces_both_separators() {
        assert_eq!(safe_partition_name("A/B\\C"), "A_B_C");
        assert_eq!(PartitionId::All.safe_name(), "ALL");
    }
}
