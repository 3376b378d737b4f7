//! Canonical field registry.
//!
//! Binds each semantic role to the exact column label of the survey export.
//! Labels are matched verbatim before the column-normalization stage and in
//! lower case afterwards, which is also how partitions are persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A semantic role a survey column can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    JobTitle,
    Salary,
    Currency,
    OtherCurrencyText,
    Country,
    Bonus,
}

impl Field {
    /// Every canonical field in registry order.
    pub const ALL: [Field; 7] = [
        Field::Age,
        Field::JobTitle,
        Field::Salary,
        Field::Currency,
        Field::OtherCurrencyText,
        Field::Country,
        Field::Bonus,
    ];

    /// Fields a record must carry to survive validation.
    pub const REQUIRED: [Field; 5] = [
        Field::Age,
        Field::JobTitle,
        Field::Salary,
        Field::Currency,
        Field::Country,
    ];

    /// Column label as it appears in the raw export header.
    pub const fn raw_label(self) -> &'static str {
        match self {
            Field::Age => "How old are you?",
            Field::JobTitle => "Job title",
            Field::Salary => {
                "What is your annual salary? (You'll indicate the currency in a later question. \
                 If you are part-time or hourly, please enter an annualized equivalent -- what you \
                 would earn if you worked the job 40 hours a week, 52 weeks a year.)"
            }
            Field::Currency => "Please indicate the currency",
            Field::OtherCurrencyText => "If \"Other,\" please indicate the currency here: ",
            Field::Country => "What country do you work in?",
            Field::Bonus => {
                "How much additional monetary compensation do you get, if any (for example, \
                 bonuses or overtime in an average year)? Please only include monetary \
                 compensation here, not the value of benefits."
            }
        }
    }

    /// Column label after the lower-casing stage.
    pub const fn column(self) -> &'static str {
        match self {
            Field::Age => "how old are you?",
            Field::JobTitle => "job title",
            Field::Salary => {
                "what is your annual salary? (you'll indicate the currency in a later question. \
                 if you are part-time or hourly, please enter an annualized equivalent -- what you \
                 would earn if you worked the job 40 hours a week, 52 weeks a year.)"
            }
            Field::Currency => "please indicate the currency",
            Field::OtherCurrencyText => "if \"other,\" please indicate the currency here: ",
            Field::Country => "what country do you work in?",
            Field::Bonus => {
                "how much additional monetary compensation do you get, if any (for example, \
                 bonuses or overtime in an average year)? please only include monetary \
                 compensation here, not the value of benefits."
            }
        }
    }

    /// Whether the field holds a number once cleaned.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Field::Salary | Field::Bonus)
    }

    /// Short identifier used in logs and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::JobTitle => "job_title",
            Field::Salary => "salary",
            Field::Currency => "currency",
            Field::OtherCurrencyText => "other_currency",
            Field::Country => "country",
            Field::Bonus => "bonus",
        }
    }

    /// Resolves the field from a column label, before or after lower-casing.
    pub fn from_column(label: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.raw_label() == label || field.column() == label)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_is_lowercased_raw_label() {
        for field in Field::ALL {
            assert_eq!(field.raw_label().to_lowercase(), field.column(), "{field}");
        }
    }

    #[test]
    fn string_continuations_keep_single_spaces() {
        assert!(!Field::Salary.raw_label().contains("  "));
        assert!(Field::Salary.raw_label().ends_with("52 weeks a year.)"));
        assert!(Field::OtherCurrencyText.raw_label().ends_with("here: "));
    }

    #[test]
    fn required_excludes_optional_fields() {
        assert!(!Field::REQUIRED.contains(&Field::Bonus));
        assert!(!Field::REQUIRED.contains(&Field::OtherCurrencyText));
    }
}
