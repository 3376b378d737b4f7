//! Alias-based canonicalization of currency and country answers.

use survey_model::Field;
use survey_standards::{AliasTable, SurveyStandards};

use crate::text::{collapse_whitespace, is_blank, title_case};

/// Casing applied to values no alias matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRule {
    /// `eur` -> `EUR`.
    Upper,
    /// `new zealand` -> `New Zealand`.
    Title,
}

impl CaseRule {
    fn apply(self, value: &str) -> String {
        match self {
            CaseRule::Upper => value.to_uppercase(),
            CaseRule::Title => title_case(value),
        }
    }
}

/// Resolves free text to a canonical value.
///
/// Lookup is case-insensitive on the trimmed input. Blank input is passed
/// through untouched so a missing answer never turns into an invented value.
#[derive(Debug, Clone, Copy)]
pub struct TextCanonicalizer<'a> {
    aliases: &'a AliasTable,
    case: CaseRule,
    collapse_whitespace: bool,
}

impl<'a> TextCanonicalizer<'a> {
    pub fn new(aliases: &'a AliasTable, case: CaseRule) -> Self {
        Self {
            aliases,
            case,
            collapse_whitespace: false,
        }
    }

    /// Collapse internal whitespace runs before lookup and casing.
    #[must_use]
    pub fn with_collapsed_whitespace(mut self, enable: bool) -> Self {
        self.collapse_whitespace = enable;
        self
    }

    /// Canonicalizer for the primary currency answer.
    pub fn currency(aliases: &'a AliasTable) -> Self {
        Self::new(aliases, CaseRule::Upper)
    }

    /// Canonicalizer for the free-text "other currency" answer.
    pub fn other_currency(aliases: &'a AliasTable) -> Self {
        Self::new(aliases, CaseRule::Upper)
    }

    /// Canonicalizer for country names.
    pub fn country(aliases: &'a AliasTable) -> Self {
        Self::new(aliases, CaseRule::Title).with_collapsed_whitespace(true)
    }

    /// Returns the canonical form of `value`.
    ///
    /// An alias that maps to the empty string yields `""`: the answer is
    /// known to be invalid and stays unrecognized downstream.
    pub fn canonicalize(&self, value: &str) -> String {
        if is_blank(value) {
            return value.to_string();
        }
        let cleaned = if self.collapse_whitespace {
            collapse_whitespace(value)
        } else {
            value.trim().to_string()
        };
        match self.aliases.get(&cleaned) {
            Some(canonical) => canonical.to_string(),
            None => self.case.apply(&cleaned),
        }
    }

    /// Canonicalizes an optional cell; missing stays missing.
    pub fn canonicalize_cell(&self, value: Option<&str>) -> Option<String> {
        value.map(|value| self.canonicalize(value))
    }
}

/// Returns the canonicalizer bound to a field, if the field has one.
pub fn canonicalizer_for(field: Field, standards: &SurveyStandards) -> Option<TextCanonicalizer<'_>> {
    match field {
        Field::Currency => Some(TextCanonicalizer::currency(&standards.currency_aliases)),
        Field::OtherCurrencyText => Some(TextCanonicalizer::other_currency(
            &standards.other_currency_aliases,
        )),
        Field::Country => Some(TextCanonicalizer::country(&standards.country_aliases)),
        Field::Age | Field::JobTitle | Field::Salary | Field::Bonus => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> AliasTable {
        AliasTable::from_pairs("test", pairs.iter().copied()).unwrap()
    }

    #[test]
    fn alias_wins_over_case_rule() {
        let aliases = table(&[("pounds", "GBP")]);
        let canonicalizer = TextCanonicalizer::currency(&aliases);
        assert_eq!(canonicalizer.canonicalize(" Pounds "), "GBP");
        assert_eq!(canonicalizer.canonicalize(" eur "), "EUR");
    }

    #[test]
    fn blank_input_passes_through() {
        let aliases = table(&[]);
        let canonicalizer = TextCanonicalizer::country(&aliases);
        assert_eq!(canonicalizer.canonicalize(""), "");
        assert_eq!(canonicalizer.canonicalize("   "), "   ");
        assert_eq!(canonicalizer.canonicalize_cell(None), None);
    }

    #[test]
    fn country_collapses_whitespace_before_casing() {
        let aliases = table(&[]);
        let canonicalizer = TextCanonicalizer::country(&aliases);
        assert_eq!(canonicalizer.canonicalize("new    zealand"), "New Zealand");
    }

    #[test]
    fn currency_keeps_internal_whitespace() {
        let aliases = table(&[]);
        let canonicalizer = TextCanonicalizer::currency(&aliases);
        assert_eq!(canonicalizer.canonicalize("aud  nzd"), "AUD  NZD");
    }

    #[test]
    fn empty_alias_marks_invalid_answer() {
        let aliases = table(&[("equity", "")]);
        let canonicalizer = TextCanonicalizer::other_currency(&aliases);
        assert_eq!(canonicalizer.canonicalize("Equity"), "");
    }

    #[test]
    fn only_text_fields_have_canonicalizers() {
        let standards = SurveyStandards::embedded().unwrap();
        assert!(canonicalizer_for(Field::Country, &standards).is_some());
        assert!(canonicalizer_for(Field::Salary, &standards).is_none());
        assert!(canonicalizer_for(Field::JobTitle, &standards).is_none());
    }
}
