//! Process-wide default tables.

use std::sync::LazyLock;

use crate::aliases::AliasTable;
use crate::error::Result;
use crate::rates::ExchangeRates;

const CURRENCY_ALIASES: &str = include_str!("../data/currency_aliases.toml");
const OTHER_CURRENCY_ALIASES: &str = include_str!("../data/other_currency_aliases.toml");
const COUNTRY_ALIASES: &str = include_str!("../data/country_aliases.toml");
const EXCHANGE_RATES: &str = include_str!("../data/exchange_rates.toml");

/// Every reference table the pipeline and the reports consult.
#[derive(Debug, Clone)]
pub struct SurveyStandards {
    /// Variants of the primary currency answer (`US` -> `USD`).
    pub currency_aliases: AliasTable,
    /// Free-text "other currency" answers (`chinese yuan` -> `CNY`).
    pub other_currency_aliases: AliasTable,
    /// Country spellings (`u.s.a.` -> `United States`).
    pub country_aliases: AliasTable,
    pub rates: ExchangeRates,
}

impl SurveyStandards {
    /// Parses the tables compiled into the crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            currency_aliases: AliasTable::from_toml_str("currency_aliases", CURRENCY_ALIASES)?,
            other_currency_aliases: AliasTable::from_toml_str(
                "other_currency_aliases",
                OTHER_CURRENCY_ALIASES,
            )?,
            country_aliases: AliasTable::from_toml_str("country_aliases", COUNTRY_ALIASES)?,
            rates: ExchangeRates::from_toml_str("exchange_rates", EXCHANGE_RATES)?,
        })
    }
}

static DEFAULT_STANDARDS: LazyLock<Result<SurveyStandards>> =
    LazyLock::new(SurveyStandards::embedded);

/// Returns the embedded tables, parsed on first use.
///
/// # Errors
///
/// Returns the parse or validation error of the embedded data, if any.
pub fn default_standards() -> Result<&'static SurveyStandards> {
    DEFAULT_STANDARDS.as_ref().map_err(Clone::clone)
}
