//! Exchange rate snapshot.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StandardsError};

/// Currency answer meaning "not in the list", resolved through the country.
pub const OTHER_CURRENCY: &str = "OTHER";

#[derive(Debug, Deserialize)]
struct RateFile {
    #[serde(default)]
    currencies: BTreeMap<String, f64>,
    #[serde(default)]
    countries: BTreeMap<String, f64>,
}

/// Multipliers that convert an amount to USD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRates {
    currencies: BTreeMap<String, f64>,
    countries: BTreeMap<String, f64>,
}

impl ExchangeRates {
    /// Parses `[currencies]` and `[countries]` sections from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::Parse`] for malformed TOML and
    /// [`StandardsError::InvalidRate`] for any rate that is not a positive,
    /// finite number.
    pub fn from_toml_str(name: &str, source: &str) -> Result<Self> {
        let file: RateFile = toml::from_str(source).map_err(|e| StandardsError::Parse {
            table: name.to_string(),
            message: e.to_string(),
        })?;
        for (key, rate) in file.currencies.iter().chain(file.countries.iter()) {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(StandardsError::InvalidRate {
                    table: name.to_string(),
                    key: key.clone(),
                    rate: *rate,
                });
            }
        }
        Ok(Self {
            currencies: file.currencies,
            countries: file.countries,
        })
    }

    /// Rate for a currency code. Codes are compared in filesystem-safe form,
    /// so `AUD/NZD` finds the `AUD_NZD` entry.
    pub fn currency_rate(&self, code: &str) -> Option<f64> {
        let key = code.trim().replace(['/', '\\'], "_");
        self.currencies.get(&key).copied()
    }

    /// Rate for the local currency of a country.
    pub fn country_rate(&self, country: &str) -> Option<f64> {
        self.countries.get(country.trim()).copied()
    }

    /// Multiplier converting an amount to USD.
    ///
    /// A record whose currency is [`OTHER_CURRENCY`] is converted with its
    /// country's rate. Unknown codes and countries fall back to `1.0`, i.e.
    /// the amount is treated as already in USD.
    pub fn rate(&self, code: Option<&str>, country: Option<&str>) -> f64 {
        let code = code.map(str::trim).unwrap_or("");
        let found = if code == OTHER_CURRENCY {
            country.and_then(|country| self.country_rate(country))
        } else {
            self.currency_rate(code)
        };
        match found {
            Some(rate) => rate,
            None => {
                debug!(currency = code, country = ?country, "no exchange rate, assuming USD");
                1.0
            }
        }
    }

    /// Currency codes in the table, ascending.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.currencies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}
