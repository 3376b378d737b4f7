//! Static reference tables for the salary survey.
//!
//! The alias tables and the exchange rate snapshot live as TOML files under
//! `data/`, are compiled into the binary and parsed once per process.
//!
//! ```
//! use survey_standards::default_standards;
//!
//! let standards = default_standards()?;
//! assert_eq!(standards.country_aliases.get("usa"), Some("United States"));
//! assert_eq!(standards.rates.currency_rate("EUR"), Some(1.164));
//! # Ok::<(), survey_standards::StandardsError>(())
//! ```

mod aliases;
mod error;
mod rates;
mod registry;

pub use aliases::{AliasTable, alias_key};
pub use error::{Result, StandardsError};
pub use rates::{ExchangeRates, OTHER_CURRENCY};
pub use registry::{SurveyStandards, default_standards};
