//! USD conversion of report amounts.

use tracing::debug;

use survey_model::Field;
use survey_standards::ExchangeRates;

use crate::dataset::LoadedDataset;
use crate::error::Result;

/// Converts `amounts` to the dataset's reporting basis.
///
/// Native datasets are returned unchanged. For a USD-converted basis each
/// amount is multiplied by `rates.rate(currency, country)` of its own row.
pub(crate) fn to_basis(
    dataset: &LoadedDataset,
    amounts: Vec<Option<f64>>,
    rates: &ExchangeRates,
) -> Result<Vec<Option<f64>>> {
    if !dataset.basis().is_converted() {
        return Ok(amounts);
    }
    let currencies = dataset.text(Field::Currency)?;
    let countries = dataset.text_or_missing(Field::Country)?;
    debug!(rows = amounts.len(), "converting amounts to USD");
    Ok(amounts
        .into_iter()
        .zip(currencies.iter().zip(&countries))
        .map(|(amount, (currency, country))| {
            amount.map(|value| value * rates.rate(currency.as_deref(), country.as_deref()))
        })
        .collect())
}
