//! Required-field enforcement.

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{amount_cells, filter_rows, has_column, string_cells};
use survey_model::Field;

use crate::error::Result;

/// Drops records missing any required field.
///
/// Salary must be present and strictly positive; every other required field
/// must be non-empty after trimming. Fields whose column is absent are not
/// checked.
pub fn enforce_required_fields(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for field in Field::REQUIRED {
        let name = field.column();
        if !has_column(df, name) {
            debug!(field = %field, "column absent, requirement skipped");
            continue;
        }
        if field == Field::Salary {
            for (keep, salary) in keep.iter_mut().zip(amount_cells(df, name)?) {
                *keep &= salary.is_some_and(|value| value > 0.0);
            }
        } else {
            for (keep, cell) in keep.iter_mut().zip(string_cells(df, name)?) {
                *keep &= cell.is_some_and(|value| !value.trim().is_empty());
            }
        }
    }
    Ok(filter_rows(df, &keep)?)
}
