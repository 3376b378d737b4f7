//! Applies the text canonicalizers to survey columns.

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{has_column, set_string_cells, string_cells};
use survey_model::Field;
use survey_normalization::canonicalizer_for;
use survey_standards::SurveyStandards;

use crate::error::Result;

/// Fields canonicalized at the end of a cleaning run, in order.
const TEXT_FIELDS: [Field; 3] = [Field::Currency, Field::OtherCurrencyText, Field::Country];

/// Rewrites currency, other-currency and country cells to canonical form.
///
/// Missing cells stay missing. Returns the number of cells whose value changed.
pub fn canonicalize_text_fields(df: &mut DataFrame, standards: &SurveyStandards) -> Result<usize> {
    let mut changed = 0;
    for field in TEXT_FIELDS {
        let name = field.column();
        let Some(canonicalizer) = canonicalizer_for(field, standards) else {
            continue;
        };
        if !has_column(df, name) {
            debug!(field = %field, "column absent, canonicalization skipped");
            continue;
        }
        let cells = string_cells(df, name)?;
        let canonical: Vec<Option<String>> = cells
            .iter()
            .map(|cell| canonicalizer.canonicalize_cell(cell.as_deref()))
            .collect();
        let field_changed = cells
            .iter()
            .zip(&canonical)
            .filter(|(before, after)| before != after)
            .count();
        debug!(field = %field, changed = field_changed, "canonicalized");
        changed += field_changed;
        set_string_cells(df, name, canonical)?;
    }
    Ok(changed)
}
