//! Column label normalization and amount parsing.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::debug;

use survey_common::{amount_cells, has_column, set_amount_cells};
use survey_model::Field;

use crate::error::{Result, TransformError};

/// Lower-cases every column label in place.
///
/// Returns the known fields with no column in the export, in [`Field::ALL`] order.
///
/// # Errors
///
/// [`TransformError::DuplicateColumn`] when two labels differ only by case.
pub fn lowercase_columns(df: &mut DataFrame) -> Result<Vec<Field>> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut targets: HashMap<String, &str> = HashMap::with_capacity(names.len());
    for name in &names {
        if let Some(first) = targets.insert(name.to_lowercase(), name) {
            return Err(TransformError::DuplicateColumn {
                first: first.to_string(),
                second: name.clone(),
            });
        }
    }
    let mut present = Vec::with_capacity(Field::ALL.len());
    for name in &names {
        let lower = name.to_lowercase();
        match Field::from_column(&lower) {
            Some(field) => present.push(field),
            None => debug!(column = %lower, "column not used by any cleaning stage"),
        }
        if &lower != name {
            df.rename(name, lower.into())?;
        }
    }
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| !present.contains(field))
        .collect();
    for field in &missing {
        debug!(field = %field, "column absent from export");
    }
    Ok(missing)
}

/// Parses the salary column to `Float64`; unparseable cells become null.
///
/// Returns the number of cells that were present but not numeric.
pub fn parse_salary(df: &mut DataFrame) -> Result<usize> {
    let name = Field::Salary.column();
    if !has_column(df, name) {
        debug!(field = %Field::Salary, "column absent, salary parsing skipped");
        return Ok(0);
    }
    let missing_before = df.column(name)?.null_count();
    let values = amount_cells(df, name)?;
    let missing_after = values.iter().filter(|value| value.is_none()).count();
    set_amount_cells(df, name, values)?;
    Ok(missing_after.saturating_sub(missing_before))
}

/// Parses the bonus column to `Float64`, defaulting missing or
/// non-numeric cells to `0`.
pub fn parse_bonus(df: &mut DataFrame) -> Result<usize> {
    let name = Field::Bonus.column();
    if !has_column(df, name) {
        debug!(field = %Field::Bonus, "column absent, bonus parsing skipped");
        return Ok(0);
    }
    let values = amount_cells(df, name)?;
    let defaulted = values.iter().filter(|value| value.is_none()).count();
    let values = values
        .into_iter()
        .map(|value| Some(value.unwrap_or(0.0)))
        .collect();
    set_amount_cells(df, name, values)?;
    Ok(defaulted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn lowercases_labels() {
        let mut df = df!("Job title" => ["Engineer"], "What country do you work in?" => ["US"])
            .unwrap();
        lowercase_columns(&mut df).unwrap();
        assert!(has_column(&df, Field::JobTitle.column()));
        assert!(has_column(&df, Field::Country.column()));
    }

    #[test]
    fn reports_fields_without_a_column() {
        let mut df = df!(
            "Job title" => ["Engineer"],
            "What country do you work in?" => ["US"],
            "Anything else?" => ["no"],
        )
        .unwrap();
        let missing = lowercase_columns(&mut df).unwrap();
        assert_eq!(
            missing,
            vec![
                Field::Age,
                Field::Salary,
                Field::Currency,
                Field::OtherCurrencyText,
                Field::Bonus,
            ]
        );
        assert!(has_column(&df, "anything else?"));
    }

    #[test]
    fn rejects_case_only_collisions() {
        let mut df = df!("Age" => ["1"], "age" => ["2"]).unwrap();
        let result = lowercase_columns(&mut df);
        assert!(matches!(result, Err(TransformError::DuplicateColumn { .. })));
    }

    #[test]
    fn salary_strips_thousands_separators() {
        let mut df = df!(Field::Salary.column() => [Some("3,000,000"), Some("n/a"), None]).unwrap();
        let unparseable = parse_salary(&mut df).unwrap();
        let salary = amount_cells(&df, Field::Salary.column()).unwrap();
        assert_eq!(salary, vec![Some(3_000_000.0), None, None]);
        assert_eq!(unparseable, 1);
    }

    #[test]
    fn bonus_defaults_to_zero() {
        let mut df = df!(Field::Bonus.column() => [Some("1,500"), Some("lots"), None]).unwrap();
        let defaulted = parse_bonus(&mut df).unwrap();
        let bonus = amount_cells(&df, Field::Bonus.column()).unwrap();
        assert_eq!(bonus, vec![Some(1500.0), Some(0.0), Some(0.0)]);
        assert_eq!(defaulted, 2);
    }

    #[test]
    fn absent_columns_are_skipped() {
        let mut df = df!("other" => ["x"]).unwrap();
        assert_eq!(parse_salary(&mut df).unwrap(), 0);
        assert_eq!(parse_bonus(&mut df).unwrap(), 0);
        assert_eq!(df.width(), 1);
    }
}
