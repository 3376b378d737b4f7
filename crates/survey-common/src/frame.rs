//! Column-wise helpers over Polars data frames.
//!
//! Survey columns are read as strings and converted cell by cell, so these
//! helpers move values between a `DataFrame` and plain vectors.

use polars::prelude::{
    AnyValue, BooleanChunked, DataFrame, NamedFrom, NewChunkedArray, PolarsResult, Series,
};

use crate::polars::{any_to_f64, any_to_string};

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Reads a column as optional strings; nulls stay `None`.
pub fn string_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(match value {
            AnyValue::Null => None,
            other => Some(any_to_string(other)),
        });
    }
    Ok(values)
}

/// Reads a column as amounts; blank or non-numeric cells become `None`.
pub fn amount_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = column.get(idx).unwrap_or(AnyValue::Null);
        values.push(any_to_f64(value));
    }
    Ok(values)
}

/// Replaces (or appends) a nullable string column.
pub fn set_string_cells(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<String>>,
) -> PolarsResult<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Replaces (or appends) a nullable `Float64` column.
pub fn set_amount_cells(df: &mut DataFrame, name: &str, values: Vec<Option<f64>>) -> PolarsResult<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Keeps the rows whose mask entry is `true`.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> PolarsResult<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn};

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("salary".into(), vec![Some("1,000"), None, Some("abc")]).into_column(),
            Series::new("country".into(), vec![Some("Canada"), Some(""), None]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn reads_strings_preserving_nulls() {
        let df = frame();
        let cells = string_cells(&df, "country").unwrap();
        assert_eq!(cells, vec![Some("Canada".to_string()), Some(String::new()), None]);
    }

    #[test]
    fn reads_amounts() {
        let df = frame();
        assert_eq!(amount_cells(&df, "salary").unwrap(), vec![Some(1000.0), None, None]);
        assert!(amount_cells(&df, "bonus").is_err());
    }

    #[test]
    fn replaces_column_and_filters() {
        let mut df = frame();
        set_amount_cells(&mut df, "salary", vec![Some(1.0), Some(2.0), None]).unwrap();
        let salary: &Column = df.column("salary").unwrap();
        assert_eq!(salary.dtype(), &polars::prelude::DataType::Float64);

        let kept = filter_rows(&df, &[true, false, true]).unwrap();
        assert_eq!(kept.height(), 2);
        assert!(has_column(&kept, "country"));
        assert!(!has_column(&kept, "bonus"));
    }
}
