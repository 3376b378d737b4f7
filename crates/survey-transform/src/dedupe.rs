use std::collections::HashSet;

use polars::prelude::DataFrame;

use survey_common::{filter_rows, string_cells};

use crate::error::Result;

/// Removes rows that repeat an earlier row in every column.
///
/// The first occurrence is kept and row order is preserved. Values are
/// compared as read, so a missing cell only matches another missing cell.
pub fn deduplicate(df: &DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df.clone());
    }
    let mut columns = Vec::with_capacity(df.width());
    for name in df.get_column_names() {
        columns.push(string_cells(df, name.as_str())?);
    }
    let mut seen: HashSet<Vec<Option<&str>>> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<Option<&str>> = columns
            .iter()
            .map(|cells| cells[idx].as_deref())
            .collect();
        keep.push(seen.insert(row));
    }
    Ok(filter_rows(df, &keep)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn keeps_first_copy_in_order() {
        let df = df!(
            "job" => ["a", "b", "a", "c", "b"],
            "pay" => ["1", "2", "1", "3", "2"],
        )
        .unwrap();
        let deduped = deduplicate(&df).unwrap();
        let jobs = string_cells(&deduped, "job").unwrap();
        assert_eq!(
            jobs,
            vec![Some("a".to_string()), Some("b".to_string()), Some("c".to_string())]
        );
    }

    #[test]
    fn rows_differing_in_one_column_are_distinct() {
        let df = df!(
            "job" => ["a", "a"],
            "pay" => [Some("1"), None],
        )
        .unwrap();
        assert_eq!(deduplicate(&df).unwrap().height(), 2);
    }

    #[test]
    fn missing_cells_compare_equal() {
        let df = df!(
            "job" => ["a", "a"],
            "pay" => [None::<&str>, None],
        )
        .unwrap();
        assert_eq!(deduplicate(&df).unwrap().height(), 1);
    }
}
