//! Raw survey export loading.

use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

const BOM: char = '\u{feff}';

/// Reads a comma-separated file into a `DataFrame` of nullable strings.
///
/// No type inference is performed: every column is `String`, so values are
/// compared exactly as exported. Header labels are kept verbatim apart from a
/// leading byte-order mark.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if metadata.len() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    strip_bom(&mut df)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded CSV"
    );
    Ok(df)
}

fn strip_bom(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter_map(|name| {
            name.strip_prefix(BOM)
                .map(|stripped| (name.to_string(), stripped.to_string()))
        })
        .collect();
    for (old, new) in renames {
        df.rename(&old, new.into())?;
    }
    Ok(())
}
