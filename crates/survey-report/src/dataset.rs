use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use survey_common::{amount_cells, has_column, string_cells};
use survey_ingest::load_partition;
use survey_model::{CurrencyBasis, Field, PartitionId};

use crate::error::{ReportError, Result};

/// A partition loaded for reporting.
///
/// Every report takes the dataset explicitly; nothing is cached between
/// report calls.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    partition: PartitionId,
    frame: DataFrame,
}

impl LoadedDataset {
    pub fn new(partition: PartitionId, frame: DataFrame) -> Self {
        Self { partition, frame }
    }

    /// Loads a persisted partition from `dir`.
    pub fn load(dir: &Path, partition: &PartitionId) -> Result<Self> {
        let frame = load_partition(dir, partition)?;
        info!(partition = %partition, rows = frame.height(), "dataset loaded");
        Ok(Self::new(partition.clone(), frame))
    }

    pub fn partition(&self) -> &PartitionId {
        &self.partition
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn has_field(&self, field: Field) -> bool {
        has_column(&self.frame, field.column())
    }

    /// Figures from the combined partition are converted to USD whenever the
    /// records still carry their currency.
    pub fn basis(&self) -> CurrencyBasis {
        if self.partition.is_all() && self.has_field(Field::Currency) {
            CurrencyBasis::UsdConverted
        } else {
            CurrencyBasis::Native(self.partition.to_string())
        }
    }

    fn require(&self, field: Field) -> Result<&str> {
        let name = field.column();
        if has_column(&self.frame, name) {
            Ok(name)
        } else {
            Err(ReportError::MissingColumn {
                column: name.to_string(),
                partition: self.partition.to_string(),
            })
        }
    }

    pub(crate) fn text(&self, field: Field) -> Result<Vec<Option<String>>> {
        let name = self.require(field)?;
        Ok(string_cells(&self.frame, name)?)
    }

    /// Text cells of an optional column; all `None` when the column is absent.
    pub(crate) fn text_or_missing(&self, field: Field) -> Result<Vec<Option<String>>> {
        if self.has_field(field) {
            self.text(field)
        } else {
            Ok(vec![None; self.height()])
        }
    }

    pub(crate) fn amounts(&self, field: Field) -> Result<Vec<Option<f64>>> {
        let name = self.require(field)?;
        Ok(amount_cells(&self.frame, name)?)
    }
}
