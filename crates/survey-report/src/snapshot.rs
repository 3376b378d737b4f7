//! Persisting rendered reports.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::render::RenderedReport;

/// Width of the `=` rules framing a snapshot header.
pub const SNAPSHOT_RULE_WIDTH: usize = 80;

/// `<data_dir>/results_<ID>/<Title>_<YYYYmmdd_HHMMSS>.txt`.
pub fn snapshot_path(data_dir: &Path, report: &RenderedReport, generated: NaiveDateTime) -> PathBuf {
    let title = report.title().replace([' ', '/'], "_");
    data_dir
        .join(format!("results_{}", report.partition.safe_name()))
        .join(format!("{title}_{}.txt", generated.format("%Y%m%d_%H%M%S")))
}

fn snapshot_text(report: &RenderedReport, generated: NaiveDateTime) -> String {
    let rule = "=".repeat(SNAPSHOT_RULE_WIDTH);
    format!(
        "{rule}\n{} - {}\nGenerated: {}\n{rule}\n\n{}\n",
        report.title().to_uppercase(),
        report.partition,
        generated.format("%Y-%m-%d %H:%M:%S"),
        report.body.trim_end()
    )
}

/// Writes a report snapshot, creating the results folder when needed.
pub fn save_snapshot(
    data_dir: &Path,
    report: &RenderedReport,
    generated: NaiveDateTime,
) -> Result<PathBuf> {
    let path = snapshot_path(data_dir, report, generated);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::SnapshotWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(&path, snapshot_text(report, generated)).map_err(|source| {
        ReportError::SnapshotWrite {
            path: path.clone(),
            source,
        }
    })?;
    info!(path = %path.display(), "report saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use survey_model::PartitionId;

    use crate::render::ReportKind;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    fn report() -> RenderedReport {
        RenderedReport {
            kind: ReportKind::Age,
            partition: PartitionId::parse("AUD/NZD"),
            body: "Salary Statistics by Age Group\n".to_string(),
        }
    }

    #[test]
    fn path_uses_safe_partition_and_timestamp() {
        let path = snapshot_path(Path::new("/data"), &report(), generated());
        assert_eq!(
            path,
            PathBuf::from("/data/results_AUD_NZD/Age_vs_Salary_20240309_140507.txt")
        );
    }

    #[test]
    fn text_has_banner() {
        let text = snapshot_text(&report(), generated());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "AGE VS SALARY - AUD/NZD");
        assert_eq!(lines[2], "Generated: 2024-03-09 14:05:07");
        assert_eq!(lines[3], "=".repeat(80));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Salary Statistics by Age Group");
    }
}
