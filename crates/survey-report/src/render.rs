//! Plain-text presentation of report results.

use std::fmt::Write as _;

use comfy_table::presets::NOTHING;
use comfy_table::{CellAlignment, Table};
use serde::Serialize;

use survey_model::{AggregationTable, CurrencyBasis, Grouping, PartitionId, ValueKind};

use crate::bonus::BonusStatistics;
use crate::summary::SummaryStatistics;

/// The reports the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    JobTitle,
    Age,
    Country,
    CrossCurrency,
    Bonus,
    Summary,
}

impl ReportKind {
    pub const fn title(self) -> &'static str {
        match self {
            ReportKind::JobTitle => "Salary Benchmarking",
            ReportKind::Age => "Age vs Salary",
            ReportKind::Country => "Geographic Analysis",
            ReportKind::CrossCurrency => "Cross-Currency Comparison",
            ReportKind::Bonus => "Bonus Analysis",
            ReportKind::Summary => "Summary Statistics",
        }
    }

    /// Whether the report reads a single selected dataset.
    pub const fn needs_dataset(self) -> bool {
        !matches!(self, ReportKind::CrossCurrency)
    }
}

/// Report text together with what it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub kind: ReportKind,
    pub partition: PartitionId,
    pub body: String,
}

impl RenderedReport {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Two decimals with thousands separators: `1234567.891` -> `1,234,567.89`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2}", value.abs());
    let (whole, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{}.{fraction}", group_digits(whole))
}

fn format_count(value: usize) -> String {
    group_digits(&value.to_string())
}

fn value_noun(value: ValueKind) -> &'static str {
    match value {
        ValueKind::Salary => "salary",
        ValueKind::Bonus => "bonus",
    }
}

fn basis_note(basis: &CurrencyBasis, noun: &str) -> String {
    match basis {
        CurrencyBasis::UsdConverted => {
            format!("Note: All {noun} amounts have been converted to USD for fair comparison")
        }
        CurrencyBasis::Native(code) => format!("Note: All {noun} amounts shown are in {code}"),
    }
}

fn headline(table: &AggregationTable) -> String {
    let top = table.top_n.map(|n| format!("Top {n} ")).unwrap_or_default();
    match table.grouping {
        Grouping::JobTitle => format!("{top}Jobs by Median Salary"),
        Grouping::Country => format!("{top}Countries by Median Salary"),
        Grouping::Age => "Salary Statistics by Age Group".to_string(),
        Grouping::OriginalCurrency => "Salary Statistics by Original Currency".to_string(),
    }
}

/// Borderless table: first column left-aligned, the rest right-aligned two spaces apart.
fn stats_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    for (idx, column) in table.column_iter_mut().enumerate() {
        if idx == 0 {
            column.set_padding((0, 0));
        } else {
            column
                .set_padding((2, 0))
                .set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Renders a grouped statistics table with its title, currency and note lines.
pub fn render_table(table: &AggregationTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", headline(table));
    if table.grouping == Grouping::OriginalCurrency {
        let _ = writeln!(out, "Currency: USD (all values converted)");
        let _ = writeln!(
            out,
            "Note: All original currency salaries have been converted to USD using current exchange rates"
        );
    } else {
        let _ = writeln!(out, "Currency: {}", table.basis);
        let _ = writeln!(out, "{}", basis_note(&table.basis, value_noun(table.value)));
    }
    out.push('\n');

    if table.is_empty() {
        let min = table.grouping.min_count();
        if min > 0 {
            let _ = writeln!(out, "No group has at least {min} responses.");
        } else {
            let _ = writeln!(out, "No data.");
        }
        return out;
    }

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            vec![
                row.key.clone(),
                row.count.to_string(),
                format!("{:.2}", row.mean),
                format!("{:.2}", row.median),
                format!("{:.2}", row.min),
                format!("{:.2}", row.max),
                row.std_dev.map_or_else(|| "-".to_string(), |sd| format!("{sd:.2}")),
            ]
        })
        .collect();
    let stats = stats_table(
        &[table.grouping.key_label(), "count", "mean", "median", "min", "max", "std"],
        rows,
    );
    let _ = writeln!(out, "{}", stats.trim_fmt());
    out
}

/// Renders bonus statistics.
pub fn render_bonus(stats: &BonusStatistics) -> String {
    let unit = stats.basis.unit();
    let mut out = String::new();
    let _ = writeln!(out, "Bonus Statistics");
    let _ = writeln!(out, "Currency: {}", stats.basis);
    let _ = writeln!(out, "{}", basis_note(&stats.basis, "bonus"));
    out.push('\n');
    let _ = writeln!(out, "Total respondents: {}", format_count(stats.respondents));
    let _ = writeln!(
        out,
        "Respondents with bonus: {} ({:.1}%)",
        format_count(stats.with_bonus),
        stats.with_bonus_pct
    );
    let _ = writeln!(out, "Median bonus (all): {} {unit}", format_amount(stats.median_all));
    match stats.median_positive {
        Some(median) => {
            let _ = writeln!(out, "Median bonus (if >0): {} {unit}", format_amount(median));
        }
        None => {
            let _ = writeln!(out, "Median bonus (if >0): n/a");
        }
    }
    let _ = writeln!(out, "Mean bonus (all): {} {unit}", format_amount(stats.mean_all));
    let _ = writeln!(out, "Max bonus: {} {unit}", format_amount(stats.max));
    out
}

/// Renders the dataset overview.
pub fn render_summary(stats: &SummaryStatistics) -> String {
    let unit = stats.basis.unit();
    let amount = |value: f64| format!("{} {unit}", format_amount(value));
    let mut out = String::new();
    let _ = writeln!(out, "Dataset Overview");
    let _ = writeln!(out, "Currency: {}", stats.basis);
    out.push('\n');
    let _ = writeln!(out, "Total records: {}", format_count(stats.total_records));
    let _ = writeln!(out, "Unique job titles: {}", format_count(stats.unique_job_titles));
    let _ = writeln!(out, "Unique countries: {}", format_count(stats.unique_countries));
    out.push('\n');
    let _ = writeln!(out, "Salary Statistics (all amounts in {unit}):");
    let _ = writeln!(out, "  Minimum: {}", amount(stats.salary_min));
    let _ = writeln!(out, "  25th percentile: {}", amount(stats.salary_q1));
    let _ = writeln!(out, "  Median: {}", amount(stats.salary_median));
    let _ = writeln!(out, "  Mean: {}", amount(stats.salary_mean));
    let _ = writeln!(out, "  75th percentile: {}", amount(stats.salary_q3));
    let _ = writeln!(
        out,
        "  Maximum: {} ({} from {})",
        amount(stats.salary_max),
        stats.max_job_title.as_deref().unwrap_or("unknown job"),
        stats.max_country.as_deref().unwrap_or("unknown country")
    );
    match stats.salary_std_dev {
        Some(sd) => {
            let _ = writeln!(out, "  Standard deviation: {}", amount(sd));
        }
        None => {
            let _ = writeln!(out, "  Standard deviation: n/a");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-52_000.0), "-52,000.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(27_954), "27,954");
    }

    #[test]
    fn stats_table_aligns_columns() {
        let table = stats_table(
            &["Key", "n"],
            vec![
                vec!["long key".to_string(), "5".to_string()],
                vec!["k".to_string(), "10".to_string()],
            ],
        );
        assert_eq!(table.trim_fmt(), "Key        n\nlong key   5\nk         10");
    }
}
