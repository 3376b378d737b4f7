//! CLI argument definitions for the salary survey tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use survey_cli::logging::{LogConfig, LogFormat};

use survey_model::PartitionId;
use survey_report::ReportKind;
use survey_transform::check_sigma;

#[derive(Parser)]
#[command(
    name = "salary-survey",
    version,
    about = "Clean a salary survey export and report on it",
    long_about = "Clean a raw salary survey export into per-currency datasets.\n\n\
                  Removes duplicates, incomplete records and salary outliers, \
                  canonicalizes currencies and countries, and reports grouped \
                  salary statistics with USD conversion."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the cleaned per-currency datasets.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".", global = true)]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw export and write the per-currency datasets.
    Clean(CleanArgs),

    /// List the datasets available for reporting.
    Partitions,

    /// Compute and print one report.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw survey export (CSV with a header row).
    #[arg(long = "input", value_name = "CSV", default_value = "./data.csv")]
    pub input: PathBuf,

    /// Salaries further than this many standard deviations from the mean are dropped.
    #[arg(long = "sigma", value_name = "K", default_value_t = 3.0, value_parser = parse_sigma)]
    pub sigma: f64,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Report to produce.
    #[arg(value_enum)]
    pub kind: ReportKindArg,

    /// Dataset to report on: a currency code or ALL.
    #[arg(long = "dataset", value_name = "ID", value_parser = parse_partition)]
    pub dataset: Option<PartitionId>,

    /// Number of groups kept by the job title and country reports.
    #[arg(long = "top", value_name = "N")]
    pub top: Option<usize>,

    /// Save the rendered text under <DATA_DIR>/results_<ID>/.
    #[arg(long = "save")]
    pub save: bool,

    /// Print the computed figures as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

fn parse_sigma(value: &str) -> Result<f64, String> {
    let sigma: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    check_sigma(sigma).map_err(|error| error.to_string())?;
    Ok(sigma)
}

fn parse_partition(value: &str) -> Result<PartitionId, String> {
    if value.trim().is_empty() {
        return Err("dataset identifier must not be empty".to_string());
    }
    Ok(PartitionId::parse(value))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportKindArg {
    JobTitle,
    Age,
    Country,
    CrossCurrency,
    Bonus,
    Summary,
}

impl From<ReportKindArg> for ReportKind {
    fn from(kind: ReportKindArg) -> Self {
        match kind {
            ReportKindArg::JobTitle => ReportKind::JobTitle,
            ReportKindArg::Age => ReportKind::Age,
            ReportKindArg::Country => ReportKind::Country,
            ReportKindArg::CrossCurrency => ReportKind::CrossCurrency,
            ReportKindArg::Bonus => ReportKind::Bonus,
            ReportKindArg::Summary => ReportKind::Summary,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Logging settings; an explicit `--log-level` wins over `-v`/`-q`, and
    /// `RUST_LOG` is honored only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: self
                .log_level
                .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from),
            use_env_filter: !self.verbosity.is_present() && self.log_level.is_none(),
            format: self.log_format.into(),
            with_ansi,
            log_file: self.log_file.clone(),
            ..LogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_arguments_parse() {
        let cli = Cli::try_parse_from([
            "salary-survey",
            "--data-dir",
            "out",
            "report",
            "job-title",
            "--dataset",
            "all",
            "--top",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("out"));
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert!(matches!(args.kind, ReportKindArg::JobTitle));
        assert_eq!(args.dataset, Some(PartitionId::All));
        assert_eq!(args.top, Some(5));
        assert!(!args.save);
    }

    #[test]
    fn clean_defaults() {
        let cli = Cli::try_parse_from(["salary-survey", "clean"]).unwrap();
        let Command::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.input, PathBuf::from("./data.csv"));
        assert_eq!(args.sigma, 3.0);
        assert_eq!(cli.data_dir, PathBuf::from("."));
    }

    #[test]
    fn explicit_log_level_disables_env_filter() {
        let cli = Cli::try_parse_from([
            "salary-survey",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "partitions",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn quiet_default_defers_to_rust_log() {
        let cli = Cli::try_parse_from(["salary-survey", "partitions"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn sigma_must_be_positive_and_finite() {
        for bad in ["0", "-1", "NaN", "inf", "three"] {
            let result = Cli::try_parse_from(["salary-survey", "clean", "--sigma", bad]);
            assert!(result.is_err(), "{bad}");
        }
        let cli = Cli::try_parse_from(["salary-survey", "clean", "--sigma", "2.5"]).unwrap();
        let Command::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.sigma, 2.5);
    }

    #[test]
    fn blank_dataset_is_rejected() {
        let result =
            Cli::try_parse_from(["salary-survey", "report", "age", "--dataset", " "]);
        assert!(result.is_err());
    }
}
