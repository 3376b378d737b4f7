//! Logging setup for the `salary-survey` binary.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that filters and formats them.
//!
//! | level   | what is logged                                             |
//! |---------|------------------------------------------------------------|
//! | `warn`  | partitions or snapshots that could not be written          |
//! | `info`  | stage row counts, salary bounds, files written             |
//! | `debug` | skipped fields, per-partition row counts, rate fallbacks   |

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level; everything else stays at `warn`.
const SURVEY_CRATES: [&str; 8] = [
    "survey_cli",
    "survey_common",
    "survey_ingest",
    "survey_model",
    "survey_normalization",
    "survey_report",
    "survey_standards",
    "survey_transform",
];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the level-derived filter when it is set.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_timestamps: bool,
    pub with_target: bool,
    pub with_ansi: bool,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    /// One JSON object per event, span closes included.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            log_file: None,
        }
    }
}

impl LogConfig {
    /// Filter directive used when `RUST_LOG` is not consulted.
    pub fn directive(&self) -> String {
        let level = self.level_filter.to_string().to_lowercase();
        SURVEY_CRATES
            .iter()
            .fold(String::from("warn"), |mut directive, krate| {
                directive.push_str(&format!(",{krate}={level}"));
                directive
            })
    }

    fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        EnvFilter::new(self.directive())
    }

    fn fmt_layer<W>(&self, writer: W) -> BoxedLayer
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let layer = fmt::layer()
            .with_writer(writer)
            .with_target(self.with_target);
        match (self.format, self.with_timestamps) {
            (LogFormat::Json, _) => layer
                .json()
                .with_span_events(FmtSpan::CLOSE)
                .boxed(),
            (LogFormat::Compact, true) => layer.compact().with_ansi(self.with_ansi).boxed(),
            (LogFormat::Compact, false) => layer
                .compact()
                .with_ansi(self.with_ansi)
                .without_time()
                .boxed(),
            (LogFormat::Pretty, true) => layer.with_ansi(self.with_ansi).boxed(),
            (LogFormat::Pretty, false) => layer.with_ansi(self.with_ansi).without_time().boxed(),
        }
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            config.fmt_layer(Mutex::new(file))
        }
        None => config.fmt_layer(io::stderr),
    };
    tracing_subscriber::registry()
        .with(layer)
        .with(config.env_filter())
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_lists_every_survey_crate() {
        let config = LogConfig {
            level_filter: LevelFilter::DEBUG,
            ..LogConfig::default()
        };
        let directive = config.directive();
        assert!(directive.starts_with("warn,"));
        for krate in SURVEY_CRATES {
            assert!(directive.contains(&format!("{krate}=debug")));
        }
    }

    #[test]
    fn off_level_is_rendered() {
        let config = LogConfig {
            level_filter: LevelFilter::OFF,
            ..LogConfig::default()
        };
        assert!(config.directive().ends_with("survey_transform=off"));
    }
}
