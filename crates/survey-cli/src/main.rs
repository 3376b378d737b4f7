//! `salary-survey` command-line entry point.

use clap::Parser;

use survey_cli::logging::init_logging;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{emit_report, run_clean_command, run_partitions, run_report_command};
use crate::summary::{print_clean_summary, print_partitions};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    std::process::exit(run(&cli));
}

/// Runs the selected command and returns the process exit code.
fn run(cli: &Cli) -> i32 {
    let result = match &cli.command {
        Command::Clean(args) => run_clean_command(args, &cli.data_dir).map(|outcome| {
            print_clean_summary(&outcome);
            !outcome.has_errors()
        }),
        Command::Partitions => run_partitions(&cli.data_dir).map(|listing| {
            print_partitions(&listing);
            true
        }),
        Command::Report(args) => run_report_command(args, &cli.data_dir)
            .and_then(|outcome| emit_report(&outcome, args, &cli.data_dir)),
    };
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}
