//! Trackerlog - archive tracker data into year/month log files.
//!
//! Main entry point for the `trackerlog` binary.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use trackerlog_cli::{pipeline, Cli, RunOutcome, TrackerlogConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match TrackerlogConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let outcome = RunOutcome::Failure {
                stage: "loading configuration",
                message: err.to_string(),
            };
            return report(outcome);
        }
    };

    let outcome = pipeline::run(cli.month.as_deref(), &config, || Local::now().naive_local());
    report(outcome)
}

fn report(outcome: RunOutcome) -> ExitCode {
    let line = outcome.render(Local::now().naive_local());
    if outcome.is_error() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
    outcome.exit().into()
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(cli.verbose >= 2))
        .init();
}
