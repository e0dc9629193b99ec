//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Trackerlog - move tracker data to log files grouped by year and month.
///
/// Runs once per invocation, archives one calendar month of tracker records,
/// and exits. Intended to be triggered by an external scheduler.
#[derive(Debug, Parser)]
#[command(name = "trackerlog", author, version, about)]
pub struct Cli {
    /// Month to process (e.g. 2024-10); defaults to the previous month
    #[arg(long, env = "TRACKERLOG_MONTH", value_name = "YYYY-MM")]
    pub month: Option<String>,

    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "TRACKERLOG_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // TRACKERLOG_MONTH is read from the process environment, which is
    // shared across test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[test]
    fn parses_month_option() {
        let cli = Cli::parse_from(["trackerlog", "--month", "2024-10"]);
        assert_eq!(cli.month.as_deref(), Some("2024-10"));
        assert!(cli.config.is_none());
    }

    #[test]
    fn month_defaults_to_absent() {
        let _env = env_lock();
        std::env::remove_var("TRACKERLOG_MONTH");
        let cli = Cli::parse_from(["trackerlog"]);
        assert!(cli.month.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn month_falls_back_to_env() {
        let _env = env_lock();
        std::env::set_var("TRACKERLOG_MONTH", "2023-05");
        let cli = Cli::parse_from(["trackerlog"]);
        std::env::remove_var("TRACKERLOG_MONTH");
        assert_eq!(cli.month.as_deref(), Some("2023-05"));
    }

    #[test]
    fn explicit_month_flag_wins_over_env() {
        let _env = env_lock();
        std::env::set_var("TRACKERLOG_MONTH", "2023-05");
        let cli = Cli::parse_from(["trackerlog", "--month", "2024-10"]);
        std::env::remove_var("TRACKERLOG_MONTH");
        assert_eq!(cli.month.as_deref(), Some("2024-10"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
