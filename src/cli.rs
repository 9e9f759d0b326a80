use crate::config::JobFile;
use crate::constants::{
    HOURS_HELP_TEXT, MINUTES_HELP_TEXT, ROUND_VALUE_HELP_TEXT, SECONDS_HELP_TEXT,
    TOTAL_SECONDS_HELP_TEXT,
};
use crate::duration::Duration;
use crate::errors::{AppError, AppResult};
use crate::rounding::round_two_decimals;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the requested formatting.
///
/// Four subcommands are handled:
/// - `span`: format a duration built from explicit hour/minute/second components
/// - `seconds`: decompose a total-second count and format the result
/// - `round`: round a floating-point value to two decimal places
/// - `toml`: run a batch of jobs from a TOML file
///
/// Results go to stdout; running without a subcommand prints help.
pub fn cli() -> AppResult<()> {
    let cmd = build_command();

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("span", sub)) => {
            let duration = Duration::new(
                *sub.get_one::<u64>("hours").expect("hours has default_value"),
                *sub.get_one::<u64>("minutes")
                    .expect("minutes has default_value"),
                *sub.get_one::<u64>("seconds")
                    .expect("seconds has default_value"),
            );
            println!("{}", duration.format());
        }
        Some(("seconds", sub)) => {
            let total = *sub
                .get_one::<u64>("total_seconds")
                .expect("total_seconds is required");
            println!("{}", Duration::from_seconds(total).format());
        }
        Some(("round", sub)) => {
            let value = *sub.get_one::<f64>("value").expect("value is required");
            println!("{}", round_two_decimals(value));
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let jobs = JobFile::from_toml_file(config_path)?;
            run_jobs(&jobs);
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn build_command() -> Command<'static> {
    Command::new("spanfmt")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("span")
                .about("Format a span given as hour/minute/second components")
                .after_help(
                    "Components are rendered exactly as given, without carrying.\nExample:\n  spanfmt span -M 5 -S 9",
                )
                .arg(
                    Arg::new("hours")
                        .short('H')
                        .long("hours")
                        .help(HOURS_HELP_TEXT)
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("minutes")
                        .short('M')
                        .long("minutes")
                        .help(MINUTES_HELP_TEXT)
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("seconds")
                        .short('S')
                        .long("seconds")
                        .help(SECONDS_HELP_TEXT)
                        .default_value("0")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("seconds")
                .about("Decompose a total-second count and format it")
                .arg(
                    Arg::new("total_seconds")
                        .help(TOTAL_SECONDS_HELP_TEXT)
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("round")
                .about("Round a value to two decimal places")
                .arg(
                    Arg::new("value")
                        .help(ROUND_VALUE_HELP_TEXT)
                        .required(true)
                        .allow_hyphen_values(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run formatting jobs from a TOML file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML job file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn run_jobs(jobs: &JobFile) {
    info!(
        durations = jobs.durations.len(),
        total_seconds = jobs.total_seconds.len(),
        round_values = jobs.round_values.len(),
        "Running job file"
    );

    for duration in &jobs.durations {
        println!("{}", duration.format());
    }
    for &total in &jobs.total_seconds {
        println!("{}", Duration::from_seconds(total).format());
    }
    for &value in &jobs.round_values {
        println!("{}", round_two_decimals(value));
    }

    info!(jobs_processed = jobs.len(), "All jobs completed");
}
