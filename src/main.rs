use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;
mod source;

use commands::Command;
use error::{CliError, CliResult};
use taskpulse_core::parse_timestamp;

/// taskpulse - urgency-ranked views over a personal task list
#[derive(Parser)]
#[command(name = "tp")]
#[command(version = "0.1.0")]
#[command(about = "Rank, filter and summarize a personal task list", long_about = None)]
struct Args {
    /// Path to the task JSON file (can also be set via TASKPULSE_FILE env var)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Reference time for scoring, as an ISO-8601 timestamp (defaults to now)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Command>,
}

/// Resolve the reference time from `--now` or the wall clock.
fn resolve_now(cli_now: Option<&str>) -> CliResult<DateTime<Utc>> {
    match cli_now {
        Some(value) => parse_timestamp(value).ok_or_else(|| CliError::InvalidNow {
            value: value.to_string(),
        }),
        None => Ok(Utc::now()),
    }
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=taskpulse_core=debug` - debug logs from the ranking core only
///
/// Defaults to `warn`. Logs go to stderr so they never mix with command output.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e.full_message());
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> CliResult<()> {
    let args = Args::parse();
    let output = run_with_args(&args)?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments and return what to print
fn run_with_args(args: &Args) -> CliResult<String> {
    let Some(cmd) = &args.command else {
        return Ok(
            "Welcome to taskpulse!\nUse 'tp --help' for usage information.".to_string(),
        );
    };

    let now = resolve_now(args.now.as_deref())?;
    let path = source::resolve_tasks_path(args.file.clone());
    let tasks = source::load_tasks(&path, now)?;

    cmd.execute(&tasks, now)
}
