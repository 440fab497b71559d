//! CLI commands for taskpulse
//!
//! This module contains all subcommand implementations for the tp CLI.

pub mod list;
pub mod show;
pub mod stats;

pub use list::ListCommand;
pub use show::ShowCommand;
pub use stats::StatsCommand;

use crate::error::CliResult;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use taskpulse_core::Task;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tasks, filtered and ranked
    List(ListCommand),
    /// Show one task with its score breakdown
    Show(ShowCommand),
    /// Summarize the task collection
    Stats(StatsCommand),
}

impl Command {
    /// Execute the command against the loaded tasks.
    ///
    /// # Arguments
    ///
    /// * `tasks` - Every task from the task file, already scored
    /// * `now` - Reference time for scoring and overdue checks
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the command execution fails.
    pub fn execute(&self, tasks: &[Task], now: DateTime<Utc>) -> CliResult<String> {
        match self {
            Command::List(cmd) => cmd.execute(tasks, now),
            Command::Show(cmd) => cmd.execute(tasks, now),
            Command::Stats(cmd) => cmd.execute(tasks, now),
        }
    }
}
