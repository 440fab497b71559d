//! Show command for a single task
//!
//! Implements the `tp show` command: print one task with the breakdown of
//! its urgency score at the reference time.

use crate::error::CliResult;
use crate::output::format_task_detail;
use chrono::{DateTime, Utc};
use clap::Args;
use taskpulse_core::{Task, breakdown, find_task};

/// Show one task and its score breakdown
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Task ID
    #[arg(required = true)]
    pub id: String,
}

impl ShowCommand {
    /// Execute the show command.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) if no task has this id.
    pub fn execute(&self, tasks: &[Task], now: DateTime<Utc>) -> CliResult<String> {
        let task = find_task(tasks, &self.id)?;
        Ok(format_task_detail(task, &breakdown(task, now), now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use chrono::{Duration, TimeZone};
    use taskpulse_core::{CoreError, NewTask, Priority};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
    }

    fn tasks() -> Vec<Task> {
        vec![
            NewTask::new("Ship release", now() - Duration::hours(2))
                .with_priority(Priority::Critical)
                .build_with_id("rel", "u", now())
                .unwrap(),
        ]
    }

    #[test]
    fn test_show_existing_task() {
        let cmd = ShowCommand {
            id: "rel".to_string(),
        };
        let output = cmd.execute(&tasks(), now()).unwrap();
        assert!(output.contains("Title:       Ship release"));
        assert!(output.contains("Score:       8.0000"));
    }

    #[test]
    fn test_show_unknown_task() {
        let cmd = ShowCommand {
            id: "nope".to_string(),
        };
        match cmd.execute(&tasks(), now()) {
            Err(CliError::Core(CoreError::NotFound { task_id })) => assert_eq!(task_id, "nope"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
