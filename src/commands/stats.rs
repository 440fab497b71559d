//! Stats command for collection-level counts

use crate::error::{CliError, CliResult};
use crate::output::format_summary;
use chrono::{DateTime, Utc};
use clap::Args;
use taskpulse_core::{Task, TaskSummary};

/// Show counts of active, completed, overdue and due-soon tasks
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl StatsCommand {
    pub fn execute(&self, tasks: &[Task], now: DateTime<Utc>) -> CliResult<String> {
        let summary = TaskSummary::of(tasks, now);
        if self.json {
            return serde_json::to_string_pretty(&summary).map_err(CliError::Encode);
        }
        Ok(format_summary(&summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use taskpulse_core::{Category, NewTask, TaskUpdate};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
    }

    fn tasks() -> Vec<Task> {
        let open = NewTask::new("Run 5k", now() + Duration::hours(3))
            .with_category(Category::Health)
            .build_with_id("run", "u", now())
            .unwrap();
        let done = TaskUpdate::new()
            .with_completed(true)
            .apply(&open, now())
            .map(|mut t| {
                t.id = "run-done".to_string();
                t
            })
            .unwrap();
        vec![open, done]
    }

    #[test]
    fn test_stats_text() {
        let output = StatsCommand { json: false }.execute(&tasks(), now()).unwrap();
        assert!(output.contains("Total:      2"));
        assert!(output.contains("Completed:  1 (50%)"));
        assert!(output.contains("Due soon:   1"));
    }

    #[test]
    fn test_stats_json() {
        let output = StatsCommand { json: true }.execute(&tasks(), now()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["percentage"], 50);
        assert_eq!(parsed["by_category"][0][0], "health");
    }
}
