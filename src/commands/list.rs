//! List command for displaying the ranked task view
//!
//! Implements the `tp list` command: filter, re-score and sort the loaded
//! tasks, then print them as a table (or JSON).

use crate::error::{CliError, CliResult};
use crate::output::format_task_table;
use chrono::{DateTime, Utc};
use clap::Args;
use taskpulse_core::{
    Category, CoreError, Priority, SortOrder, StatusFilter, Task, TaskFilter, normalize_tag,
    view_of,
};

/// List tasks with optional filters
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Completion state (all, active, completed)
    #[arg(short, long, default_value = "all", value_parser = parse_status)]
    pub status: StatusFilter,

    /// Only this priority (low, medium, high, critical)
    #[arg(short, long, value_parser = parse_priority)]
    pub priority: Option<Priority>,

    /// Only this category
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Only tasks carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Search text in title, description and tags (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,

    /// Sort order (smart, deadline, priority, createdAt, alpha)
    #[arg(long, default_value = "smart", value_parser = parse_sort)]
    pub sort: SortOrder,

    /// Show at most this many tasks
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the view as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn parse_status(s: &str) -> Result<StatusFilter, String> {
    s.parse().map_err(|e: CoreError| e.to_string())
}

fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse().map_err(|e: CoreError| e.to_string())
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|e: CoreError| e.to_string())
}

fn parse_sort(s: &str) -> Result<SortOrder, String> {
    s.parse().map_err(|e: CoreError| e.to_string())
}

impl ListCommand {
    /// Derive the view for the given tasks.
    pub fn view(&self, tasks: &[Task], now: DateTime<Utc>) -> Vec<Task> {
        let mut view = view_of(tasks, &self.build_filter(), self.sort, now);
        if let Some(limit) = self.limit {
            view.truncate(limit);
        }
        view
    }

    /// Execute the list command and render its output.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Encode` if JSON output fails to serialize.
    pub fn execute(&self, tasks: &[Task], now: DateTime<Utc>) -> CliResult<String> {
        let view = self.view(tasks, now);

        if self.json {
            return serde_json::to_string_pretty(&view).map_err(CliError::Encode);
        }
        Ok(format_task_table(&view, now))
    }

    /// Build a TaskFilter from the command options.
    fn build_filter(&self) -> TaskFilter {
        let mut filter = TaskFilter::new().with_status(self.status);

        if let Some(priority) = self.priority {
            filter = filter.with_priority(priority);
        }

        if let Some(category) = self.category {
            filter = filter.with_category(category);
        }

        // stored tags are lowercased; a blank tag means no restriction
        if let Some(tag) = self.tag.as_deref().and_then(normalize_tag) {
            filter = filter.with_tag(tag);
        }

        if let Some(search) = &self.search {
            filter = filter.with_search(search);
        }

        filter
    }
}
