//! Collection-level counts for a task list

use crate::models::{Category, Task};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Window ahead of `now` in which an open task counts as due soon
pub const DUE_SOON_HOURS: i64 = 24;

/// Counts over a task collection at a reference time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Active tasks whose deadline has passed
    pub overdue: usize,
    /// Active tasks due within [`DUE_SOON_HOURS`] that are not yet overdue
    pub due_soon: usize,
    /// Task count per category, in [`Category::ALL`] order, zeroes omitted
    pub by_category: Vec<(Category, usize)>,
    /// Completion percentage (0-100)
    pub percentage: u8,
}

impl TaskSummary {
    /// Summarize `tasks` as of `now`.
    pub fn of(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let soon = now + Duration::hours(DUE_SOON_HOURS);

        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        let due_soon = tasks
            .iter()
            .filter(|t| !t.completed && t.deadline > now && t.deadline <= soon)
            .count();

        let by_category = Category::ALL
            .into_iter()
            .map(|category| {
                let count = tasks.iter().filter(|t| t.category == category).count();
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();

        let total = tasks.len();
        let percentage = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };

        Self {
            total,
            active: total - completed,
            completed,
            overdue,
            due_soon,
            by_category,
            percentage,
        }
    }

    /// Check if every task is completed (and there is at least one)
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
