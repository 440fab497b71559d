//! Shared fixtures for taskpulse-core integration tests
//!
//! All tasks are built relative to a fixed reference time so scores are
//! reproducible.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use taskpulse_core::{Category, Priority, Task};

/// Fixed reference time for every fixture
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()
}

/// Builder for fixture tasks
pub struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            task: Task {
                id: id.to_string(),
                owner_id: "owner-1".to_string(),
                title: id.to_string(),
                description: String::new(),
                tags: Vec::new(),
                start_at: now(),
                deadline: now() + Duration::days(7),
                created_at: now(),
                updated_at: now(),
                priority: Priority::Medium,
                category: Category::Personal,
                completed: false,
                sort_score: 0.0,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.task.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.task.description = description.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.task.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.task.category = category;
        self
    }

    /// Deadline relative to [`now`], in hours (negative = overdue)
    pub fn due_in_hours(mut self, hours: i64) -> Self {
        self.task.deadline = now() + Duration::hours(hours);
        self
    }

    /// Creation time relative to [`now`], in hours ago
    pub fn created_hours_ago(mut self, hours: i64) -> Self {
        self.task.created_at = now() - Duration::hours(hours);
        self.task.updated_at = self.task.created_at;
        self
    }

    pub fn completed(mut self) -> Self {
        self.task.completed = true;
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.task.sort_score = score;
        self
    }

    pub fn build(self) -> Task {
        self.task
    }
}

/// Ids of a task list, in order
pub fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}
