//! Task filter criteria
//!
//! Provides a builder-pattern TaskFilter. Every criterion is a single
//! restriction (or none), and all criteria combine with AND semantics.

use crate::error::CoreError;
use crate::models::{Category, Priority, Task};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Completion-state restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    /// Only tasks that are not completed
    Active,
    /// Only completed tasks
    Completed,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
        }
    }

    /// Whether a task with this completion state passes
    pub fn accepts(self, completed: bool) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !completed,
            StatusFilter::Completed => completed,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(CoreError::InvalidValue {
                kind: "status",
                value: s.to_string(),
                expected: "all, active, completed",
            }),
        }
    }
}

/// Filter criteria for deriving a task view
///
/// `None` on an optional criterion means "all". The search query is
/// matched case-insensitively as a substring of the title, the description,
/// or any tag; a query that is blank after trimming matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    /// Exact, case-sensitive match on a stored (normalized) tag
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl TaskFilter {
    /// Create a new filter that accepts every task
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Keep only tasks that are not completed
    pub fn active(self) -> Self {
        self.with_status(StatusFilter::Active)
    }

    /// Keep only completed tasks
    pub fn completed(self) -> Self {
        self.with_status(StatusFilter::Completed)
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Check if this filter restricts anything at all
    pub fn is_empty(&self) -> bool {
        self.status == StatusFilter::All
            && self.priority.is_none()
            && self.category.is_none()
            && self.tag.is_none()
            && self.search_needle().is_none()
    }

    /// Lowercased, trimmed search query; `None` when there is nothing to match
    pub(crate) fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Check every criterion against a single task.
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_with_needle(task, self.search_needle().as_deref())
    }

    /// Same as [`TaskFilter::matches`] with the search needle prepared once
    /// by the caller.
    pub(crate) fn matches_with_needle(&self, task: &Task, needle: Option<&str>) -> bool {
        if !self.status.accepts(task.completed) {
            return false;
        }

        if let Some(priority) = self.priority
            && task.priority != priority
        {
            return false;
        }

        if let Some(category) = self.category
            && task.category != category
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !task.has_tag(tag)
        {
            return false;
        }

        match needle {
            Some(needle) => matches_search(task, needle),
            None => true,
        }
    }
}

/// Case-insensitive substring match on title, description, or any tag.
///
/// `needle` must already be lowercased.
fn matches_search(task: &Task, needle: &str) -> bool {
    task.title.to_lowercase().contains(needle)
        || task.description.to_lowercase().contains(needle)
        || task.tags.iter().any(|t| t.to_lowercase().contains(needle))
}
