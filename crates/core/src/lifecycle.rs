//! Task construction and partial updates
//!
//! Both helpers are pure: they return new [`Task`] values with refreshed
//! timestamps and a freshly computed urgency score, leaving storage to the
//! caller.

use crate::error::{CoreError, CoreResult};
use crate::models::{Category, Priority, Task, generate_id, normalize_tag, normalize_tags};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Fields for a task that does not exist yet
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub deadline: DateTime<Utc>,
    pub priority: Priority,
    pub category: Category,
}

impl NewTask {
    /// Create a new draft with required fields; medium priority, category
    /// `other`.
    pub fn new(title: impl Into<String>, deadline: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
            start_at: None,
            deadline,
            priority: Priority::Medium,
            category: Category::Other,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(|t| t.into()));
        self
    }

    pub fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Build the task with a generated id.
    pub fn build(self, owner_id: impl Into<String>, now: DateTime<Utc>) -> CoreResult<Task> {
        self.build_with_id(generate_id(), owner_id, now)
    }

    /// Build the task with an explicit id.
    ///
    /// `created_at` and `updated_at` are both set to `now`; `start_at`
    /// defaults to `now`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the id or the trimmed title is empty.
    pub fn build_with_id(
        self,
        id: impl Into<String>,
        owner_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> CoreResult<Task> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::validation("Task id cannot be empty"));
        }
        let title = validate_title(&self.title)?;

        let task = Task {
            id,
            owner_id: owner_id.into(),
            title,
            description: self.description,
            tags: normalize_tags(&self.tags),
            start_at: self.start_at.unwrap_or(now),
            deadline: self.deadline,
            created_at: now,
            updated_at: now,
            priority: self.priority,
            category: self.category,
            completed: false,
            sort_score: 0.0,
        }
        .scored(now);

        debug!(id = %task.id, score = task.sort_score, "built new task");
        Ok(task)
    }
}

/// Update structure for partial task updates
///
/// Only the fields listed here can change; identity, owner and
/// `created_at` are never touched.
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Replaces the entire tag list (applied before add/remove)
    pub tags: Option<Vec<String>>,
    pub add_tags: Vec<String>,
    pub remove_tags: Vec<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Create a new empty update
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replace all tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = Some(tags.into_iter().map(|t| t.into()).collect());
        self
    }

    pub fn add_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tags.push(tag.into());
        self
    }

    pub fn remove_tag(mut self, tag: impl Into<String>) -> Self {
        self.remove_tags.push(tag.into());
        self
    }

    pub fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Check if any updates are specified
    pub fn has_updates(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.tags.is_some()
            || !self.add_tags.is_empty()
            || !self.remove_tags.is_empty()
            || self.start_at.is_some()
            || self.deadline.is_some()
            || self.priority.is_some()
            || self.category.is_some()
            || self.completed.is_some()
    }

    /// Merge this update into `task`, returning the updated copy.
    ///
    /// `updated_at` becomes `now` and the score is recomputed against `now`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the update is empty or would leave
    /// the task with a blank title.
    pub fn apply(&self, task: &Task, now: DateTime<Utc>) -> CoreResult<Task> {
        if !self.has_updates() {
            return Err(CoreError::validation(format!(
                "No updates specified for task '{}'",
                task.id
            )));
        }

        let mut updated = task.clone();

        if let Some(title) = &self.title {
            updated.title = validate_title(title)?;
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(tags) = &self.tags {
            updated.tags = normalize_tags(tags);
        }
        if !self.add_tags.is_empty() {
            let mut tags = std::mem::take(&mut updated.tags);
            tags.extend(self.add_tags.iter().cloned());
            updated.tags = normalize_tags(&tags);
        }
        if !self.remove_tags.is_empty() {
            let removed: Vec<String> = self
                .remove_tags
                .iter()
                .filter_map(|t| normalize_tag(t))
                .collect();
            updated.tags.retain(|t| !removed.contains(t));
        }
        if let Some(start_at) = self.start_at {
            updated.start_at = start_at;
        }
        if let Some(deadline) = self.deadline {
            updated.deadline = deadline;
        }
        if let Some(priority) = self.priority {
            updated.priority = priority;
        }
        if let Some(category) = self.category {
            updated.category = category;
        }
        if let Some(completed) = self.completed {
            updated.completed = completed;
        }

        updated.updated_at = now;
        updated.refresh_score(now);

        trace!(id = %updated.id, score = updated.sort_score, "applied task update");
        Ok(updated)
    }
}

fn validate_title(title: &str) -> CoreResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("Task title cannot be empty"));
    }
    Ok(trimmed.to_string())
}
