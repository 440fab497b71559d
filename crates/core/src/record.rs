//! Raw task records as exchanged with persistence
//!
//! Records carry timestamps and enum values as text. Converting a record
//! into a [`Task`] validates every field up front so nothing downstream
//! ever scores a task with an unparseable deadline.

use crate::error::{CoreError, CoreResult};
use crate::models::{Category, Priority, Task, normalize_tags};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tracing::{debug, trace};

/// A task record before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Falls back to `created_at` when absent
    #[serde(default)]
    pub start_at: Option<String>,
    pub deadline: String,
    pub created_at: String,
    /// Falls back to `created_at` when absent
    #[serde(default)]
    pub updated_at: Option<String>,
    pub priority: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
}

fn default_category() -> String {
    Category::Other.as_str().to_string()
}

impl TaskRecord {
    /// Validate the record and convert it into a [`Task`].
    ///
    /// The returned task's `sort_score` is left at `0.0`; use
    /// [`TaskRecord::into_scored_task`] when the task is about to enter
    /// application state.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTimestamp` if any timestamp fails to parse,
    /// `CoreError::InvalidValue` for an unknown priority or category, and
    /// `CoreError::Validation` for an empty id or title.
    pub fn into_task(self) -> CoreResult<Task> {
        if self.id.trim().is_empty() {
            return Err(CoreError::validation("Task id cannot be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::validation(format!(
                "Task '{}' has an empty title",
                self.id
            )));
        }

        let deadline = parse_field(&self.id, "deadline", &self.deadline)?;
        let created_at = parse_field(&self.id, "createdAt", &self.created_at)?;
        let start_at = match self.start_at.as_deref() {
            Some(value) => parse_field(&self.id, "startAt", value)?,
            None => created_at,
        };
        let updated_at = match self.updated_at.as_deref() {
            Some(value) => parse_field(&self.id, "updatedAt", value)?,
            None => created_at,
        };

        let priority: Priority = self.priority.parse()?;
        let category: Category = self.category.parse()?;

        Ok(Task {
            id: self.id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            tags: normalize_tags(&self.tags),
            start_at,
            deadline,
            created_at,
            updated_at,
            priority,
            category,
            completed: self.completed,
            sort_score: 0.0,
        })
    }

    /// Validate, convert, and score against `now`.
    pub fn into_scored_task(self, now: DateTime<Utc>) -> CoreResult<Task> {
        Ok(self.into_task()?.scored(now))
    }
}

/// Decode a JSON array of task records and convert every one of them.
///
/// Fails on the first invalid record; no partial list is returned.
pub fn tasks_from_json(json: &str, now: DateTime<Utc>) -> CoreResult<Vec<Task>> {
    let records: Vec<TaskRecord> = serde_json::from_str(json)?;
    debug!(count = records.len(), "decoded task records");

    records
        .into_iter()
        .map(|record| {
            trace!(id = %record.id, "validating task record");
            record.into_scored_task(now)
        })
        .collect()
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2025-01-31T09:30:00Z`, `2025-01-31T09:30:00+02:00`),
/// a naive date-time taken as UTC (`2025-01-31T09:30:00`, optional
/// fractional seconds), or a bare date taken as UTC midnight
/// (`2025-01-31`).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_field(task_id: &str, field: &'static str, value: &str) -> CoreResult<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| CoreError::InvalidTimestamp {
        task_id: task_id.to_string(),
        field,
        value: value.to_string(),
    })
}
