//! Core ranking engine for taskpulse
//!
//! Scores tasks by urgency and derives filtered, sorted views over a task
//! collection. Everything here is pure: no I/O, no shared mutable state,
//! and every function takes the reference time `now` explicitly.

pub mod engine;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod record;
pub mod score;
pub mod summary;

pub use engine::{SortOrder, StatusFilter, TaskFilter, compare, sort_tasks, view_of, view_of_with};
pub use error::{CoreError, CoreResult};
pub use lifecycle::{NewTask, TaskUpdate};
pub use models::{
    Category, MAX_PRIORITY_WEIGHT, PRIORITY_WEIGHTS, Priority, Task, normalize_tag, normalize_tags,
};
pub use record::{TaskRecord, parse_timestamp, tasks_from_json};
pub use score::{ScoreBreakdown, ScoreWeights, breakdown, score, score_with};
pub use summary::TaskSummary;

static_assertions::assert_impl_all!(Task: Send, Sync);
static_assertions::assert_impl_all!(TaskFilter: Send, Sync);
static_assertions::assert_impl_all!(SortOrder: Send, Sync, Copy);
static_assertions::assert_impl_all!(ScoreWeights: Send, Sync, Copy);

/// Find a task by id in a collection.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if no task has this id.
pub fn find_task<'a>(tasks: &'a [Task], id: &str) -> CoreResult<&'a Task> {
    tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CoreError::NotFound {
            task_id: id.to_string(),
        })
}
