//! Filter/sort engine
//!
//! Derives the visible task list from the full collection. The input is
//! never mutated; every call returns a fresh, re-scored copy.

pub mod filter;
pub mod sort;

pub use filter::{StatusFilter, TaskFilter};
pub use sort::{SortOrder, compare, sort_tasks};

use crate::models::Task;
use crate::score::ScoreWeights;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Filter, re-score and sort `tasks` for display.
///
/// Pipeline: status, priority, category, tag, free-text search, then the
/// surviving tasks are re-scored against `now` (cached scores are never
/// trusted) and stably sorted under `order`.
///
/// Returns an empty vector for empty input or when nothing matches.
pub fn view_of(
    tasks: &[Task],
    filter: &TaskFilter,
    order: SortOrder,
    now: DateTime<Utc>,
) -> Vec<Task> {
    view_of_with(tasks, filter, order, now, &ScoreWeights::default())
}

/// [`view_of`] with tuned scoring weights; the smart order follows them.
#[instrument(level = "debug", skip(tasks, filter, weights), fields(total = tasks.len()))]
pub fn view_of_with(
    tasks: &[Task],
    filter: &TaskFilter,
    order: SortOrder,
    now: DateTime<Utc>,
    weights: &ScoreWeights,
) -> Vec<Task> {
    let needle = filter.search_needle();

    let mut visible: Vec<Task> = tasks
        .iter()
        .filter(|task| filter.matches_with_needle(task, needle.as_deref()))
        .map(|task| task.clone().scored_with(now, weights))
        .collect();

    sort_tasks(&mut visible, order);

    debug!(visible = visible.len(), %order, "derived task view");
    visible
}
