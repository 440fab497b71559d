//! Sort orders and their comparators
//!
//! Every comparator first sinks completed tasks below incomplete ones and
//! only then applies its own key. Sorting is always stable.

use crate::error::CoreError;
use crate::models::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort order selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    /// Highest urgency score first
    #[default]
    Smart,
    /// Earliest deadline first
    Deadline,
    /// Highest priority first, earliest deadline on ties
    Priority,
    /// Most recently created first
    CreatedAt,
    /// Title, case-insensitive, then raw title on ties
    Alpha,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Smart,
        SortOrder::Deadline,
        SortOrder::Priority,
        SortOrder::CreatedAt,
        SortOrder::Alpha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Smart => "smart",
            SortOrder::Deadline => "deadline",
            SortOrder::Priority => "priority",
            SortOrder::CreatedAt => "createdAt",
            SortOrder::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = CoreError;

    /// Case-insensitive; `created_at` and `created-at` are accepted as
    /// spellings of `createdAt`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "smart" => Ok(SortOrder::Smart),
            "deadline" => Ok(SortOrder::Deadline),
            "priority" => Ok(SortOrder::Priority),
            "createdat" => Ok(SortOrder::CreatedAt),
            "alpha" => Ok(SortOrder::Alpha),
            _ => Err(CoreError::InvalidValue {
                kind: "sort order",
                value: s.to_string(),
                expected: "smart, deadline, priority, createdAt, alpha",
            }),
        }
    }
}

/// Compare two tasks under `order`.
///
/// Incomplete tasks always come before completed ones; the order-specific
/// key applies only between tasks with the same completion state.
pub fn compare(a: &Task, b: &Task, order: SortOrder) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| compare_key(a, b, order))
}

fn compare_key(a: &Task, b: &Task, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Smart => b.sort_score.total_cmp(&a.sort_score),
        SortOrder::Deadline => a.deadline.cmp(&b.deadline),
        SortOrder::Priority => b
            .priority
            .weight()
            .cmp(&a.priority.weight())
            .then_with(|| a.deadline.cmp(&b.deadline)),
        SortOrder::CreatedAt => b.created_at.cmp(&a.created_at),
        SortOrder::Alpha => compare_titles(&a.title, &b.title),
    }
}

/// Case-folded comparison with raw byte order as the tie-break, so
/// `"apple" < "Banana" < "banana" < "Cherry"`.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable in-place sort of `tasks` under `order`.
///
/// Uses the cached `sort_score` as-is for [`SortOrder::Smart`]; refresh
/// scores first if `now` has moved.
pub fn sort_tasks(tasks: &mut [Task], order: SortOrder) {
    tasks.sort_by(|a, b| compare(a, b, order));
}
