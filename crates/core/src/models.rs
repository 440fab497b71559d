//! Data models for taskpulse
//!
//! Defines the task record the ranking engine reads, plus the closed
//! enumerations it filters and scores on.

use crate::error::CoreError;
use crate::score::ScoreWeights;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Task priority level
///
/// Ordered from low to critical; the derived `Ord` follows declaration
/// order so `Priority::Critical > Priority::Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Priority weight table shared by the scorer and the priority sort.
pub const PRIORITY_WEIGHTS: [(Priority, u8); 4] = [
    (Priority::Low, Priority::Low.weight()),
    (Priority::Medium, Priority::Medium.weight()),
    (Priority::High, Priority::High.weight()),
    (Priority::Critical, Priority::Critical.weight()),
];

/// Largest value in [`PRIORITY_WEIGHTS`]
pub const MAX_PRIORITY_WEIGHT: u8 = Priority::Critical.weight();

impl Priority {
    /// All priorities, lowest first
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// Returns the string representation used in task records
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }

    /// Weight of this priority: low 1, medium 2, high 3, critical 4
    pub const fn weight(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
            Priority::Critical => 4,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(CoreError::InvalidValue {
                kind: "priority",
                value: s.to_string(),
                expected: "low, medium, high, critical",
            }),
        }
    }
}

/// Task category
///
/// Used only as a label for filtering and grouping, never for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    Work,
    Health,
    Finance,
    Education,
    Shopping,
    Travel,
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 8] = [
        Category::Personal,
        Category::Work,
        Category::Health,
        Category::Finance,
        Category::Education,
        Category::Shopping,
        Category::Travel,
        Category::Other,
    ];

    /// Returns the string representation used in task records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Health => "health",
            Category::Finance => "finance",
            Category::Education => "education",
            Category::Shopping => "shopping",
            Category::Travel => "travel",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| CoreError::InvalidValue {
                kind: "category",
                value: s.to_string(),
                expected: "personal, work, health, finance, education, shopping, travel, other",
            })
    }
}

/// A task as held in application state
///
/// Timestamps are already parsed; raw persistence records go through
/// [`crate::record::TaskRecord`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Owning user
    pub owner_id: String,

    /// Task title (never empty)
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Normalized tags, in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// When work is planned to start (informational)
    pub start_at: DateTime<Utc>,

    /// When the task is due
    pub deadline: DateTime<Utc>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    pub priority: Priority,

    pub category: Category,

    #[serde(default)]
    pub completed: bool,

    /// Cached urgency score. Recompute with [`Task::refresh_score`].
    #[serde(default)]
    pub sort_score: f64,
}

impl Task {
    /// Recompute the cached urgency score against `now`
    pub fn refresh_score(&mut self, now: DateTime<Utc>) {
        self.refresh_score_with(now, &ScoreWeights::default());
    }

    /// Recompute the cached urgency score against `now` with tuned weights
    pub fn refresh_score_with(&mut self, now: DateTime<Utc>, weights: &ScoreWeights) {
        self.sort_score = crate::score::score_with(self, now, weights);
    }

    /// Consume the task and return it with a freshly computed score
    pub fn scored(self, now: DateTime<Utc>) -> Self {
        self.scored_with(now, &ScoreWeights::default())
    }

    /// Like [`Task::scored`], using `weights` instead of the shipped constants
    pub fn scored_with(mut self, now: DateTime<Utc>, weights: &ScoreWeights) -> Self {
        self.refresh_score_with(now, weights);
        self
    }

    /// Whether the task is still open and its deadline has passed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.deadline <= now
    }

    /// Signed hours from `now` until the deadline (negative when overdue)
    pub fn hours_until_deadline(&self, now: DateTime<Utc>) -> f64 {
        hours_between(now, self.deadline)
    }

    /// Whether the task carries exactly this normalized tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Signed number of hours from `from` to `to`, with millisecond precision
pub(crate) fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 3_600_000.0
}

/// Normalize a single tag: trimmed and lowercased.
///
/// Returns `None` for tags that are empty after trimming.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim().to_lowercase();
    if tag.is_empty() { None } else { Some(tag) }
}

/// Normalize a tag list, dropping blanks and duplicates while keeping the
/// first occurrence's position.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        if let Some(tag) = normalize_tag(tag.as_ref())
            && !normalized.contains(&tag)
        {
            normalized.push(tag);
        }
    }
    normalized
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LENGTH: usize = 6;

/// Generate a short random task id (6 lowercase base-36 characters)
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
