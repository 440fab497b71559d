//! Smart urgency scoring
//!
//! `score = SCORE_SCALE * (w_p * P + w_d * D + w_a * A)`, rounded to
//! [`SCORE_DECIMALS`] places, where each component lies in `[0, 1]`:
//!
//! - `P`: priority weight over [`MAX_PRIORITY_WEIGHT`]
//! - `D`: `1.0` once overdue, else `exp(-k * hours_left)`
//! - `A`: task age over [`AGE_CAP_HOURS`], capped at `1.0`
//!
//! Completed tasks always score [`COMPLETED_SENTINEL`].

use crate::models::{MAX_PRIORITY_WEIGHT, Priority, Task, hours_between};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PRIORITY_MIX_WEIGHT: f64 = 0.40;
pub const DEADLINE_MIX_WEIGHT: f64 = 0.40;
pub const AGE_MIX_WEIGHT: f64 = 0.20;

/// Exponential decay rate applied per hour left before the deadline
pub const DEADLINE_DECAY_RATE: f64 = 0.007;

/// Age at which the anti-starvation boost saturates (30 days)
pub const AGE_CAP_HOURS: f64 = 720.0;

pub const SCORE_SCALE: f64 = 10.0;
pub const SCORE_DECIMALS: i32 = 4;

/// Score assigned to every completed task
pub const COMPLETED_SENTINEL: f64 = -1.0;

/// Tunable scoring constants
///
/// `Default` yields the shipped constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub priority: f64,
    pub deadline: f64,
    pub age: f64,
    pub decay_rate: f64,
    pub age_cap_hours: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            priority: PRIORITY_MIX_WEIGHT,
            deadline: DEADLINE_MIX_WEIGHT,
            age: AGE_MIX_WEIGHT,
            decay_rate: DEADLINE_DECAY_RATE,
            age_cap_hours: AGE_CAP_HOURS,
        }
    }
}

/// The three normalized components behind a score, plus the total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub priority: f64,
    pub deadline: f64,
    pub age: f64,
    pub total: f64,
}

/// Compute the urgency score of `task` at `now` with the default weights.
#[must_use]
pub fn score(task: &Task, now: DateTime<Utc>) -> f64 {
    score_with(task, now, &ScoreWeights::default())
}

/// Compute the urgency score of `task` at `now` with custom weights.
#[must_use]
pub fn score_with(task: &Task, now: DateTime<Utc>, weights: &ScoreWeights) -> f64 {
    breakdown_with(task, now, weights).total
}

/// Compute the per-component breakdown with the default weights.
///
/// For completed tasks the components are all zero and the total is
/// [`COMPLETED_SENTINEL`].
#[must_use]
pub fn breakdown(task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
    breakdown_with(task, now, &ScoreWeights::default())
}

#[must_use]
pub fn breakdown_with(task: &Task, now: DateTime<Utc>, weights: &ScoreWeights) -> ScoreBreakdown {
    if task.completed {
        return ScoreBreakdown {
            priority: 0.0,
            deadline: 0.0,
            age: 0.0,
            total: COMPLETED_SENTINEL,
        };
    }

    let p = priority_component(task.priority);
    let d = deadline_component(hours_between(now, task.deadline), weights.decay_rate);
    let a = age_component(hours_between(task.created_at, now), weights.age_cap_hours);

    let raw = SCORE_SCALE * (weights.priority * p + weights.deadline * d + weights.age * a);

    ScoreBreakdown {
        priority: p,
        deadline: d,
        age: a,
        total: round_to(raw, SCORE_DECIMALS),
    }
}

/// Priority weight normalized to `[0.25, 1.0]`
#[must_use]
pub fn priority_component(priority: Priority) -> f64 {
    f64::from(priority.weight()) / f64::from(MAX_PRIORITY_WEIGHT)
}

/// Deadline urgency for a signed number of hours left.
///
/// Saturates at exactly `1.0` for `hours_left <= 0`.
#[must_use]
pub fn deadline_component(hours_left: f64, decay_rate: f64) -> f64 {
    if hours_left <= 0.0 {
        return 1.0;
    }
    (-decay_rate * hours_left).exp()
}

/// Age boost for a signed task age in hours; negative ages count as zero.
#[must_use]
pub fn age_component(age_hours: f64, cap_hours: f64) -> f64 {
    (age_hours.max(0.0) / cap_hours).min(1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn task(priority: Priority, deadline: DateTime<Utc>, created_at: DateTime<Utc>) -> Task {
        Task {
            id: "t".to_string(),
            owner_id: "u".to_string(),
            title: "Task".to_string(),
            description: String::new(),
            tags: Vec::new(),
            start_at: created_at,
            deadline,
            created_at,
            updated_at: created_at,
            priority,
            category: Category::Other,
            completed: false,
            sort_score: 0.0,
        }
    }

    fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual ({actual}) != expected ({expected})"
        );
    }

    #[test]
    fn completed_task_scores_sentinel() {
        let mut t = task(Priority::Critical, now() - Duration::hours(5), now());
        t.completed = true;
        assert_eq!(score(&t, now()), COMPLETED_SENTINEL);
        assert_eq!(score(&t, now() + Duration::days(400)), COMPLETED_SENTINEL);
    }

    #[test]
    fn overdue_critical_task_scenario() {
        // 1h overdue, created 1h ago: 10 * (0.4 + 0.4 + 0.2 / 720)
        let t = task(
            Priority::Critical,
            now() - Duration::hours(1),
            now() - Duration::hours(1),
        );
        let b = breakdown(&t, now());
        assert_eq!(b.deadline, 1.0);
        assert_eq!(b.priority, 1.0);
        assert_approx_eq(b.age, 1.0 / 720.0, 1e-12);
        assert_eq!(b.total, 8.0028);
    }

    #[test]
    fn stale_low_priority_task_scenario() {
        // 30 days out, created 30 days ago
        let t = task(
            Priority::Low,
            now() + Duration::hours(720),
            now() - Duration::hours(720),
        );
        let b = breakdown(&t, now());
        assert_eq!(b.priority, 0.25);
        assert_approx_eq(b.deadline, (-5.04f64).exp(), 1e-12);
        assert_eq!(b.age, 1.0);
        assert_eq!(b.total, 3.0259);
    }

    #[test]
    fn deadline_component_reference_points() {
        let k = DEADLINE_DECAY_RATE;
        assert_approx_eq(deadline_component(1.0, k), 0.993, 1e-3);
        assert_approx_eq(deadline_component(24.0, k), 0.845, 1e-3);
        assert_approx_eq(deadline_component(72.0, k), 0.604, 1e-3);
        assert_approx_eq(deadline_component(168.0, k), 0.308, 1e-3);
        assert_approx_eq(deadline_component(720.0, k), 0.006, 1e-3);
    }

    #[test]
    fn deadline_component_saturates_when_overdue() {
        assert_eq!(deadline_component(0.0, DEADLINE_DECAY_RATE), 1.0);
        assert_eq!(deadline_component(-200.0, DEADLINE_DECAY_RATE), 1.0);
    }

    #[test]
    fn age_component_clamps_both_ends() {
        assert_eq!(age_component(-10.0, AGE_CAP_HOURS), 0.0);
        assert_eq!(age_component(360.0, AGE_CAP_HOURS), 0.5);
        assert_eq!(age_component(10_000.0, AGE_CAP_HOURS), 1.0);
    }

    #[test]
    fn created_in_the_future_gets_no_age_boost() {
        let t = task(
            Priority::Medium,
            now() + Duration::days(2),
            now() + Duration::hours(3),
        );
        assert_eq!(breakdown(&t, now()).age, 0.0);
    }

    #[test]
    fn score_is_rounded_to_four_decimals() {
        let t = task(
            Priority::High,
            now() + Duration::minutes(1234),
            now() - Duration::minutes(777),
        );
        let s = score(&t, now());
        assert_eq!(s, (s * 10_000.0).round() / 10_000.0);
    }

    #[test]
    fn score_stays_within_bounds() {
        let extremes = [
            task(Priority::Critical, now() - Duration::days(90), now() - Duration::days(90)),
            task(Priority::Low, now() + Duration::days(3650), now()),
        ];
        for t in &extremes {
            let s = score(t, now());
            assert!((0.0..=10.0).contains(&s), "score {s} out of range");
        }
        assert_eq!(score(&extremes[0], now()), 10.0);
    }

    #[test]
    fn custom_weights_change_the_mix() {
        let t = task(
            Priority::Low,
            now() + Duration::days(60),
            now() - Duration::days(60),
        );
        let age_only = ScoreWeights {
            priority: 0.0,
            deadline: 0.0,
            age: 1.0,
            ..ScoreWeights::default()
        };
        assert_eq!(score_with(&t, now(), &age_only), 10.0);
    }

    #[test]
    fn default_weights_match_constants() {
        let w = ScoreWeights::default();
        assert_eq!(w.priority + w.deadline + w.age, 1.0);
        assert_eq!(w.decay_rate, DEADLINE_DECAY_RATE);
        assert_eq!(w.age_cap_hours, AGE_CAP_HOURS);
    }
}
