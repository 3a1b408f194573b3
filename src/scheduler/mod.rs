//! # Schedule Generator
//!
//! Projects the forgetting-curve review schedule onto calendar dates.
//!
//! The canonical schedule is nine stages from "immediately after" out to
//! "1 year later". The table is an immutable configuration value injected
//! into whatever composes it (not a process-wide singleton), so alternate
//! schedules are testable. The yearly tail extends one checkpoint at a time:
//! completing the checkpoint at offset 365·n produces the one at 365·(n+1).
//!
//! All functions here are pure; callers persist the results.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::state_machine::ReviewTaskState;

/// Days between consecutive checkpoints in the yearly tail.
///
/// Calendar days, not calendar years: leap years shift nominal
/// anniversaries by design.
pub const YEARLY_INTERVAL_DAYS: i64 = 365;

/// One generated review checkpoint, ready to be persisted as a review task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCheckpoint {
    pub stage_name: String,
    pub stage_offset_days: i64,
    pub due_date: NaiveDate,
    pub status: ReviewTaskState,
}

/// Immutable schedule table of (stage label, offset-in-days) pairs,
/// ascending by offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSchedule {
    stages: Vec<(String, i64)>,
}

impl Default for ReviewSchedule {
    /// The canonical nine-stage forgetting-curve schedule.
    fn default() -> Self {
        Self::new(vec![
            ("immediately after".to_string(), 0),
            ("1 day later".to_string(), 1),
            ("3 days later".to_string(), 3),
            ("1 week later".to_string(), 7),
            ("2 weeks later".to_string(), 14),
            ("1 month later".to_string(), 30),
            ("3 months later".to_string(), 90),
            ("6 months later".to_string(), 180),
            ("1 year later".to_string(), 365),
        ])
    }
}

impl ReviewSchedule {
    /// Build a schedule from (label, offset) pairs.
    ///
    /// Offsets must be non-negative, unique, and strictly increasing;
    /// generated due dates inherit that ordering.
    pub fn new(stages: Vec<(String, i64)>) -> Self {
        debug_assert!(
            stages.windows(2).all(|w| w[0].1 < w[1].1),
            "schedule offsets must be strictly increasing"
        );
        debug_assert!(stages.iter().all(|(_, offset)| *offset >= 0));
        Self { stages }
    }

    /// Number of stages in the table.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Generate the full initial checkpoint sequence for an item anchored at
    /// `anchor_date`.
    ///
    /// Each checkpoint is due at `anchor_date + offset` days. The zero-offset
    /// checkpoint is born `Ready` (it is due the moment the item exists);
    /// every other checkpoint is born `Pending`. Output order follows the
    /// table, so due dates are strictly increasing.
    pub fn checkpoints(&self, anchor_date: NaiveDate) -> Vec<StageCheckpoint> {
        self.stages
            .iter()
            .map(|(stage_name, offset_days)| StageCheckpoint {
                stage_name: stage_name.clone(),
                stage_offset_days: *offset_days,
                due_date: anchor_date + Duration::days(*offset_days),
                status: if *offset_days == 0 {
                    ReviewTaskState::Ready
                } else {
                    ReviewTaskState::Pending
                },
            })
            .collect()
    }

    /// Whether a checkpoint at `offset_days` belongs to the yearly tail and
    /// therefore spawns a successor when completed.
    pub fn is_yearly(offset_days: i64) -> bool {
        offset_days > 0 && offset_days % YEARLY_INTERVAL_DAYS == 0
    }

    /// Produce the successor of a yearly-tail checkpoint.
    ///
    /// The caller guarantees `current_offset_days` is a positive multiple of
    /// 365 (see [`ReviewSchedule::is_yearly`]). The successor sits 365 days
    /// further out on both axes and is always born `Pending`.
    pub fn next_yearly_checkpoint(
        &self,
        current_offset_days: i64,
        current_due_date: NaiveDate,
    ) -> StageCheckpoint {
        let next_offset = current_offset_days + YEARLY_INTERVAL_DAYS;
        let years = next_offset / YEARLY_INTERVAL_DAYS;
        StageCheckpoint {
            stage_name: format!("{years} years later"),
            stage_offset_days: next_offset,
            due_date: current_due_date + Duration::days(YEARLY_INTERVAL_DAYS),
            status: ReviewTaskState::Pending,
        }
    }
}
