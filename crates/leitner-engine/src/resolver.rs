//! Per-stage due-day tracking.
//!
//! The resolver owns one [`IntervalCursor`] and one due day per stage. Asking it
//! about a day reports the stages due that day and pushes each of them forward
//! by its next gap. Days must be queried in increasing order.

use tracing::trace;

use crate::interval::{IntervalCursor, IntervalTable};
use crate::stage::Stage;

/// Tracks the next due day of every stage.
#[derive(Debug, Clone)]
pub struct StageResolver<'a> {
    cursors: Vec<IntervalCursor<'a>>,
    due: [i64; Stage::COUNT],
}

impl<'a> StageResolver<'a> {
    /// Prime a resolver from `table`.
    ///
    /// Each stage's first delta (gap plus delay) becomes its first due day. A
    /// stage whose first due day falls before day 1 is advanced by its gaps
    /// until it reaches day 1 or later, so early occurrences are dropped and
    /// the rest stay on their absolute days. Whole gap periods are skipped at
    /// once, so priming cost does not depend on the size of the delay.
    pub fn new(table: &'a IntervalTable) -> Self {
        let mut cursors: Vec<IntervalCursor<'a>> =
            table.iter().map(|(_, interval)| interval.cursor()).collect();
        let mut due = [0i64; Stage::COUNT];

        for (slot, cursor) in due.iter_mut().zip(cursors.iter_mut()) {
            let first = cursor.next_delta();
            *slot = cursor.catch_up(first);
        }

        Self { cursors, due }
    }

    /// The day on which `stage` is next due.
    pub fn due_day(&self, stage: Stage) -> i64 {
        self.due[stage.index()]
    }

    /// Stages due on `day`, highest first. Every reported stage advances to
    /// its following due day. A due day that would pass `i64::MAX` stays
    /// there, and the stage stops firing.
    pub fn resolve(&mut self, day: i64) -> Vec<Stage> {
        let mut stages = Vec::new();
        for stage in Stage::descending() {
            let i = stage.index();
            if self.due[i] == day {
                let delta = self.cursors[i].next_delta();
                self.due[i] = self.due[i].saturating_add(delta);
                trace!(day, %stage, next = self.due[i], "stage due");
                stages.push(stage);
            }
        }
        stages
    }
}
