//! Per-stage timing rules and the configuration table that holds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::gap::{Gap, GapCursor};
use crate::stage::Stage;

/// Timing rule for one stage: a one-time `delay` plus a recurring [`Gap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Shift applied to the first scheduled review only. May be negative.
    #[serde(default)]
    pub delay: i64,
    pub gap: Gap,
}

impl Interval {
    pub fn new(delay: i64, gap: Gap) -> Self {
        Self { delay, gap }
    }

    /// Fresh delta state for this interval, with the delay not yet applied.
    pub fn cursor(&self) -> IntervalCursor<'_> {
        IntervalCursor {
            delay: self.delay,
            gap: self.gap.cursor(),
            delayed: false,
        }
    }
}

/// Produces successive due-day deltas for one stage.
///
/// The first delta is `gap + delay`; every later delta is the bare gap.
#[derive(Debug, Clone)]
pub struct IntervalCursor<'a> {
    delay: i64,
    gap: GapCursor<'a>,
    delayed: bool,
}

impl IntervalCursor<'_> {
    pub fn next_delta(&mut self) -> i64 {
        let gap = self.gap.value();
        if self.delayed {
            gap
        } else {
            self.delayed = true;
            gap.saturating_add(self.delay)
        }
    }

    /// See [`GapCursor::catch_up`].
    pub(crate) fn catch_up(&mut self, day: i64) -> i64 {
        self.gap.catch_up(day)
    }
}

impl Iterator for IntervalCursor<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.next_delta())
    }
}

/// One [`Interval`] for every [`Stage`].
///
/// The table is read-only configuration and can be shared between any number
/// of schedule builds. It always covers all seven stages; maps that miss one
/// are rejected when converted.
///
/// Serialized as a JSON object keyed by stage name:
///
/// ```
/// use leitner_engine::{IntervalTable, Stage};
///
/// let table = IntervalTable::from_json(r#"{
///     "S1": {"gap": 1},
///     "S2": {"delay": 1, "gap": 2},
///     "S3": {"delay": 2, "gap": 4},
///     "S4": {"delay": -3, "gap": [7, 9]},
///     "S5": {"gap": 16},
///     "S6": {"delay": 8, "gap": 32},
///     "S7": {"delay": -8, "gap": 64}
/// }"#).unwrap();
/// assert_eq!(table.interval(Stage::S4).delay, -3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Stage, Interval>",
    into = "BTreeMap<Stage, Interval>"
)]
pub struct IntervalTable {
    // One entry per stage, indexed by `Stage::index`.
    intervals: Vec<Interval>,
}

impl IntervalTable {
    /// Build a table from intervals listed in stage order (S1 first).
    pub fn new(intervals: [Interval; Stage::COUNT]) -> Self {
        Self {
            intervals: intervals.into(),
        }
    }

    /// Parse a table from its JSON form.
    ///
    /// # Errors
    /// Returns `ScheduleError::Config` for malformed JSON, a missing stage, or
    /// an invalid gap.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn interval(&self, stage: Stage) -> &Interval {
        &self.intervals[stage.index()]
    }

    /// `(stage, interval)` pairs in ascending stage order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &Interval)> {
        Stage::ALL.into_iter().zip(self.intervals.iter())
    }
}

impl TryFrom<BTreeMap<Stage, Interval>> for IntervalTable {
    type Error = ScheduleError;

    fn try_from(mut map: BTreeMap<Stage, Interval>) -> Result<Self> {
        let intervals = Stage::ALL
            .into_iter()
            .map(|stage| map.remove(&stage).ok_or(ScheduleError::MissingStage(stage)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { intervals })
    }
}

impl From<IntervalTable> for BTreeMap<Stage, Interval> {
    fn from(table: IntervalTable) -> Self {
        Stage::ALL.into_iter().zip(table.intervals).collect()
    }
}
