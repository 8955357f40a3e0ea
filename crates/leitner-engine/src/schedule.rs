//! Schedule building -- runs a [`StageResolver`] over days `1..=capacity`.
//!
//! The result is an immutable list of [`Day`] records, one per day index, which
//! the host application maps onto calendar dates and review sessions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::interval::IntervalTable;
use crate::preset::Preset;
use crate::resolver::StageResolver;
use crate::stage::Stage;

/// The stages due on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// 1-based day index.
    pub number: u32,
    /// Due stages, highest first. Empty when nothing is due.
    pub stages: Vec<Stage>,
}

impl Day {
    pub fn contains(&self, stage: Stage) -> bool {
        self.stages.contains(&stage)
    }
}

/// A precomputed review calendar over a fixed number of days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<Day>,
}

impl Schedule {
    /// Build the schedule for days `1..=capacity` from `table`.
    ///
    /// Every call primes its own resolver, so building from the same table
    /// twice yields identical schedules. A capacity of zero yields an empty
    /// schedule.
    pub fn build(capacity: u32, table: &IntervalTable) -> Self {
        debug!(capacity, "building schedule");
        let mut resolver = StageResolver::new(table);
        let days = (1..=capacity)
            .map(|number| Day {
                number,
                stages: resolver.resolve(i64::from(number)),
            })
            .collect();
        Self { days }
    }

    /// Build the schedule for a named preset.
    pub fn from_preset(preset: Preset, capacity: u32) -> Self {
        Self::build(capacity, &preset.table())
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Look up a day by its 1-based number.
    pub fn day(&self, number: u32) -> Option<&Day> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.days.get(index)
    }

    /// Day numbers on which `stage` is due, in ascending order.
    pub fn occurrences(&self, stage: Stage) -> Vec<u32> {
        self.days
            .iter()
            .filter(|day| day.contains(stage))
            .map(|day| day.number)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
