//! Gaps -- the spacing, in days, between consecutive reviews of one stage.
//!
//! A [`Gap`] is immutable configuration. Reading values from it goes through a
//! [`GapCursor`], which owns the position in a cyclic sequence. Every resolver
//! takes its own cursors, so one schedule never advances another's gaps.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Spacing between two reviews of the same stage.
///
/// In JSON a static gap is a bare number (`16`) and a dynamic gap is an array
/// (`[7, 9]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GapRepr", into = "GapRepr")]
pub enum Gap {
    /// The same number of days every time.
    Static(NonZeroU32),
    /// A fixed sequence of day counts, repeated forever.
    Dynamic(GapCycle),
}

/// A non-empty sequence of positive day counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapCycle(Vec<NonZeroU32>);

impl GapCycle {
    /// Build a cycle, rejecting an empty sequence or any zero value.
    pub fn new(days: impl IntoIterator<Item = u32>) -> Result<Self> {
        let values = days
            .into_iter()
            .map(positive)
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(ScheduleError::EmptyGapCycle);
        }
        Ok(Self(values))
    }

    /// Build a cycle starting with `first` and continuing with `rest`.
    pub(crate) fn from_parts(first: NonZeroU32, rest: &[NonZeroU32]) -> Self {
        let mut values = Vec::with_capacity(rest.len() + 1);
        values.push(first);
        values.extend_from_slice(rest);
        Self(values)
    }

    pub fn values(&self) -> &[NonZeroU32] {
        &self.0
    }
}

impl Gap {
    /// A static gap of `days` days.
    ///
    /// # Errors
    /// Returns `ScheduleError::NonPositiveGap` if `days` is zero.
    pub fn fixed(days: u32) -> Result<Self> {
        positive(days).map(Gap::Static)
    }

    /// A dynamic gap cycling through `days`.
    ///
    /// # Errors
    /// Returns `ScheduleError::EmptyGapCycle` for an empty sequence and
    /// `ScheduleError::NonPositiveGap` if any value is zero.
    pub fn cycle(days: impl IntoIterator<Item = u32>) -> Result<Self> {
        GapCycle::new(days).map(Gap::Dynamic)
    }

    /// Start reading values from the beginning of this gap.
    pub fn cursor(&self) -> GapCursor<'_> {
        GapCursor {
            gap: self,
            position: 0,
        }
    }
}

fn positive(days: u32) -> Result<NonZeroU32> {
    NonZeroU32::new(days).ok_or(ScheduleError::NonPositiveGap(days))
}

/// Reading position within a [`Gap`].
///
/// Also an infinite iterator over the gap's values.
#[derive(Debug, Clone)]
pub struct GapCursor<'a> {
    gap: &'a Gap,
    position: usize,
}

impl GapCursor<'_> {
    /// The next spacing in days.
    ///
    /// Static gaps always return the same value. Dynamic gaps return the
    /// current element and move to the next one, wrapping after the last.
    pub fn value(&mut self) -> i64 {
        match self.gap {
            Gap::Static(days) => i64::from(days.get()),
            Gap::Dynamic(cycle) => {
                let values = cycle.values();
                let days = values[self.position];
                self.position = (self.position + 1) % values.len();
                i64::from(days.get())
            }
        }
    }

    /// Days covered by one full pass over the gap's values.
    fn period(&self) -> i128 {
        match self.gap {
            Gap::Static(days) => i128::from(days.get()),
            Gap::Dynamic(cycle) => cycle.values().iter().map(|d| i128::from(d.get())).sum(),
        }
    }

    /// Move `day` forward by gap values until it reaches day 1.
    ///
    /// Whole periods are skipped arithmetically, so at most one period is
    /// walked value by value. The cursor ends where stepping would have left
    /// it. Days already at 1 or later are returned unchanged.
    pub(crate) fn catch_up(&mut self, day: i64) -> i64 {
        let deficit = 1 - i128::from(day);
        if deficit <= 0 {
            return day;
        }
        let period = self.period();
        let mut day = i128::from(day) + (deficit - 1) / period * period;
        while day < 1 {
            day += i128::from(self.value());
        }
        i64::try_from(day).unwrap_or(i64::MAX)
    }
}

impl Iterator for GapCursor<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.value())
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum GapRepr {
    Days(u32),
    Cycle(Vec<u32>),
}

impl TryFrom<GapRepr> for Gap {
    type Error = ScheduleError;

    fn try_from(repr: GapRepr) -> Result<Self> {
        match repr {
            GapRepr::Days(days) => Gap::fixed(days),
            GapRepr::Cycle(days) => Gap::cycle(days),
        }
    }
}

impl From<Gap> for GapRepr {
    fn from(gap: Gap) -> Self {
        match gap {
            Gap::Static(days) => GapRepr::Days(days.get()),
            Gap::Dynamic(cycle) => {
                GapRepr::Cycle(cycle.values().iter().map(|d| d.get()).collect())
            }
        }
    }
}
