//! Named configuration tables.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ScheduleError;
use crate::gap::{Gap, GapCycle};
use crate::interval::{Interval, IntervalTable};
use crate::stage::Stage;

/// A built-in spacing curve over the seven stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Doubling gaps with small shifts on the first review.
    #[default]
    Lightspeed,
    /// Pulls every first review earlier; S4 and S6 alternate their gaps.
    Wyner,
}

/// `(delay, first gap, further gaps)` per stage, S1 first. Without further
/// gaps the stage has a static gap, otherwise it cycles through all of them.
type PresetRow = (i64, NonZeroU32, &'static [NonZeroU32]);

const fn days(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(d) => d,
        None => panic!("preset gaps are positive"),
    }
}

const LIGHTSPEED: [PresetRow; Stage::COUNT] = [
    (0, days(1), &[]),
    (1, days(2), &[]),
    (2, days(4), &[]),
    (4, days(8), &[]),
    (0, days(16), &[]),
    (8, days(32), &[]),
    (-8, days(64), &[]),
];

const WYNER: [PresetRow; Stage::COUNT] = [
    (0, days(1), &[]),
    (-1, days(2), &[]),
    (-2, days(4), &[]),
    (-3, days(7), &[days(9)]),
    (-4, days(16), &[]),
    (-5, days(29), &[days(35)]),
    (-8, days(64), &[]),
];

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Lightspeed, Preset::Wyner];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Lightspeed => "lightspeed",
            Preset::Wyner => "wyner",
        }
    }

    /// The preset's interval table. Each call returns a new table.
    pub fn table(self) -> IntervalTable {
        debug!(preset = self.name(), "building preset table");
        let rows = match self {
            Preset::Lightspeed => LIGHTSPEED,
            Preset::Wyner => WYNER,
        };
        IntervalTable::new(rows.map(|(delay, first, rest)| Interval::new(delay, gap(first, rest))))
    }
}

fn gap(first: NonZeroU32, rest: &[NonZeroU32]) -> Gap {
    if rest.is_empty() {
        Gap::Static(first)
    } else {
        Gap::Dynamic(GapCycle::from_parts(first, rest))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::UnknownPreset(s.to_string()))
    }
}
