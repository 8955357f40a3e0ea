//! The seven Leitner boxes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// A Leitner box. Higher stages are reviewed less often.
///
/// Ordering follows the level (`S1 < S7`). Within a [`Day`](crate::Day) stages
/// are listed in descending order, S7 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
}

impl Stage {
    /// Number of stages.
    pub const COUNT: usize = 7;

    /// All stages in ascending order.
    pub const ALL: [Stage; Stage::COUNT] = [
        Stage::S1,
        Stage::S2,
        Stage::S3,
        Stage::S4,
        Stage::S5,
        Stage::S6,
        Stage::S7,
    ];

    /// Zero-based position of this stage in [`Stage::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// One-based level (S1 → 1, S7 → 7).
    pub const fn level(self) -> u8 {
        self as u8 + 1
    }

    /// All stages in the order a day reports them (S7 first).
    pub fn descending() -> impl Iterator<Item = Stage> {
        Stage::ALL.into_iter().rev()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.level())
    }
}

impl FromStr for Stage {
    type Err = ScheduleError;

    /// Accepts `S4`, `s4` or a bare level such as `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix(['S', 's']).unwrap_or(trimmed);
        match digits.parse::<usize>() {
            Ok(level @ 1..=Stage::COUNT) => Ok(Stage::ALL[level - 1]),
            _ => Err(ScheduleError::UnknownStage(s.to_string())),
        }
    }
}
