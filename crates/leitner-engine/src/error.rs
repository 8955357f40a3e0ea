//! Error types for leitner-engine operations.

use thiserror::Error;

use crate::stage::Stage;

/// Errors raised while building configuration tables or resolving names.
///
/// A built [`Schedule`](crate::Schedule) never fails; every error here is a
/// construction-time rejection of bad configuration.
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Missing interval for stage {0}")]
    MissingStage(Stage),

    #[error("Gap cycle must contain at least one value")]
    EmptyGapCycle,

    #[error("Gap must be a positive number of days, got {0}")]
    NonPositiveGap(u32),

    #[error("Unknown preset: '{0}'. Available presets: lightspeed, wyner")]
    UnknownPreset(String),

    #[error("Unknown stage: '{0}'. Expected S1 through S7")]
    UnknownStage(String),

    #[error("Grid layout needs at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: usize, columns: usize },

    #[error("Configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
