//! # leitner-engine
//!
//! Deterministic review calendars for Leitner-box spaced repetition.
//!
//! Given a horizon of N days and a table assigning every stage (box) a timing
//! rule, the engine computes which stages come due on each day 1..=N. It knows
//! nothing about calendar dates, storage, or how reviews are graded; the host
//! application maps day indices onto real dates.
//!
//! ```rust
//! use leitner_engine::{Preset, Schedule, Stage};
//!
//! let schedule = Schedule::from_preset(Preset::Lightspeed, 64);
//! assert_eq!(schedule.len(), 64);
//! assert_eq!(schedule.day(1).unwrap().stages, vec![Stage::S1]);
//! assert_eq!(schedule.day(3).unwrap().stages, vec![Stage::S2, Stage::S1]);
//! ```
//!
//! ## Modules
//!
//! - [`stage`] — the seven Leitner boxes
//! - [`gap`] — static and cyclic spacing between reviews
//! - [`interval`] — per-stage delay + gap rules and the table holding them
//! - [`resolver`] — per-stage due-day tracking
//! - [`schedule`] — day-by-day schedule building
//! - [`preset`] — the Lightspeed and Wyner tables
//! - [`render`] — fixed-width grid output for debugging
//! - [`error`] — Error types

pub mod error;
pub mod gap;
pub mod interval;
pub mod preset;
pub mod render;
pub mod resolver;
pub mod schedule;
pub mod stage;

pub use error::ScheduleError;
pub use gap::{Gap, GapCycle};
pub use interval::{Interval, IntervalTable};
pub use preset::Preset;
pub use render::{render_grid, GridLayout};
pub use resolver::StageResolver;
pub use schedule::{Day, Schedule};
pub use stage::Stage;
