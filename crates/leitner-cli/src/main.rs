//! `leitner` CLI — build and inspect Leitner review calendars from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # 64-day Lightspeed schedule, one line per day
//! leitner schedule
//!
//! # Wyner schedule for 120 days as JSON, labelled with calendar dates
//! leitner schedule --preset wyner --days 120 --start 2026-03-01 --json
//!
//! # Schedule from a custom interval table
//! leitner schedule --config my-table.json -o schedule.txt
//!
//! # Debug grid, 4 rows of 7 days per block
//! leitner grid --days 56 --rows 4 --columns 7
//!
//! # Days on which box 4 is reviewed
//! leitner occurrences --stage S4 --preset wyner
//!
//! # Dump the built-in tables (usable as --config templates)
//! leitner presets --name lightspeed
//! ```

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use clap::{Args, Parser, Subcommand};
use leitner_engine::{render_grid, GridLayout, IntervalTable, Preset, Schedule, Stage};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leitner", version, about = "Leitner review calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Where the interval table comes from, and how many days to build.
#[derive(Args)]
struct Source {
    /// Built-in preset (lightspeed, wyner)
    #[arg(short, long, default_value = "lightspeed", conflicts_with = "config")]
    preset: Preset,
    /// JSON interval table file (overrides --preset)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of days to compute
    #[arg(short, long, default_value_t = 64)]
    days: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stages due on each day
    Schedule {
        #[command(flatten)]
        source: Source,
        /// Calendar date of day 1 (YYYY-MM-DD); labels every day with its date
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the schedule as a fixed-width grid
    Grid {
        #[command(flatten)]
        source: Source,
        /// Lines per block
        #[arg(long, default_value_t = 8)]
        rows: usize,
        /// Days per line
        #[arg(long, default_value_t = 8)]
        columns: usize,
    },
    /// Print the days on which one stage is due
    Occurrences {
        #[command(flatten)]
        source: Source,
        /// Stage to look up (S1..S7)
        #[arg(short, long)]
        stage: Stage,
    },
    /// Dump built-in interval tables as JSON
    Presets {
        /// Only dump this preset
        #[arg(short, long)]
        name: Option<Preset>,
    },
}

/// One line of `schedule --json` output.
#[derive(Serialize)]
struct DayEntry {
    number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<NaiveDate>,
    stages: Vec<Stage>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Schedule {
            source,
            start,
            json,
            output,
        } => {
            let schedule = build(&source)?;
            let entries = label_days(&schedule, start)?;
            let text = if json {
                serde_json::to_string_pretty(&entries)?
            } else {
                format_days(&entries)
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Grid {
            source,
            rows,
            columns,
        } => {
            let schedule = build(&source)?;
            let grid = render_grid(&schedule, &GridLayout { rows, columns })
                .context("Failed to render grid")?;
            print!("{}", grid);
        }
        Commands::Occurrences { source, stage } => {
            let schedule = build(&source)?;
            for day in schedule.occurrences(stage) {
                println!("{}", day);
            }
        }
        Commands::Presets { name } => {
            let json = match name {
                Some(preset) => serde_json::to_string_pretty(&preset.table())?,
                None => {
                    let mut all = serde_json::Map::new();
                    for preset in Preset::ALL {
                        all.insert(preset.to_string(), serde_json::to_value(preset.table())?);
                    }
                    serde_json::to_string_pretty(&all)?
                }
            };
            println!("{}", json);
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays clean for piping. `RUST_LOG` takes
/// precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(false)
        .init();
}

fn load_table(source: &Source) -> Result<IntervalTable> {
    match &source.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            IntervalTable::from_json(&json)
                .with_context(|| format!("Invalid interval table: {}", path.display()))
        }
        None => Ok(source.preset.table()),
    }
}

fn build(source: &Source) -> Result<Schedule> {
    let table = load_table(source)?;
    let schedule = Schedule::build(source.days, &table);
    debug!(days = schedule.len(), "schedule ready");
    Ok(schedule)
}

/// Pair each day with its calendar date when a start date is given.
/// Day 1 falls on `start`.
fn label_days(schedule: &Schedule, start: Option<NaiveDate>) -> Result<Vec<DayEntry>> {
    schedule
        .iter()
        .map(|day| {
            let date = match start {
                Some(start) => Some(
                    start
                        .checked_add_days(Days::new(u64::from(day.number - 1)))
                        .with_context(|| {
                            format!("Day {} is past the last representable date", day.number)
                        })?,
                ),
                None => None,
            };
            Ok(DayEntry {
                number: day.number,
                date,
                stages: day.stages.clone(),
            })
        })
        .collect()
}

/// `day 3: S2 S1`, or `day 3 (2026-03-03): S2 S1` with dates. Days with
/// nothing due show `-`.
fn format_days(entries: &[DayEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let stages = if entry.stages.is_empty() {
            "-".to_string()
        } else {
            entry
                .stages
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        let line = match entry.date {
            Some(date) => format!("day {} ({}): {}\n", entry.number, date, stages),
            None => format!("day {}: {}\n", entry.number, stages),
        };
        out.push_str(&line);
    }
    out
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
