//! Fixed-width grid rendering for eyeballing a schedule.
//!
//! Output format is for people, not programs, and may change.
//!
//! Each cell is the day number followed by a seven-character mask, S7 on the
//! left. A due stage shows its level digit, an idle one shows `.`:
//!
//! ```text
//! 1 ......1  2 ......1  3 .....21
//! ```

use crate::error::{Result, ScheduleError};
use crate::schedule::{Day, Schedule};
use crate::stage::Stage;

/// Rows and columns of one grid block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub rows: usize,
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
        }
    }
}

/// Render `schedule` as blocks of `layout.rows` lines with `layout.columns`
/// cells each. Blocks are separated by a blank line.
///
/// # Errors
/// Returns `ScheduleError::EmptyGrid` if either dimension is zero.
pub fn render_grid(schedule: &Schedule, layout: &GridLayout) -> Result<String> {
    if layout.rows == 0 || layout.columns == 0 {
        return Err(ScheduleError::EmptyGrid {
            rows: layout.rows,
            columns: layout.columns,
        });
    }

    let width = schedule.len().to_string().len();
    let mut out = String::new();

    for (b, block) in schedule.days().chunks(layout.rows * layout.columns).enumerate() {
        if b > 0 {
            out.push('\n');
        }
        for line in block.chunks(layout.columns) {
            let cells: Vec<String> = line.iter().map(|day| cell(day, width)).collect();
            out.push_str(&cells.join("  "));
            out.push('\n');
        }
    }

    Ok(out)
}

fn cell(day: &Day, width: usize) -> String {
    let mask: String = Stage::descending()
        .map(|stage| {
            if day.contains(stage) {
                char::from(b'0' + stage.level())
            } else {
                '.'
            }
        })
        .collect();
    format!("{:>width$} {}", day.number, mask)
}
