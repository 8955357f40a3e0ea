//! Tests for the debug grid renderer.

use leitner_engine::{render_grid, GridLayout, Preset, Schedule};

#[test]
fn blocks_split_by_rows_times_columns() {
    let schedule = Schedule::from_preset(Preset::Lightspeed, 6);
    let grid = render_grid(&schedule, &GridLayout { rows: 1, columns: 3 }).unwrap();
    assert_eq!(
        grid,
        "1 ......1  2 ......1  3 .....21\n\n4 ......1  5 .....21  6 ....3.1\n"
    );
}

#[test]
fn day_numbers_right_aligned() {
    let schedule = Schedule::from_preset(Preset::Wyner, 12);
    let grid = render_grid(&schedule, &GridLayout { rows: 4, columns: 3 }).unwrap();
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], " 1 .....21   2 ....3.1   3 .....21");
    assert_eq!(lines[3], "10 ....3.1  11 .....21  12 ..5...1");
}

#[test]
fn default_layout_is_eight_by_eight() {
    let schedule = Schedule::from_preset(Preset::Lightspeed, 64);
    let grid = render_grid(&schedule, &GridLayout::default()).unwrap();
    assert_eq!(grid.lines().count(), 8);
    assert!(grid.lines().last().unwrap().ends_with("64 ..5...1"));
}
