//! WASM bindings for leitner-engine.
//!
//! Exposes schedule building, preset tables and the debug grid to JavaScript
//! via `wasm-bindgen`. Schedules and tables cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p leitner-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/leitner-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/leitner_engine_wasm.wasm
//! ```

use leitner_engine::{render_grid, GridLayout, IntervalTable, Preset, Schedule};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Boundary helpers
// ---------------------------------------------------------------------------
//
// The `*_json` functions do the work and report errors as plain strings so
// they can be tested natively; the exports only convert errors to `JsValue`.

fn parse_preset(name: &str) -> Result<Preset, String> {
    name.parse::<Preset>().map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn schedule_json(preset: &str, capacity: u32) -> Result<String, String> {
    let preset = parse_preset(preset)?;
    to_json(&Schedule::from_preset(preset, capacity))
}

fn schedule_from_config_json(config_json: &str, capacity: u32) -> Result<String, String> {
    let table = IntervalTable::from_json(config_json).map_err(|e| e.to_string())?;
    to_json(&Schedule::build(capacity, &table))
}

fn preset_table_json(preset: &str) -> Result<String, String> {
    let preset = parse_preset(preset)?;
    to_json(&preset.table())
}

fn grid_text(preset: &str, capacity: u32, rows: usize, columns: usize) -> Result<String, String> {
    let preset = parse_preset(preset)?;
    let schedule = Schedule::from_preset(preset, capacity);
    render_grid(&schedule, &GridLayout { rows, columns }).map_err(|e| e.to_string())
}

fn js_error(message: String) -> JsValue {
    JsValue::from_str(&message)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build the schedule for a named preset (`"lightspeed"` or `"wyner"`).
///
/// Returns a JSON array of `{number, stages}` objects, one per day from 1 to
/// `capacity`, with stages listed highest first (e.g. `["S2", "S1"]`).
#[wasm_bindgen(js_name = "buildSchedule")]
pub fn build_schedule(preset: &str, capacity: u32) -> Result<String, JsValue> {
    schedule_json(preset, capacity).map_err(js_error)
}

/// Build a schedule from a JSON interval table.
///
/// The table maps every stage name to `{delay, gap}`, where `gap` is a number
/// or an array of numbers. All seven stages are required.
#[wasm_bindgen(js_name = "buildScheduleFromConfig")]
pub fn build_schedule_from_config(config_json: &str, capacity: u32) -> Result<String, JsValue> {
    schedule_from_config_json(config_json, capacity).map_err(js_error)
}

/// The JSON interval table behind a named preset.
#[wasm_bindgen(js_name = "presetTable")]
pub fn preset_table(preset: &str) -> Result<String, JsValue> {
    preset_table_json(preset).map_err(js_error)
}

/// Render a preset's schedule as a fixed-width text grid for debugging.
#[wasm_bindgen(js_name = "renderGrid")]
pub fn render_preset_grid(
    preset: &str,
    capacity: u32,
    rows: usize,
    columns: usize,
) -> Result<String, JsValue> {
    grid_text(preset, capacity, rows, columns).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_json_shape() {
        let json = schedule_json("wyner", 2).unwrap();
        assert_eq!(
            json,
            r#"[{"number":1,"stages":["S2","S1"]},{"number":2,"stages":["S3","S1"]}]"#
        );
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = schedule_json("turbo", 10).unwrap_err();
        assert!(err.contains("Unknown preset"), "{}", err);
    }

    #[test]
    fn config_roundtrips_through_preset_table() {
        let table = preset_table_json("lightspeed").unwrap();
        assert_eq!(
            schedule_from_config_json(&table, 64).unwrap(),
            schedule_json("lightspeed", 64).unwrap()
        );
    }

    #[test]
    fn bad_config_is_an_error() {
        assert!(schedule_from_config_json("{}", 10).is_err());
        assert!(schedule_from_config_json("not json", 10).is_err());
    }

    #[test]
    fn grid_rejects_zero_rows() {
        assert!(grid_text("lightspeed", 8, 0, 4).is_err());
        assert_eq!(grid_text("lightspeed", 2, 1, 2).unwrap(), "1 ......1  2 ......1\n");
    }
}
