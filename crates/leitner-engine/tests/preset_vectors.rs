//! Regression vectors for the built-in presets.
//!
//! Occurrence lists were derived by hand from each preset's delay/gap rows:
//! the first due day is `gap + delay`, every later one adds the next gap.

use leitner_engine::{Preset, Schedule, Stage};

fn lightspeed_64() -> Schedule {
    Schedule::from_preset(Preset::Lightspeed, 64)
}

fn wyner_64() -> Schedule {
    Schedule::from_preset(Preset::Wyner, 64)
}

fn odd_days(from: u32, to: u32) -> Vec<u32> {
    (from..=to).step_by(2).collect()
}

// ---------------------------------------------------------------------------
// Lightspeed
// ---------------------------------------------------------------------------

#[test]
fn lightspeed_s1_every_day() {
    let schedule = lightspeed_64();
    assert_eq!(schedule.occurrences(Stage::S1), (1..=64).collect::<Vec<_>>());
}

#[test]
fn lightspeed_occurrences_per_stage() {
    let schedule = lightspeed_64();

    assert_eq!(schedule.occurrences(Stage::S2), odd_days(3, 63));
    assert_eq!(
        schedule.occurrences(Stage::S3),
        (6..=62).step_by(4).collect::<Vec<_>>()
    );
    assert_eq!(
        schedule.occurrences(Stage::S4),
        vec![12, 20, 28, 36, 44, 52, 60]
    );
    assert_eq!(schedule.occurrences(Stage::S5), vec![16, 32, 48, 64]);
    assert_eq!(schedule.occurrences(Stage::S6), vec![40]);
    assert_eq!(schedule.occurrences(Stage::S7), vec![56]);
}

#[test]
fn lightspeed_spot_days() {
    let schedule = lightspeed_64();
    let stages = |n: u32| schedule.day(n).unwrap().stages.clone();

    assert_eq!(stages(1), vec![Stage::S1]);
    assert_eq!(stages(2), vec![Stage::S1]);
    assert_eq!(stages(3), vec![Stage::S2, Stage::S1]);
    assert_eq!(stages(6), vec![Stage::S3, Stage::S1]);
    assert_eq!(stages(12), vec![Stage::S4, Stage::S1]);
    assert_eq!(stages(16), vec![Stage::S5, Stage::S1]);
    assert_eq!(stages(40), vec![Stage::S6, Stage::S1]);
    assert_eq!(stages(56), vec![Stage::S7, Stage::S1]);
}

#[test]
fn lightspeed_day_64_has_no_s2() {
    // S2 starts on day 3 and moves in steps of 2, so it only lands on odd days.
    let schedule = lightspeed_64();
    let last = schedule.day(64).unwrap();
    assert_eq!(last.number, 64);
    assert_eq!(last.stages, vec![Stage::S5, Stage::S1]);
    assert!(!last.contains(Stage::S2));
}

#[test]
fn lightspeed_s7_has_no_early_occurrence() {
    let schedule = lightspeed_64();
    for day in schedule.iter().take(55) {
        assert!(!day.contains(Stage::S7), "S7 fired early on day {}", day.number);
    }
    assert!(schedule.day(56).unwrap().contains(Stage::S7));
}

// ---------------------------------------------------------------------------
// Wyner
// ---------------------------------------------------------------------------

#[test]
fn wyner_occurrences_per_stage() {
    let schedule = wyner_64();

    assert_eq!(schedule.occurrences(Stage::S1), (1..=64).collect::<Vec<_>>());
    assert_eq!(schedule.occurrences(Stage::S2), odd_days(1, 63));
    assert_eq!(
        schedule.occurrences(Stage::S3),
        (2..=62).step_by(4).collect::<Vec<_>>()
    );
    assert_eq!(
        schedule.occurrences(Stage::S4),
        vec![4, 13, 20, 29, 36, 45, 52, 61]
    );
    assert_eq!(schedule.occurrences(Stage::S5), vec![12, 28, 44, 60]);
    assert_eq!(schedule.occurrences(Stage::S6), vec![24, 59]);
    assert_eq!(schedule.occurrences(Stage::S7), vec![56]);
}

#[test]
fn wyner_s4_alternates_nine_and_seven() {
    let schedule = Schedule::from_preset(Preset::Wyner, 128);
    let days = schedule.occurrences(Stage::S4);
    assert_eq!(&days[..4], &[4, 13, 20, 29]);

    let gaps: Vec<u32> = days.windows(2).map(|w| w[1] - w[0]).collect();
    for (i, gap) in gaps.iter().enumerate() {
        let expected = if i % 2 == 0 { 9 } else { 7 };
        assert_eq!(*gap, expected, "gap #{} of S4", i);
    }
}

#[test]
fn wyner_s6_alternates_thirty_five_and_twenty_nine() {
    let schedule = Schedule::from_preset(Preset::Wyner, 128);
    assert_eq!(schedule.occurrences(Stage::S6), vec![24, 59, 88, 123]);
}

#[test]
fn wyner_spot_days() {
    let schedule = wyner_64();
    let stages = |n: u32| schedule.day(n).unwrap().stages.clone();

    assert_eq!(stages(1), vec![Stage::S2, Stage::S1]);
    assert_eq!(stages(4), vec![Stage::S4, Stage::S1]);
    assert_eq!(stages(13), vec![Stage::S4, Stage::S2, Stage::S1]);
    assert_eq!(stages(24), vec![Stage::S6, Stage::S1]);
    assert_eq!(stages(59), vec![Stage::S6, Stage::S2, Stage::S1]);
}

// ---------------------------------------------------------------------------
// Both presets
// ---------------------------------------------------------------------------

#[test]
fn presets_are_deterministic() {
    for preset in Preset::ALL {
        assert_eq!(
            Schedule::from_preset(preset, 200),
            Schedule::from_preset(preset, 200),
            "{} differs between builds",
            preset
        );
    }
}

#[test]
fn shorter_horizon_is_a_prefix() {
    for preset in Preset::ALL {
        let long = Schedule::from_preset(preset, 100);
        let short = Schedule::from_preset(preset, 30);
        assert_eq!(short.days(), &long.days()[..30]);
    }
}
