use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rand::RngCore;
use std::time::Duration;

use zipgrid::daily::{self, DailyChallenge, SeededRng};
use zipgrid::session::Clock;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Clock pinned to a fixed instant.
struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[test]
fn seed_is_derived_from_the_calendar_day() {
    assert_eq!(daily::seed_for_date(date(2024, 3, 15)), 20240315);
    assert_eq!(daily::seed_for_date(date(2024, 3, 16)), 20240316);
    assert_eq!(daily::seed_for_date(date(2024, 4, 15)), 20240415);
    assert_eq!(daily::seed_for_date(date(2025, 1, 1)), 20250101);
}

#[test]
fn lcg_steps_match_the_fixed_constants() {
    let mut rng = SeededRng::new(1);
    // 1 * 6364136223846793005 + 1442695040888963407 (mod 2^64)
    assert_eq!(rng.next_u64(), 7806831264735756412);

    let mut left = SeededRng::new(20240315);
    let mut right = SeededRng::new(20240315);
    for _ in 0..32 {
        assert_eq!(left.next_u64(), right.next_u64(), "equal seeds, equal streams");
    }

    let mut other = SeededRng::new(20240316);
    assert_ne!(
        SeededRng::new(20240315).next_u64(),
        other.next_u64(),
        "neighboring seeds diverge immediately"
    );
}

#[test]
fn same_date_yields_the_identical_level() {
    let first = daily::generate_daily_level(date(2024, 3, 15)).expect("daily generation succeeds");
    let second = daily::generate_daily_level(date(2024, 3, 15)).expect("daily generation succeeds");
    assert_eq!(first, second, "the daily level is a pure function of the date");
}

#[test]
fn daily_levels_use_the_daily_shape() {
    let level = daily::generate_daily_level(date(2024, 3, 15)).expect("daily generation succeeds");

    assert_eq!(level.size(), daily::DAILY_GRID_SIZE);
    assert_eq!(level.max_number(), daily::DAILY_NODE_COUNT);

    let solution = level.solution_path().expect("generated levels carry a solution");
    assert_eq!(solution.len(), 36);
    assert_eq!(level.waypoint(1), Some(solution[0]));
    assert_eq!(level.waypoint(8), Some(solution[35]));
}

#[test]
fn challenge_carries_the_formatted_date() {
    let challenge = DailyChallenge::for_date(date(2024, 3, 15)).expect("daily generation succeeds");
    assert_eq!(challenge.date, date(2024, 3, 15));
    assert_eq!(challenge.date_string, "2024-03-15");
    assert_eq!(
        challenge.level,
        daily::generate_daily_level(date(2024, 3, 15)).expect("daily generation succeeds")
    );
}

#[test]
fn challenge_knows_whether_it_is_today() {
    let challenge = DailyChallenge::for_date(date(2024, 3, 15)).expect("daily generation succeeds");

    let same_day = FixedClock(
        Local
            .with_ymd_and_hms(2024, 3, 15, 18, 30, 0)
            .single()
            .expect("unambiguous local time"),
    );
    let next_day = FixedClock(
        Local
            .with_ymd_and_hms(2024, 3, 16, 0, 0, 1)
            .single()
            .expect("unambiguous local time"),
    );

    assert!(challenge.is_today(&same_day));
    assert!(!challenge.is_today(&next_day));
}

#[test]
fn countdown_runs_to_the_next_local_midnight() {
    let clock = FixedClock(
        Local
            .with_ymd_and_hms(2024, 3, 15, 18, 30, 0)
            .single()
            .expect("unambiguous local time"),
    );

    assert_eq!(
        DailyChallenge::time_until_next(&clock),
        Duration::from_secs(5 * 3600 + 30 * 60)
    );
    assert_eq!(DailyChallenge::formatted_countdown(&clock), "05:30:00");
}
