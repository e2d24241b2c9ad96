use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::America::Chicago;
use chrono_tz::Pacific::Auckland;
use proptest::prelude::*;

use season_points::format::format_points;
use season_points::points::*;
use season_points::{Error, ErrorKind};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

const FIRST_THIRTY_DAYS: [u64; 30] = [
    2, 3, 4, 5, 7, 9, 12, 16, 22, 29, 39, 52, 70, 94, 126, 170, 228, 307, 412, 554, 744, 1000,
    1344, 1806, 2428, 3263, 4386, 5895, 7923, 10649,
];

// ── Recurrence ──

#[test]
fn test_seed_days() {
    assert_eq!(points_for_day(1).unwrap(), 2);
    assert_eq!(points_for_day(2).unwrap(), 3);
}

#[test]
fn test_first_thirty_days() {
    for (i, &expected) in FIRST_THIRTY_DAYS.iter().enumerate() {
        let day = i as i64 + 1;
        assert_eq!(points_for_day(day).unwrap(), expected, "Day {}", day);
    }
}

#[test]
fn test_day_30_matches_recurrence_run_by_hand() {
    let mut two_back = 2.0_f64;
    let mut one_back = 3.0_f64;
    for _ in 3..=30 {
        let next = (two_back + 0.6 * one_back).round();
        two_back = one_back;
        one_back = next;
    }
    assert_eq!(points_for_day(30).unwrap(), one_back as u64);
    assert_eq!(points_for_day(30).unwrap(), 10_649);
}

#[test]
fn test_points_table() {
    let table = PointsTable::build(30);
    assert_eq!(table.as_slice(), &FIRST_THIRTY_DAYS);
    assert_eq!(table.get(0), None);
    assert_eq!(table.get(31), None);

    let short = PointsTable::build(5);
    assert_eq!(short.len(), 5);
    assert_eq!(short.get(5), Some(7));

    assert_eq!(PointsTable::build(1).get(1), Some(2));
    assert_eq!(PointsTable::build(500).len(), GROWTH_CAP_DAY as usize);
}

// ── Linear growth ──

#[test]
fn test_linear_growth_after_cap() {
    assert_eq!(points_for_day(31).unwrap(), 10_649 + LINEAR_GROWTH_PER_DAY);
    assert_eq!(points_for_day(92).unwrap(), 10_649 + 62 * LINEAR_GROWTH_PER_DAY);
}

#[test]
fn test_day_72_calibration() {
    let points = points_for_day(72).unwrap();
    assert_eq!(points, 455_849);
    assert_approx!(points, 456_000, 1000.0);
}

#[test]
fn test_monotonic_through_longest_season() {
    let mut previous = 0;
    for day in 1..=200 {
        let points = points_for_day(day).unwrap();
        assert!(points >= previous, "Day {}: {} < {}", day, points, previous);
        previous = points;
    }
}

#[test]
fn test_rejects_day_below_one() {
    for day in [0, -1, i64::MIN] {
        let err = points_for_day(day).unwrap_err();
        assert_eq!(err, Error::InvalidDayOfSeason(day));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    assert_eq!(
        Error::InvalidDayOfSeason(0).to_string(),
        "day of season must be at least 1, got 0"
    );
}

#[test]
fn test_overflow_is_an_error() {
    let err = points_for_day(i64::MAX).unwrap_err();
    assert_eq!(err, Error::PointsOverflow(i64::MAX));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

// ── Daily points by date ──

#[test]
fn test_daily_points_known_dates() {
    assert_eq!(daily_points(date(2025, 12, 1)).unwrap(), 2);
    assert_eq!(daily_points(date(2025, 12, 30)).unwrap(), 10_649);
    assert_eq!(daily_points(date(2026, 1, 1)).unwrap(), 10_649 + 2 * LINEAR_GROWTH_PER_DAY);
    assert_eq!(daily_points(date(2026, 2, 10)).unwrap(), 455_849);
    assert_eq!(daily_points(date(2026, 3, 1)).unwrap(), 2);
    assert_eq!(daily_points(date(2026, 3, 2)).unwrap(), 3);
    assert_eq!(daily_points(date(2026, 5, 31)).unwrap(), 10_649 + 62 * LINEAR_GROWTH_PER_DAY);
}

#[test]
fn test_daily_points_from_str() {
    assert_eq!(daily_points_from_str("2026-02-10").unwrap(), 455_849);
    assert_eq!(daily_points_from_str("2026-09-01").unwrap(), 2);
}

#[test]
fn test_daily_points_from_str_rejects_invalid_dates() {
    for input in ["", "yesterday", "2026-02-30", "2026-00-10"] {
        let err = daily_points_from_str(input).unwrap_err();
        assert!(matches!(err, Error::InvalidDate(..)), "{input:?}: {err:?}");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_daily_points_at_uses_callers_local_day() {
    let instant = Utc.with_ymd_and_hms(2026, 3, 1, 3, 0, 0).unwrap();

    assert_eq!(daily_points_at(&instant).unwrap(), 2);

    // Still the evening of February 28 in Chicago, winter day 90.
    let chicago = instant.with_timezone(&Chicago);
    assert_eq!(daily_points_at(&chicago).unwrap(), 10_649 + 60 * LINEAR_GROWTH_PER_DAY);
}

#[test]
fn test_daily_points_at_ahead_of_utc() {
    // 2026-11-30T12:00Z is already December 1 in Auckland.
    let instant = Utc.with_ymd_and_hms(2026, 11, 30, 12, 0, 0).unwrap();
    assert_eq!(daily_points_at(&instant).unwrap(), 10_649 + 61 * LINEAR_GROWTH_PER_DAY);
    assert_eq!(daily_points_at(&instant.with_timezone(&Auckland)).unwrap(), 2);
}

// ── Formatting ──

#[test]
fn test_format_small_values() {
    assert_eq!(format_points(0), "0");
    assert_eq!(format_points(2), "2");
    assert_eq!(format_points(999), "999");
}

#[test]
fn test_format_thousands() {
    let cases: &[(u64, &str)] = &[
        (1000, "1K"),
        (1499, "1K"),
        (1500, "2K"),
        (10_649, "11K"),
        (455_849, "456K"),
        (456_000, "456K"),
        (999_499, "999K"),
        (999_500, "1000K"),
        (12_345_678, "12346K"),
    ];
    for &(points, expected) in cases {
        assert_eq!(format_points(points), expected, "points={}", points);
    }
}

#[test]
fn test_format_daily_points() {
    assert_eq!(format_points(daily_points(date(2026, 2, 10)).unwrap()), "456K");
}

// ── Properties ──

proptest! {
    #[test]
    fn prop_points_non_decreasing(day in 1i64..1_000_000) {
        prop_assert!(points_for_day(day + 1).unwrap() >= points_for_day(day).unwrap());
    }

    #[test]
    fn prop_linear_past_cap(day in 31i64..1_000_000) {
        let step = points_for_day(day + 1).unwrap() - points_for_day(day).unwrap();
        prop_assert_eq!(step, LINEAR_GROWTH_PER_DAY);
    }
}
