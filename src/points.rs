use chrono::{DateTime, NaiveDate, TimeZone};

use crate::calendar;
use crate::error::Error;

pub const DAY_ONE_POINTS: u64 = 2;
pub const DAY_TWO_POINTS: u64 = 3;
/// Weight applied to the previous day's points in the recurrence.
pub const PREVIOUS_DAY_WEIGHT: f64 = 0.6;
/// Last day computed with the recurrence. Later days grow linearly.
pub const GROWTH_CAP_DAY: i64 = 30;
/// Points added per day past [GROWTH_CAP_DAY], calibrated so day 72 lands
/// near 456K.
pub const LINEAR_GROWTH_PER_DAY: u64 = 10_600;

/// Points for days `1..=n` of a season, with `n` at most [GROWTH_CAP_DAY].
///
/// Day `d >= 3` is `round(points[d - 2] + 0.6 * points[d - 1])`, rounded at
/// every step so each value feeds the next as an integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsTable {
    values: Vec<u64>,
}

impl PointsTable {
    pub fn build(through_day: u32) -> Self {
        let len = (through_day as usize).clamp(2, GROWTH_CAP_DAY as usize);
        let mut values = Vec::with_capacity(len);
        values.push(DAY_ONE_POINTS);
        values.push(DAY_TWO_POINTS);
        while values.len() < len {
            let two_back = values[values.len() - 2] as f64;
            let one_back = values[values.len() - 1] as f64;
            values.push((two_back + PREVIOUS_DAY_WEIGHT * one_back).round() as u64);
        }
        Self { values }
    }

    /// Points for a 1-based day, if the table reaches that far.
    pub fn get(&self, day_of_season: u32) -> Option<u64> {
        let idx = (day_of_season as usize).checked_sub(1)?;
        self.values.get(idx).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.values
    }
}

/// Points earned on the given 1-based day of a season.
pub fn points_for_day(day_of_season: i64) -> Result<u64, Error> {
    if day_of_season < 1 {
        return Err(Error::InvalidDayOfSeason(day_of_season));
    }

    let capped = day_of_season.min(GROWTH_CAP_DAY) as u32;
    let table = PointsTable::build(capped);
    let base = table.get(capped).ok_or(Error::InvalidDayOfSeason(day_of_season))?;

    if day_of_season <= GROWTH_CAP_DAY {
        return Ok(base);
    }

    let extra_days = (day_of_season - GROWTH_CAP_DAY) as u64;
    extra_days
        .checked_mul(LINEAR_GROWTH_PER_DAY)
        .and_then(|growth| growth.checked_add(base))
        .ok_or(Error::PointsOverflow(day_of_season))
}

/// Points for a calendar date.
pub fn daily_points(date: NaiveDate) -> Result<u64, Error> {
    let resolution = calendar::resolve_season(date)?;
    let points = points_for_day(i64::from(resolution.day_of_season))?;
    tracing::debug!(
        %date,
        season = %resolution.season,
        day_of_season = resolution.day_of_season,
        points,
        "computed daily points"
    );
    Ok(points)
}

/// Points for the local calendar day of `moment` in its own time zone.
///
/// Callers wanting "today" pass in the current time, e.g. `Local::now()`.
pub fn daily_points_at<Tz: TimeZone>(moment: &DateTime<Tz>) -> Result<u64, Error> {
    daily_points(moment.date_naive())
}

/// Points for a date given as `YYYY-MM-DD`.
pub fn daily_points_from_str(input: &str) -> Result<u64, Error> {
    daily_points(calendar::parse_date(input)?)
}
