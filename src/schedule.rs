use chrono::NaiveDate;

use crate::calendar;
use crate::error::Error;
use crate::points::{PointsTable, GROWTH_CAP_DAY, LINEAR_GROWTH_PER_DAY};
use crate::types::{DayPoints, Season, SeasonSchedule};

/// Points for every day of `season` beginning in `season_year`.
///
/// The recurrence table is built once for the whole season rather than once
/// per day.
pub fn generate_season_schedule(season: Season, season_year: i32) -> Result<SeasonSchedule, Error> {
    let start = calendar::season_start(season, season_year)?;
    let length = calendar::season_length(season, season_year);
    let table = PointsTable::build(length);
    let cap = GROWTH_CAP_DAY as u32;

    let mut days = Vec::with_capacity(length as usize);
    for (day_of_season, date) in (1..=length).zip(start.iter_days()) {
        let points = match table.get(day_of_season) {
            Some(points) => points,
            None => {
                let base = table.get(cap).ok_or(Error::InvalidDayOfSeason(i64::from(day_of_season)))?;
                base + u64::from(day_of_season - cap) * LINEAR_GROWTH_PER_DAY
            }
        };
        days.push(DayPoints {
            date,
            day_of_season,
            points,
        });
    }

    let total_points = days.iter().map(|d| d.points).sum();
    let peak_points = days.iter().map(|d| d.points).max().unwrap_or_default();

    tracing::debug!(%season, season_year, days = days.len(), total_points, "generated season schedule");

    Ok(SeasonSchedule {
        season,
        season_year,
        days,
        total_points,
        peak_points,
    })
}

/// Schedule for the season containing `date`.
pub fn schedule_for_date(date: NaiveDate) -> Result<SeasonSchedule, Error> {
    let resolution = calendar::resolve_season(date)?;
    generate_season_schedule(resolution.season, resolution.season_year)
}

/// The schedule entry for `date`, or `None` if the date is outside the season.
pub fn lookup_points(schedule: &SeasonSchedule, date: NaiveDate) -> Option<DayPoints> {
    let resolution = calendar::resolve_season(date).ok()?;
    if resolution.season != schedule.season || resolution.season_year != schedule.season_year {
        return None;
    }
    schedule
        .days
        .get((resolution.day_of_season - 1) as usize)
        .copied()
}

pub fn schedule_to_compact(schedule: &SeasonSchedule) -> Vec<u64> {
    schedule.days.iter().map(|d| d.points).collect()
}
