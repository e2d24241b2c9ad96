use chrono::{Datelike, Days, NaiveDate};

use crate::error::Error;
use crate::types::{Season, SeasonBounds, SeasonResolution};

pub const DECEMBER: u32 = 11;
pub const JANUARY: u32 = 0;
pub const FEBRUARY: u32 = 1;

pub const DAYS_IN_DECEMBER: u32 = 31;
pub const DAYS_IN_JANUARY: u32 = 31;

pub const SEASONS: [SeasonBounds; 4] = [
    SeasonBounds { season: Season::Spring, start_month: 2, start_day: 1, end_month: 4, end_day: 31 },
    SeasonBounds { season: Season::Summer, start_month: 5, start_day: 1, end_month: 7, end_day: 31 },
    SeasonBounds { season: Season::Autumn, start_month: 8, start_day: 1, end_month: 10, end_day: 30 },
    SeasonBounds { season: Season::Winter, start_month: 11, start_day: 1, end_month: 1, end_day: 28 },
];

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

/// Days in a 0-indexed month of `year`.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    days_in_months(year)[month0 as usize]
}

/// Build a date from a year, 0-indexed month and day of month.
pub fn date_from_ymd(year: i32, month0: u32, day: u32) -> Result<NaiveDate, Error> {
    month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
        .ok_or_else(|| {
            Error::InvalidDate(
                format!("{year}-{}-{day}", month0 as u64 + 1),
                "no such calendar date".to_owned(),
            )
        })
}

/// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(input: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|error| Error::InvalidDate(input.to_owned(), error.to_string()))
}

/// Determine the season a date falls in and its 1-based day within that season.
///
/// December, January and February belong to winter, which is counted from
/// December 1 using fixed 31-day December and January offsets. Every other
/// month is looked up in [SEASONS] using the real month lengths of the date's
/// year.
pub fn resolve_season(date: NaiveDate) -> Result<SeasonResolution, Error> {
    let year = date.year();
    let month = date.month0();
    let day = date.day();

    let resolution = match month {
        DECEMBER => SeasonResolution {
            season: Season::Winter,
            day_of_season: day,
            season_year: year,
        },
        JANUARY => SeasonResolution {
            season: Season::Winter,
            day_of_season: DAYS_IN_DECEMBER + day,
            season_year: year - 1,
        },
        FEBRUARY => SeasonResolution {
            season: Season::Winter,
            day_of_season: DAYS_IN_DECEMBER + DAYS_IN_JANUARY + day,
            season_year: year - 1,
        },
        _ => resolve_within_year(year, month, day)?,
    };

    tracing::trace!(
        %date,
        season = %resolution.season,
        day_of_season = resolution.day_of_season,
        "resolved season"
    );
    Ok(resolution)
}

/// Resolve a raw year, 0-indexed month and day of month.
pub fn resolve_ymd(year: i32, month0: u32, day: u32) -> Result<SeasonResolution, Error> {
    resolve_season(date_from_ymd(year, month0, day)?)
}

fn resolve_within_year(year: i32, month: u32, day: u32) -> Result<SeasonResolution, Error> {
    for bounds in SEASONS.iter().filter(|b| b.season != Season::Winter) {
        if month < bounds.start_month || month > bounds.end_month {
            continue;
        }

        let in_first_month = month == bounds.start_month && day >= bounds.start_day;
        let in_middle = month > bounds.start_month && month < bounds.end_month;
        let in_last_month = month == bounds.end_month && day <= bounds.end_day;

        let day_of_season = if in_first_month {
            day - bounds.start_day + 1
        } else if in_middle || in_last_month {
            let first_month_days = days_in_month(year, bounds.start_month) - bounds.start_day + 1;
            let full_months: u32 = (bounds.start_month + 1..month)
                .map(|m| days_in_month(year, m))
                .sum();
            first_month_days + full_months + day
        } else {
            continue;
        };

        return Ok(SeasonResolution {
            season: bounds.season,
            day_of_season,
            season_year: year,
        });
    }

    tracing::warn!(month = month + 1, day, "date does not fall within any season");
    Err(Error::UnresolvedSeason {
        month: month + 1,
        day,
    })
}

/// First calendar day of `season` in `season_year`.
pub fn season_start(season: Season, season_year: i32) -> Result<NaiveDate, Error> {
    let bounds = season.bounds();
    date_from_ymd(season_year, bounds.start_month, bounds.start_day)
}

/// Number of days in `season` when it begins in `season_year`.
///
/// Winter takes its February from the following year, so it is 91 days long
/// when that year is a leap year and 90 otherwise.
pub fn season_length(season: Season, season_year: i32) -> u32 {
    match season {
        Season::Winter => {
            DAYS_IN_DECEMBER + DAYS_IN_JANUARY + days_in_month(season_year.saturating_add(1), FEBRUARY)
        }
        _ => {
            let bounds = season.bounds();
            let first_month_days = days_in_month(season_year, bounds.start_month) - bounds.start_day + 1;
            let middle: u32 = (bounds.start_month + 1..bounds.end_month)
                .map(|m| days_in_month(season_year, m))
                .sum();
            first_month_days + middle + bounds.end_day
        }
    }
}

/// Calendar date of the `day_of_season`-th day of `season` starting in
/// `season_year`, or `None` if the season has no such day.
pub fn date_for_day_of_season(season: Season, season_year: i32, day_of_season: u32) -> Option<NaiveDate> {
    if day_of_season == 0 || day_of_season > season_length(season, season_year) {
        return None;
    }
    season_start(season, season_year)
        .ok()?
        .checked_add_days(Days::new(u64::from(day_of_season - 1)))
}
