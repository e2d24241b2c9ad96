pub mod calendar;
pub mod error;
pub mod format;
pub mod logging;
pub mod points;
pub mod schedule;
pub mod types;

pub use calendar::{
    date_for_day_of_season, date_from_ymd, days_in_month, days_in_months, leap_year, parse_date,
    resolve_season, resolve_ymd, season_length, season_start, DAYS_IN_DECEMBER, DAYS_IN_JANUARY,
    SEASONS,
};

pub use error::{Error, ErrorKind};

pub use format::format_points;

pub use points::{
    daily_points, daily_points_at, daily_points_from_str, points_for_day, PointsTable,
    DAY_ONE_POINTS, DAY_TWO_POINTS, GROWTH_CAP_DAY, LINEAR_GROWTH_PER_DAY, PREVIOUS_DAY_WEIGHT,
};

pub use schedule::{generate_season_schedule, lookup_points, schedule_for_date, schedule_to_compact};

pub use types::{DayPoints, Season, SeasonBounds, SeasonResolution, SeasonSchedule};
