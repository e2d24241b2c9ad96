use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::calendar::SEASONS;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    /// The static calendar boundaries of this season.
    pub fn bounds(self) -> &'static SeasonBounds {
        match self {
            Season::Spring => &SEASONS[0],
            Season::Summer => &SEASONS[1],
            Season::Autumn => &SEASONS[2],
            Season::Winter => &SEASONS[3],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "autumn" | "fall" => Ok(Season::Autumn),
            "winter" => Ok(Season::Winter),
            _ => Err(Error::UnknownSeason(s.to_owned())),
        }
    }
}

/// Calendar boundaries of a season. Months are 0-indexed (0 = January).
///
/// Winter is the only season where `end_month < start_month`; it runs from
/// December into February of the following year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonBounds {
    pub season: Season,
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonResolution {
    pub season: Season,
    /// 1-based ordinal day within the season.
    pub day_of_season: u32,
    /// Calendar year in which the season began.
    pub season_year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPoints {
    pub date: NaiveDate,
    pub day_of_season: u32,
    pub points: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSchedule {
    pub season: Season,
    pub season_year: i32,
    pub days: Vec<DayPoints>,
    pub total_points: u64,
    pub peak_points: u64,
}
