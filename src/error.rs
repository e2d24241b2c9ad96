//! Errors returned by season resolution and points calculation.

/// Broad classification of an [Error].
///
/// Every computation in this crate is pure, so the only way a call can fail is
/// by being handed an input it cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

/// The errors that may occur when resolving a date to its season and points.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a date, or names a day that does not
    /// exist on the calendar.
    ///
    /// Holds the original input and the reason it was rejected.
    #[error("invalid date \"{0}\": {1}")]
    InvalidDate(String, String),

    /// A day of season below 1 was requested.
    #[error("day of season must be at least 1, got {0}")]
    InvalidDayOfSeason(i64),

    /// A valid date did not fall inside any season.
    ///
    /// The four seasons cover every month, so this indicates the season table
    /// no longer partitions the year.
    #[error("{month}/{day} does not fall within any season")]
    UnresolvedSeason { month: u32, day: u32 },

    /// The day of season is so far past the growth cap that the point value
    /// does not fit in a `u64`.
    #[error("points for day {0} of the season overflow")]
    PointsOverflow(i64),

    /// The season name is not one of spring, summer, autumn or winter.
    #[error("unknown season \"{0}\"")]
    UnknownSeason(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDate(..)
            | Error::InvalidDayOfSeason(_)
            | Error::UnresolvedSeason { .. }
            | Error::PointsOverflow(_)
            | Error::UnknownSeason(_) => ErrorKind::InvalidArgument,
        }
    }
}
