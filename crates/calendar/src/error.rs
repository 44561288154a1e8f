//! Error types for the luach-calendar crate.

use crate::month::HebrewMonth;

/// Error type for all fallible operations in the luach-calendar crate.
///
/// Covers dates that do not exist in their calendar and dates that exist
/// but fall outside the range the converter supports.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a Gregorian year/month/day triple names no real day
    /// (e.g. February 30) or an ISO-8601 string cannot be parsed.
    #[error("invalid date: {input}")]
    InvalidDate {
        /// The rejected input, rendered as given.
        input: String,
    },

    /// Returned when a month number does not exist in the given Hebrew year.
    #[error("invalid month: {month} for Hebrew year {year} (max {max_month})")]
    InvalidMonth {
        /// The Hebrew year.
        year: i32,
        /// The invalid month number that was provided.
        month: u8,
        /// The number of months in that year (12 or 13).
        max_month: u8,
    },

    /// Returned when a named month (Adar I, Adar II) does not occur in a
    /// common year.
    #[error("{month} does not occur in Hebrew year {year}")]
    MonthNotInYear {
        /// The Hebrew year.
        year: i32,
        /// The month that was requested.
        month: HebrewMonth,
    },

    /// Returned when a day number exceeds the length of the given Hebrew month.
    #[error("invalid day: {day} for month {month} of Hebrew year {year} (max {max_day})")]
    InvalidDay {
        /// The Hebrew year.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The number of days in that month (29 or 30).
        max_day: u8,
    },

    /// Returned when a year lies outside the supported conversion range.
    #[error("year {year} outside supported range {min}..={max}")]
    UnsupportedRange {
        /// The offending year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },
}

impl CalendarError {
    pub(crate) fn invalid_date(input: impl ToString) -> Self {
        Self::InvalidDate {
            input: input.to_string(),
        }
    }
}
