//! Proleptic Gregorian dates backed by [`chrono::NaiveDate`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Smallest supported Gregorian year.
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Largest supported Gregorian year.
pub const MAX_GREGORIAN_YEAR: i32 = 9999;

/// A day in the proleptic Gregorian calendar, years 1..=9999.
///
/// Construction validates the date, so every value names a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(NaiveDate);

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if `year` is outside
    /// 1..=9999 and [`CalendarError::InvalidDate`] if the day does not exist
    /// (e.g. February 30 or February 29 of a common year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        check_year(year)?;
        NaiveDate::from_ymd_opt(year, month.into(), day.into())
            .map(Self)
            .ok_or_else(|| CalendarError::invalid_date(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Wraps a [`NaiveDate`], checking the supported year range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if the year is outside 1..=9999.
    pub fn from_naive(date: NaiveDate) -> Result<Self, CalendarError> {
        check_year(date.year())?;
        Ok(Self(date))
    }

    /// Creates a date from a fixed (Rata Die) day number, where 0001-01-01 is day 1.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if the day falls outside
    /// years 1..=9999.
    pub fn from_fixed(fixed: i64) -> Result<Self, CalendarError> {
        match i32::try_from(fixed)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
        {
            Some(date) => Self::from_naive(date),
            None => Err(CalendarError::UnsupportedRange {
                year: if fixed < 1 { i32::MIN } else { i32::MAX },
                min: MIN_GREGORIAN_YEAR,
                max: MAX_GREGORIAN_YEAR,
            }),
        }
    }

    /// Returns the current local date from the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if the clock reports a
    /// year outside 1..=9999.
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_naive(Local::now().date_naive())
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the fixed (Rata Die) day number.
    pub fn fixed(self) -> i64 {
        i64::from(self.0.num_days_from_ce())
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_fixed(self.fixed())
    }

    /// Returns the date `days` later (or earlier, if negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if the result leaves the
    /// supported range.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_fixed(self.fixed() + days)
    }

    /// Returns the underlying [`NaiveDate`].
    pub fn naive(self) -> NaiveDate {
        self.0
    }
}

fn check_year(year: i32) -> Result<(), CalendarError> {
    if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
        return Err(CalendarError::UnsupportedRange {
            year,
            min: MIN_GREGORIAN_YEAR,
            max: MAX_GREGORIAN_YEAR,
        });
    }
    Ok(())
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses an ISO-8601 calendar date (`YYYY-MM-DD`), zero-padded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !is_iso_shaped(s) {
            return Err(CalendarError::invalid_date(s));
        }
        let date =
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CalendarError::invalid_date(s))?;
        Self::from_naive(date)
    }
}

/// `true` for exactly `dddd-dd-dd`, zero-padded.
fn is_iso_shaped(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl From<GregorianDate> for NaiveDate {
    fn from(date: GregorianDate) -> Self {
        date.0
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive(date)
    }
}
