//! Hebrew calendar dates and conversion to and from Gregorian dates.

use std::fmt;

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::month::{HebrewMonth, days_in_month, month_lengths};
use crate::numeral::hebrew_numeral;
use crate::weekday::Weekday;
use crate::year::{HEBREW_EPOCH, is_leap_year, months_in_year, new_year};

/// Smallest supported Hebrew year (contains 0001-01-01 Gregorian).
pub const MIN_HEBREW_YEAR: i32 = 3761;
/// Largest supported Hebrew year (contains 9999-12-31 Gregorian).
pub const MAX_HEBREW_YEAR: i32 = 13760;

/// A date in the Hebrew calendar.
///
/// Months use civil numbering from Tishrei: in a common year 1 = Tishrei,
/// 6 = Adar, 7 = Nisan and 12 = Elul; in a leap year 6 = Adar I, 7 = Adar II,
/// 8 = Nisan and 13 = Elul. Dates order by (year, month, day), which is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a new `HebrewDate`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if `year` is outside
    /// 3761..=13760, [`CalendarError::InvalidMonth`] if the year has no such
    /// month, and [`CalendarError::InvalidDay`] if the month is shorter
    /// than `day`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR).contains(&year) {
            return Err(CalendarError::UnsupportedRange {
                year,
                min: MIN_HEBREW_YEAR,
                max: MAX_HEBREW_YEAR,
            });
        }
        let max_month = months_in_year(year);
        let Some(max_day) = days_in_month(year, month) else {
            return Err(CalendarError::InvalidMonth {
                year,
                month,
                max_month,
            });
        };
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a named month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MonthNotInYear`] for Adar I or Adar II in a
    /// common year, otherwise the errors of [`HebrewDate::new`].
    pub fn from_month(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        let number = month
            .number_in(year)
            .ok_or(CalendarError::MonthNotInYear { year, month })?;
        Self::new(year, number, day)
    }

    /// Converts a Gregorian date. Every Gregorian day maps to exactly one
    /// Hebrew day.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        Self::from_fixed(date.fixed())
    }

    /// Converts a fixed day number inside the supported Gregorian range.
    pub(crate) fn from_fixed(fixed: i64) -> Self {
        let approx = ((fixed - HEBREW_EPOCH) * 98_496).div_euclid(35_975_351) + 1;
        let mut year = approx as i32 - 1;
        while new_year(year + 1) <= fixed {
            year += 1;
        }

        let mut remaining = fixed - new_year(year);
        let mut month = 1;
        for &length in month_lengths(year) {
            if remaining < i64::from(length) {
                break;
            }
            remaining -= i64::from(length);
            month += 1;
        }

        Self {
            year,
            month,
            day: remaining as u8 + 1,
        }
    }

    /// Returns the fixed (Rata Die) day number.
    pub fn fixed(self) -> i64 {
        let preceding: i64 = month_lengths(self.year)[..usize::from(self.month - 1)]
            .iter()
            .map(|&d| i64::from(d))
            .sum();
        new_year(self.year) + preceding + i64::from(self.day) - 1
    }

    /// Converts to the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedRange`] if the date falls before
    /// 0001-01-01 or after 9999-12-31.
    pub fn to_gregorian(self) -> Result<GregorianDate, CalendarError> {
        GregorianDate::from_fixed(self.fixed())
    }

    /// Returns the year (anno mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the civil month number (1 = Tishrei).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the named month.
    pub fn hebrew_month(self) -> HebrewMonth {
        HebrewMonth::from_number(self.month, self.is_leap_year())
            .expect("HebrewDate always holds a valid month")
    }

    /// Returns the transliterated month name, e.g. `"Adar II"`.
    pub fn month_name(self) -> &'static str {
        self.hebrew_month().name()
    }

    /// Returns the month name in Hebrew letters.
    pub fn hebrew_month_name(self) -> &'static str {
        self.hebrew_month().hebrew_name()
    }

    /// Returns `true` if the date's year has 13 months.
    pub fn is_leap_year(self) -> bool {
        is_leap_year(self.year)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        Weekday::from_fixed(self.fixed())
    }

    /// Renders the date in Hebrew letters, e.g. `"כ״ה כסלו תשפ״א"`.
    pub fn hebrew_string(self, thousands: bool) -> String {
        format!(
            "{} {} {}",
            hebrew_numeral(u32::from(self.day), false),
            self.hebrew_month_name(),
            hebrew_numeral(self.year as u32, thousands)
        )
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl From<GregorianDate> for HebrewDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

/// Converts a Gregorian date to the Hebrew calendar.
pub fn to_hebrew(date: GregorianDate) -> HebrewDate {
    HebrewDate::from_gregorian(date)
}

/// Converts a Hebrew date to the Gregorian calendar.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedRange`] if the result falls outside
/// Gregorian years 1..=9999.
pub fn to_gregorian(date: HebrewDate) -> Result<GregorianDate, CalendarError> {
    date.to_gregorian()
}
