//! Day of the week.

use std::fmt;

/// Day of the week, Sunday first as in the Hebrew week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Returns the weekday of a fixed (Rata Die) day number.
    ///
    /// Day 1 (0001-01-01 proleptic Gregorian) is a Monday.
    pub fn from_fixed(fixed: i64) -> Self {
        WEEKDAYS[fixed.rem_euclid(7) as usize]
    }

    /// Returns the 0-based position in the week (Sunday = 0, Saturday = 6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns how many days lie between `self` and the next `target`,
    /// counting zero when they coincide.
    pub fn days_until(self, target: Weekday) -> u8 {
        (target.index() + 7 - self.index()) % 7
    }

    /// Returns the English name of the weekday.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
