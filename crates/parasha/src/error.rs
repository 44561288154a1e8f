//! Error types for the luach-parasha crate.

use luach_calendar::CalendarError;

/// Error type for all fallible operations in the luach-parasha crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParashaError {
    /// Returned when the Hebrew year of a query lies outside the range
    /// covered by the scheduler.
    #[error("Hebrew year {year} outside supported range {min}..={max}")]
    UnsupportedDateRange {
        /// The Hebrew year that was queried.
        year: i32,
        /// Smallest supported Hebrew year.
        min: i32,
        /// Largest supported Hebrew year.
        max: i32,
    },

    /// Propagated from date arithmetic in the calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
