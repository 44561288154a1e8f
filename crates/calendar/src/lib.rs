//! # luach-calendar
//!
//! Pure date arithmetic between the proleptic Gregorian calendar and the
//! Hebrew calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] -->|".fixed()"| B["fixed day (Rata Die)"]
//!     B -->|"HebrewDate::from_fixed"| C["HebrewDate"]
//!     C -->|".fixed()"| B
//!     B -->|"GregorianDate::from_fixed"| A
//!     D["year"] -->|"new_year()"| B
//!     D -->|"YearKind::of()"| E["MONTH_LENGTHS row"]
//!     E --> C
//! ```
//!
//! Both calendars meet at the fixed day number, where 0001-01-01 is day 1.
//! The Hebrew new year is computed from the molad of Tishrei with the four
//! postponement rules; month boundaries come from a static table with one
//! row per [`YearKind`].
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::{GregorianDate, to_gregorian, to_hebrew};
//!
//! let rosh_hashanah = GregorianDate::new(2023, 9, 16).unwrap();
//! let hebrew = to_hebrew(rosh_hashanah);
//! assert_eq!((hebrew.year(), hebrew.month(), hebrew.day()), (5784, 1, 1));
//! assert_eq!(hebrew.month_name(), "Tishrei");
//! assert_eq!(to_gregorian(hebrew).unwrap(), rosh_hashanah);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Validated Gregorian date, ISO-8601 parsing |
//! | `hebrew` | Hebrew date and the two conversions |
//! | `month` | Month names and the month-length table |
//! | `year` | Leap cycle, new-year computation, year kinds |
//! | `weekday` | Day of the week |
//! | `numeral` | Hebrew-letter numerals |
//! | `error` | Error types |

mod error;
mod gregorian;
mod hebrew;
mod month;
mod numeral;
mod weekday;
mod year;

pub use error::CalendarError;
pub use gregorian::{GregorianDate, MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR};
pub use hebrew::{HebrewDate, MAX_HEBREW_YEAR, MIN_HEBREW_YEAR, to_gregorian, to_hebrew};
pub use month::{HebrewMonth, days_in_month};
pub use numeral::hebrew_numeral;
pub use weekday::Weekday;
pub use year::{YearKind, days_in_year, is_leap_year, months_in_year, new_year};
