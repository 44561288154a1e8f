//! # luach-parasha
//!
//! Weekly Torah reading (parasha) for any day in Hebrew years 5660..=5861.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["GregorianDate"] --> B["Scheduler::current_parasha"]
//!     B -->|"festival day"| C["Reading::Festival"]
//!     B -->|"next Shabbat"| D["year_schedule"]
//!     D --> E["portion cycle + COMBINATION_RULES"]
//!     D --> F["festival_on"]
//!     E --> G["Reading::Single / Double"]
//!     F --> C
//! ```
//!
//! A year's schedule walks its Shabbatot from Rosh Hashanah onward. A
//! Shabbat that falls on a festival takes the festival reading; every other
//! Shabbat takes the next portion of the cycle, joined with the following
//! portion when a combination rule applies. The rite decides which days
//! count as festival days and one combination.
//!
//! ## Quick Start
//!
//! ```
//! use luach_calendar::GregorianDate;
//! use luach_parasha::{Rite, Scheduler, current_parasha};
//!
//! let date = GregorianDate::new(2023, 7, 1).unwrap();
//! assert_eq!(current_parasha(date).unwrap().transliterated_name, "Chukat-Balak");
//!
//! let israel = Scheduler::new(Rite::Israel);
//! assert_eq!(israel.current_parasha(date).unwrap().transliterated_name, "Balak");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `portion` | The 54 portions and their names |
//! | `festival` | Festival days per rite |
//! | `rules` | When adjacent portions are read together |
//! | `schedule` | Full-year schedule of readings |
//! | `scheduler` | Per-date lookup |
//! | `error` | Error types |

mod error;
mod festival;
mod portion;
mod rules;
mod schedule;
mod scheduler;

pub use error::ParashaError;
pub use festival::{Festival, Rite, festival_on};
pub use portion::{PORTION_COUNT, Portion};
pub use schedule::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, Reading, year_schedule};
pub use scheduler::{ParashaEntry, Scheduler, current_parasha};
