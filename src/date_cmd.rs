//! Date command: print the Hebrew date for a Gregorian date.

use anyhow::Result;
use tracing::{debug, info_span};

use luach_calendar::{HebrewDate, YearKind};

use crate::cli::DateArgs;
use crate::convert;

/// Prints the Hebrew date in both scripts, the weekday and the year kind.
pub fn run(args: DateArgs) -> Result<()> {
    let _cmd = info_span!("date").entered();

    let date = convert::parse_date(args.date.as_deref())?;
    let hebrew = HebrewDate::from_gregorian(date);
    let kind = YearKind::of(hebrew.year());
    debug!(%date, ?kind, "converted");

    println!("{date} ({})", date.weekday());
    println!("{hebrew}");
    println!("{}", hebrew.hebrew_string(true));
    println!(
        "year {}: {} days, {}",
        hebrew.year(),
        kind.length(),
        if kind.is_leap() { "leap" } else { "common" }
    );
    Ok(())
}
