//! Schedule command: print every Shabbat reading of a Hebrew year.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use luach_calendar::HebrewDate;
use luach_parasha::year_schedule;

use crate::cli::ScheduleArgs;
use crate::config::LuachConfig;
use crate::convert;

/// Prints one line per Shabbat: Gregorian date, Hebrew date and reading.
pub fn run(args: ScheduleArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("schedule").entered();

    let rite = convert::resolve_rite(args.rite.as_deref(), &config.calendar.rite)?;
    let year = match args.year {
        Some(year) => year,
        None => HebrewDate::from_gregorian(convert::parse_date(None)?).year(),
    };

    let schedule = year_schedule(year, rite)
        .with_context(|| format!("cannot build schedule for Hebrew year {year}"))?;
    info!(year, %rite, shabbatot = schedule.len(), "schedule built");

    for (date, reading) in schedule {
        let hebrew = HebrewDate::from_gregorian(date).to_string();
        println!("{date}  {hebrew:<22}  {reading}  {}", reading.hebrew_name());
    }
    Ok(())
}
