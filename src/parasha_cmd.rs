//! Parasha command: print the weekly reading for a date.

use anyhow::Result;
use tracing::info_span;

use luach_parasha::Scheduler;

use crate::cli::ParashaArgs;
use crate::config::LuachConfig;
use crate::convert;

/// Prints the reading for the week containing the requested date.
pub fn run(args: ParashaArgs, config: &LuachConfig) -> Result<()> {
    let _cmd = info_span!("parasha").entered();

    let rite = convert::resolve_rite(args.rite.as_deref(), &config.calendar.rite)?;
    let date = convert::parse_date(args.date.as_deref())?;
    let entry = Scheduler::new(rite).current_parasha(date)?;

    println!("{} / {}", entry.transliterated_name, entry.hebrew_name);
    println!("week of {}", entry.week_start);
    Ok(())
}
