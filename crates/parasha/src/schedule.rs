//! The readings of every Shabbat in a Hebrew year.

use std::fmt;

use luach_calendar::{GregorianDate, HebrewDate, Weekday};
use tracing::debug;

use crate::error::ParashaError;
use crate::festival::{Festival, Rite, festival_on};
use crate::portion::Portion;
use crate::rules::{VAYEILECH_OPENS_ON, YearContext, join_rule};

/// Smallest Hebrew year the scheduler answers for (begins 1899-09-05).
pub const MIN_SUPPORTED_YEAR: i32 = 5660;
/// Largest Hebrew year the scheduler answers for (ends 2101-09-23).
pub const MAX_SUPPORTED_YEAR: i32 = 5861;

/// What is read on one Shabbat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reading {
    /// A single weekly portion.
    Single(Portion),
    /// Two adjacent portions read together.
    Double(Portion, Portion),
    /// A festival reading that displaces the weekly cycle.
    Festival(Festival),
}

impl Reading {
    /// Returns the transliterated name; joined portions are hyphenated.
    pub fn name(self) -> String {
        match self {
            Reading::Single(p) => p.name().to_string(),
            Reading::Double(a, b) => format!("{}-{}", a.name(), b.name()),
            Reading::Festival(f) => f.name().to_string(),
        }
    }

    /// Returns the name in Hebrew letters; joined portions are hyphenated.
    pub fn hebrew_name(self) -> String {
        match self {
            Reading::Single(p) => p.hebrew_name().to_string(),
            Reading::Double(a, b) => format!("{}-{}", a.hebrew_name(), b.hebrew_name()),
            Reading::Festival(f) => f.hebrew_name().to_string(),
        }
    }

    /// Returns the weekly portions read, empty for a festival.
    pub fn portions(self) -> Vec<Portion> {
        match self {
            Reading::Single(p) => vec![p],
            Reading::Double(a, b) => vec![a, b],
            Reading::Festival(_) => Vec::new(),
        }
    }

    /// Returns `true` if a festival displaces the weekly portion.
    pub fn is_festival(self) -> bool {
        matches!(self, Reading::Festival(_))
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Checks that `year` is inside the supported range.
pub(crate) fn check_year(year: i32) -> Result<(), ParashaError> {
    if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        return Err(ParashaError::UnsupportedDateRange {
            year,
            min: MIN_SUPPORTED_YEAR,
            max: MAX_SUPPORTED_YEAR,
        });
    }
    Ok(())
}

/// Lists every Shabbat of Hebrew `year` with its reading.
///
/// The cycle opens with Vayeilech when Rosh Hashanah falls on Monday or
/// Tuesday, otherwise with Ha'azinu, then restarts at Bereshit after
/// Simchat Torah. Festival Shabbatot take the festival reading and do not
/// advance the cycle; pairs are joined according to the combination rules.
///
/// # Errors
///
/// Returns [`ParashaError::UnsupportedDateRange`] if `year` is outside
/// 5660..=5861.
#[tracing::instrument(level = "debug")]
pub fn year_schedule(year: i32, rite: Rite) -> Result<Vec<(GregorianDate, Reading)>, ParashaError> {
    check_year(year)?;
    let context = YearContext::new(year, rite)?;

    let opening = [Portion::VAYEILECH, Portion::HAAZINU];
    let skip = usize::from(!VAYEILECH_OPENS_ON.contains(&Weekday::from_fixed(context.rosh_hashanah)));
    let mut cycle = opening
        .into_iter()
        .skip(skip)
        .chain((0..=Portion::VAYEILECH.index()).filter_map(Portion::new));

    let first_shabbat = context.rosh_hashanah
        + i64::from(Weekday::from_fixed(context.rosh_hashanah).days_until(Weekday::Saturday));

    let mut schedule = Vec::with_capacity(56);
    let mut shabbat = first_shabbat;
    while shabbat < context.next_rosh_hashanah {
        let date = GregorianDate::from_fixed(shabbat)?;
        let reading = match festival_on(HebrewDate::from_gregorian(date), rite) {
            Some(festival) => Reading::Festival(festival),
            None => {
                let first = cycle
                    .next()
                    .expect("the annual cycle outlasts the Shabbatot of a year");
                match join_rule(first) {
                    Some(rule) if rule.joins(&context, shabbat) => {
                        let second = cycle
                            .next()
                            .expect("a joined portion always has a successor");
                        Reading::Double(first, second)
                    }
                    _ => Reading::Single(first),
                }
            }
        };
        schedule.push((date, reading));
        shabbat += 7;
    }

    debug!(year, ?rite, shabbatot = schedule.len(), "built year schedule");
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(year: i32, rite: Rite) -> Vec<String> {
        year_schedule(year, rite)
            .unwrap()
            .into_iter()
            .map(|(_, r)| r.name())
            .collect()
    }

    #[test]
    fn reading_names() {
        assert_eq!(Reading::Single(Portion::BERESHIT).name(), "Bereshit");
        assert_eq!(
            Reading::Double(Portion::VAYAKHEL, Portion::PEKUDEI).name(),
            "Vayakhel-Pekudei"
        );
        assert_eq!(
            Reading::Double(Portion::VAYAKHEL, Portion::PEKUDEI).hebrew_name(),
            "ויקהל-פקודי"
        );
        assert_eq!(Reading::Festival(Festival::Sukkot).hebrew_name(), "סוכות");
    }

    #[test]
    fn year_5784_opens_with_rosh_hashanah_and_haazinu() {
        let names = names(5784, Rite::Diaspora);
        assert_eq!(
            &names[..5],
            ["Rosh Hashanah", "Ha'azinu", "Sukkot", "Shemini Atzeret", "Bereshit"]
        );
    }

    #[test]
    fn year_5786_opens_with_vayeilech() {
        // Rosh Hashanah 5786 fell on Tuesday.
        let names = names(5786, Rite::Diaspora);
        assert_eq!(names[0], "Vayeilech");
        assert_eq!(names[1], "Ha'azinu");
    }

    #[test]
    fn every_portion_read_once_per_year() {
        for year in MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR {
            for rite in [Rite::Diaspora, Rite::Israel] {
                let schedule = year_schedule(year, rite).unwrap();
                let portions: Vec<u8> = schedule
                    .iter()
                    .flat_map(|(_, r)| r.portions())
                    .map(Portion::index)
                    .collect();
                // Bereshit through Nitzavim appear exactly once and in order.
                let body: Vec<u8> = portions
                    .iter()
                    .copied()
                    .skip_while(|&p| p != 0)
                    .take_while(|&p| p <= Portion::NITZAVIM.index())
                    .collect();
                assert_eq!(body, (0..=50).collect::<Vec<u8>>(), "{year} {rite:?}");
            }
        }
    }

    #[test]
    fn schedule_dates_are_saturdays() {
        for (date, _) in year_schedule(5785, Rite::Israel).unwrap() {
            assert_eq!(date.weekday(), Weekday::Saturday);
        }
    }

    #[test]
    fn unsupported_year() {
        assert_eq!(
            year_schedule(5659, Rite::Diaspora).unwrap_err(),
            ParashaError::UnsupportedDateRange {
                year: 5659,
                min: 5660,
                max: 5861,
            }
        );
        assert!(year_schedule(5862, Rite::Diaspora).is_err());
    }
}
