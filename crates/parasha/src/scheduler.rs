//! Answers "which parasha is this week?" for a given day.

use luach_calendar::{GregorianDate, HebrewDate, Weekday};
use tracing::debug;

use crate::error::ParashaError;
use crate::festival::{Rite, festival_on};
use crate::schedule::{Reading, check_year, year_schedule};

/// The reading selected for a query date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParashaEntry {
    /// Name in Hebrew letters, e.g. `"בראשית"`.
    pub hebrew_name: String,
    /// Transliterated name, e.g. `"Bereshit"`.
    pub transliterated_name: String,
    /// The Sunday that opens the week of the reading.
    pub week_start: HebrewDate,
    /// The reading itself.
    pub reading: Reading,
}

impl ParashaEntry {
    fn new(reading: Reading, week_start: HebrewDate) -> Self {
        Self {
            hebrew_name: reading.hebrew_name(),
            transliterated_name: reading.name(),
            week_start,
            reading,
        }
    }
}

/// Parasha lookup for one rite.
///
/// Stateless; a `Scheduler` can be shared freely between threads.
///
/// # Example
///
/// ```
/// use luach_calendar::GregorianDate;
/// use luach_parasha::{Rite, Scheduler};
///
/// let scheduler = Scheduler::new(Rite::Diaspora);
/// let date = GregorianDate::new(2023, 10, 14).unwrap();
/// let entry = scheduler.current_parasha(date).unwrap();
/// assert_eq!(entry.transliterated_name, "Bereshit");
/// assert_eq!(entry.hebrew_name, "בראשית");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scheduler {
    rite: Rite,
}

impl Scheduler {
    /// Creates a scheduler following `rite`.
    pub fn new(rite: Rite) -> Self {
        Self { rite }
    }

    /// Returns the rite this scheduler follows.
    pub fn rite(&self) -> Rite {
        self.rite
    }

    /// Returns the reading for the week containing `date`.
    ///
    /// A date that is itself a festival day yields that festival. Any other
    /// date yields the reading of the Shabbat on or after it.
    ///
    /// # Errors
    ///
    /// Returns [`ParashaError::UnsupportedDateRange`] if the Hebrew year of
    /// the date, or of its Shabbat, is outside 5660..=5861.
    pub fn current_parasha(&self, date: GregorianDate) -> Result<ParashaEntry, ParashaError> {
        let hebrew = HebrewDate::from_gregorian(date);
        check_year(hebrew.year())?;

        let shabbat = date.add_days(date.weekday().days_until(Weekday::Saturday).into())?;
        let week_start = HebrewDate::from_gregorian(shabbat.add_days(-6)?);

        let reading = match festival_on(hebrew, self.rite) {
            Some(festival) => Reading::Festival(festival),
            None => self.shabbat_reading(shabbat)?,
        };

        debug!(%date, %hebrew, %reading, "resolved parasha");
        Ok(ParashaEntry::new(reading, week_start))
    }

    /// Returns the reading of `shabbat`, which must be a Saturday.
    fn shabbat_reading(&self, shabbat: GregorianDate) -> Result<Reading, ParashaError> {
        let year = HebrewDate::from_gregorian(shabbat).year();
        let reading = year_schedule(year, self.rite)?
            .into_iter()
            .find(|&(date, _)| date == shabbat)
            .map(|(_, reading)| reading)
            .expect("every Shabbat of a year is scheduled");
        Ok(reading)
    }
}

/// Returns the Diaspora reading for the week containing `date`.
///
/// # Errors
///
/// See [`Scheduler::current_parasha`].
pub fn current_parasha(date: GregorianDate) -> Result<ParashaEntry, ParashaError> {
    Scheduler::default().current_parasha(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::festival::Festival;
    use crate::portion::Portion;

    fn greg(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn bereshit_5784() {
        let entry = current_parasha(greg(2023, 10, 14)).unwrap();
        assert_eq!(entry.transliterated_name, "Bereshit");
        assert_eq!(entry.hebrew_name, "בראשית");
        assert_eq!(entry.reading, Reading::Single(Portion::BERESHIT));
        // Sunday 2023-10-08 is 23 Tishrei 5784.
        assert_eq!(entry.week_start, HebrewDate::new(5784, 1, 23).unwrap());
    }

    #[test]
    fn midweek_looks_ahead_to_shabbat() {
        // Tuesday 2023-10-10 belongs to the week of Bereshit.
        let entry = current_parasha(greg(2023, 10, 10)).unwrap();
        assert_eq!(entry.transliterated_name, "Bereshit");
    }

    #[test]
    fn deterministic() {
        let date = greg(2024, 3, 9);
        assert_eq!(current_parasha(date), current_parasha(date));
    }

    #[test]
    fn first_day_of_sukkot() {
        // 15 Tishrei 5785 was a Thursday.
        let entry = current_parasha(greg(2024, 10, 17)).unwrap();
        assert_eq!(entry.reading, Reading::Festival(Festival::Sukkot));
        assert_eq!(entry.transliterated_name, "Sukkot");
        assert_eq!(entry.hebrew_name, "סוכות");
    }

    #[test]
    fn festival_weekday_beats_following_shabbat() {
        // Wednesday 2024-06-12 is 6 Sivan; the following Shabbat reads Nasso.
        let entry = current_parasha(greg(2024, 6, 12)).unwrap();
        assert_eq!(entry.reading, Reading::Festival(Festival::Shavuot));
        let entry = current_parasha(greg(2024, 6, 14)).unwrap();
        assert_eq!(entry.transliterated_name, "Nasso");
    }

    #[test]
    fn rites_diverge_after_shavuot_5783() {
        let date = greg(2023, 7, 1);
        let diaspora = Scheduler::new(Rite::Diaspora).current_parasha(date).unwrap();
        let israel = Scheduler::new(Rite::Israel).current_parasha(date).unwrap();
        assert_eq!(diaspora.transliterated_name, "Chukat-Balak");
        assert_eq!(israel.transliterated_name, "Balak");
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            current_parasha(greg(1850, 1, 1)),
            Err(ParashaError::UnsupportedDateRange { year: 5610, .. })
        ));
        assert!(matches!(
            current_parasha(greg(2150, 1, 1)),
            Err(ParashaError::UnsupportedDateRange { .. })
        ));
    }

    #[test]
    fn range_edges_are_supported() {
        assert!(current_parasha(greg(1900, 1, 1)).is_ok());
        assert!(current_parasha(greg(2100, 12, 31)).is_ok());
    }
}
