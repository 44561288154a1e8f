//! Hebrew year arithmetic: leap cycle, molad-based new year, year kinds.

/// Fixed day number of 1 Tishrei AM 1 (Julian 7 October 3761 BCE).
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Parts (halakim) per day; 1080 parts per hour.
const PARTS_PER_DAY: i64 = 25_920;

/// The six possible Hebrew year patterns.
///
/// Cheshvan and Kislev are 29 or 30 days long depending on the pattern:
///
/// | Kind | Cheshvan | Kislev | Common | Leap |
/// |------|----------|--------|--------|------|
/// | Deficient | 29 | 29 | 353 | 383 |
/// | Regular | 29 | 30 | 354 | 384 |
/// | Complete | 30 | 30 | 355 | 385 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    DeficientCommon,
    RegularCommon,
    CompleteCommon,
    DeficientLeap,
    RegularLeap,
    CompleteLeap,
}

impl YearKind {
    /// Classifies the given Hebrew year.
    pub fn of(year: i32) -> Self {
        let leap = is_leap_year(year);
        match (days_in_year(year) % 10, leap) {
            (3, false) => YearKind::DeficientCommon,
            (4, false) => YearKind::RegularCommon,
            (_, false) => YearKind::CompleteCommon,
            (3, true) => YearKind::DeficientLeap,
            (4, true) => YearKind::RegularLeap,
            (_, true) => YearKind::CompleteLeap,
        }
    }

    /// Returns `true` for the three 13-month patterns.
    pub fn is_leap(self) -> bool {
        matches!(
            self,
            YearKind::DeficientLeap | YearKind::RegularLeap | YearKind::CompleteLeap
        )
    }

    /// Returns the number of days in a year of this kind.
    pub fn length(self) -> u16 {
        match self {
            YearKind::DeficientCommon => 353,
            YearKind::RegularCommon => 354,
            YearKind::CompleteCommon => 355,
            YearKind::DeficientLeap => 383,
            YearKind::RegularLeap => 384,
            YearKind::CompleteLeap => 385,
        }
    }

    /// Row index into the month-length table.
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Returns `true` if `year` has 13 months.
///
/// Years 3, 6, 8, 11, 14, 17 and 19 of each 19-year Metonic cycle are leap.
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns the number of months in `year` (12 or 13).
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishrei of `year`, after the
/// molad zaken and lo ADU rosh postponements.
fn elapsed_days(year: i32) -> i64 {
    let months_elapsed = (235 * i64::from(year) - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay keeping year lengths within 353..=355 / 383..=385
/// (the GaTaRaD and BeTU'TaKPaT rules).
fn year_length_correction(year: i32) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Returns the fixed day number of 1 Tishrei of `year`.
pub fn new_year(year: i32) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Returns the number of days in `year`.
pub fn days_in_year(year: i32) -> u16 {
    (new_year(year + 1) - new_year(year)) as u16
}
