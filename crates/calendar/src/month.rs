//! Hebrew month names and month-length tables.

use std::fmt;

use crate::year::{YearKind, is_leap_year, months_in_year};

/// A named Hebrew month.
///
/// `Adar` is the single Adar of a common year; a leap year has `AdarI`
/// and `AdarII` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewMonth {
    Tishrei,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

use HebrewMonth::*;

/// Month order of a common year, Tishrei first.
const COMMON_ORDER: [HebrewMonth; 12] = [
    Tishrei, Cheshvan, Kislev, Tevet, Shevat, Adar, Nisan, Iyar, Sivan, Tammuz, Av, Elul,
];

/// Month order of a leap year, Tishrei first.
const LEAP_ORDER: [HebrewMonth; 13] = [
    Tishrei, Cheshvan, Kislev, Tevet, Shevat, AdarI, AdarII, Nisan, Iyar, Sivan, Tammuz, Av, Elul,
];

/// Month lengths per [`YearKind`], in civil order starting at Tishrei.
///
/// Common years use the first 12 columns; the 13th column is 0.
#[rustfmt::skip]
pub(crate) const MONTH_LENGTHS: [[u8; 13]; 6] = [
    // Tis Che Kis Tev Shv Ad1 Ad2 Nis Iyr Siv Tam Av  Elu
    [30, 29, 29, 29, 30, 29, 30, 29, 30, 29, 30, 29,  0], // deficient common (353)
    [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29,  0], // regular common (354)
    [30, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29,  0], // complete common (355)
    [30, 29, 29, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29], // deficient leap (383)
    [30, 29, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29], // regular leap (384)
    [30, 30, 30, 29, 30, 30, 29, 30, 29, 30, 29, 30, 29], // complete leap (385)
];

/// Returns the lengths of every month of `year`, in civil order.
pub(crate) fn month_lengths(year: i32) -> &'static [u8] {
    let row = &MONTH_LENGTHS[YearKind::of(year).index()];
    &row[..months_in_year(year) as usize]
}

/// Returns the number of days in civil month `month` of `year`, or `None`
/// if the year has no such month.
pub fn days_in_month(year: i32, month: u8) -> Option<u8> {
    let index = usize::from(month).checked_sub(1)?;
    month_lengths(year).get(index).copied()
}

impl HebrewMonth {
    /// Resolves a civil month number (1 = Tishrei) in a common or leap year.
    pub fn from_number(month: u8, leap: bool) -> Option<Self> {
        let index = usize::from(month).checked_sub(1)?;
        if leap {
            LEAP_ORDER.get(index).copied()
        } else {
            COMMON_ORDER.get(index).copied()
        }
    }

    /// Returns the civil month number of this month in `year`.
    ///
    /// Plain `Adar` resolves to Adar II in a leap year. `AdarI` and `AdarII`
    /// do not occur in a common year and yield `None`.
    pub fn number_in(self, year: i32) -> Option<u8> {
        let leap = is_leap_year(year);
        let month = match (self, leap) {
            (Adar, true) => AdarII,
            (AdarI | AdarII, false) => return None,
            (month, _) => month,
        };
        let order: &[HebrewMonth] = if leap { &LEAP_ORDER } else { &COMMON_ORDER };
        order
            .iter()
            .position(|&m| m == month)
            .map(|index| index as u8 + 1)
    }

    /// Returns the transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Tishrei => "Tishrei",
            Cheshvan => "Cheshvan",
            Kislev => "Kislev",
            Tevet => "Tevet",
            Shevat => "Shevat",
            Adar => "Adar",
            AdarI => "Adar I",
            AdarII => "Adar II",
            Nisan => "Nisan",
            Iyar => "Iyar",
            Sivan => "Sivan",
            Tammuz => "Tammuz",
            Av => "Av",
            Elul => "Elul",
        }
    }

    /// Returns the name in Hebrew letters.
    pub fn hebrew_name(self) -> &'static str {
        match self {
            Tishrei => "תשרי",
            Cheshvan => "חשון",
            Kislev => "כסלו",
            Tevet => "טבת",
            Shevat => "שבט",
            Adar => "אדר",
            AdarI => "אדר א׳",
            AdarII => "אדר ב׳",
            Nisan => "ניסן",
            Iyar => "אייר",
            Sivan => "סיון",
            Tammuz => "תמוז",
            Av => "אב",
            Elul => "אלול",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
