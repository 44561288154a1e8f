//! Festivals that displace the weekly reading, and the rite that decides
//! how many festival days are kept.

use std::fmt;

use luach_calendar::{HebrewDate, HebrewMonth};

/// Which festival calendar to follow.
///
/// The Diaspora keeps a second festival day at the start of Sukkot and
/// Pesach, an extra day at their end, and a second day of Shavuot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rite {
    #[default]
    Diaspora,
    Israel,
}

impl Rite {
    /// Returns the lowercase name used in configuration and responses.
    pub fn name(self) -> &'static str {
        match self {
            Rite::Diaspora => "diaspora",
            Rite::Israel => "israel",
        }
    }
}

impl fmt::Display for Rite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A festival whose own reading replaces the weekly portion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Festival {
    RoshHashanah,
    YomKippur,
    Sukkot,
    CholHamoedSukkot,
    ShminiAtzeret,
    SimchatTorah,
    Pesach,
    CholHamoedPesach,
    ShviiShelPesach,
    AcharonShelPesach,
    Shavuot,
}

impl Festival {
    /// Returns the transliterated name.
    pub fn name(self) -> &'static str {
        match self {
            Festival::RoshHashanah => "Rosh Hashanah",
            Festival::YomKippur => "Yom Kippur",
            Festival::Sukkot => "Sukkot",
            Festival::CholHamoedSukkot => "Chol HaMoed Sukkot",
            Festival::ShminiAtzeret => "Shemini Atzeret",
            Festival::SimchatTorah => "Simchat Torah",
            Festival::Pesach => "Pesach",
            Festival::CholHamoedPesach => "Chol HaMoed Pesach",
            Festival::ShviiShelPesach => "Shvi'i shel Pesach",
            Festival::AcharonShelPesach => "Acharon shel Pesach",
            Festival::Shavuot => "Shavuot",
        }
    }

    /// Returns the name in Hebrew letters.
    pub fn hebrew_name(self) -> &'static str {
        match self {
            Festival::RoshHashanah => "ראש השנה",
            Festival::YomKippur => "יום כיפור",
            Festival::Sukkot => "סוכות",
            Festival::CholHamoedSukkot => "חול המועד סוכות",
            Festival::ShminiAtzeret => "שמיני עצרת",
            Festival::SimchatTorah => "שמחת תורה",
            Festival::Pesach => "פסח",
            Festival::CholHamoedPesach => "חול המועד פסח",
            Festival::ShviiShelPesach => "שביעי של פסח",
            Festival::AcharonShelPesach => "אחרון של פסח",
            Festival::Shavuot => "שבועות",
        }
    }
}

impl fmt::Display for Festival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a festival day is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kept {
    Everywhere,
    DiasporaOnly,
}

impl Kept {
    fn by(self, rite: Rite) -> bool {
        match self {
            Kept::Everywhere => true,
            Kept::DiasporaOnly => rite == Rite::Diaspora,
        }
    }
}

/// A run of days in one month sharing a festival reading.
struct FestivalDays {
    month: HebrewMonth,
    first: u8,
    last: u8,
    festival: Festival,
    kept: Kept,
}

const fn days(
    month: HebrewMonth,
    first: u8,
    last: u8,
    festival: Festival,
    kept: Kept,
) -> FestivalDays {
    FestivalDays {
        month,
        first,
        last,
        festival,
        kept,
    }
}

/// Days on which no weekly portion is read. The first matching row wins,
/// so Diaspora-only second days precede the Chol HaMoed rows they overlap.
#[rustfmt::skip]
const FESTIVAL_DAYS: [FestivalDays; 14] = [
    days(HebrewMonth::Tishrei, 1, 2, Festival::RoshHashanah, Kept::Everywhere),
    days(HebrewMonth::Tishrei, 10, 10, Festival::YomKippur, Kept::Everywhere),
    days(HebrewMonth::Tishrei, 15, 15, Festival::Sukkot, Kept::Everywhere),
    days(HebrewMonth::Tishrei, 16, 16, Festival::Sukkot, Kept::DiasporaOnly),
    days(HebrewMonth::Tishrei, 16, 21, Festival::CholHamoedSukkot, Kept::Everywhere),
    days(HebrewMonth::Tishrei, 22, 22, Festival::ShminiAtzeret, Kept::Everywhere),
    days(HebrewMonth::Tishrei, 23, 23, Festival::SimchatTorah, Kept::DiasporaOnly),
    days(HebrewMonth::Nisan, 15, 15, Festival::Pesach, Kept::Everywhere),
    days(HebrewMonth::Nisan, 16, 16, Festival::Pesach, Kept::DiasporaOnly),
    days(HebrewMonth::Nisan, 16, 20, Festival::CholHamoedPesach, Kept::Everywhere),
    days(HebrewMonth::Nisan, 21, 21, Festival::ShviiShelPesach, Kept::Everywhere),
    days(HebrewMonth::Nisan, 22, 22, Festival::AcharonShelPesach, Kept::DiasporaOnly),
    days(HebrewMonth::Sivan, 6, 6, Festival::Shavuot, Kept::Everywhere),
    days(HebrewMonth::Sivan, 7, 7, Festival::Shavuot, Kept::DiasporaOnly),
];

/// Returns the festival that falls on `date` under `rite`, if any.
pub fn festival_on(date: HebrewDate, rite: Rite) -> Option<Festival> {
    let month = date.hebrew_month();
    let day = date.day();
    FESTIVAL_DAYS
        .iter()
        .find(|row| {
            row.month == month && (row.first..=row.last).contains(&day) && row.kept.by(rite)
        })
        .map(|row| row.festival)
}
