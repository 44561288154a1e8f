//! When adjacent portions are read together.
//!
//! A year has 50 to 55 Shabbatot, of which festivals claim some,
//! so in shorter years seven pairs of portions are joined. Each pair has a
//! fixed condition; the table below lists them by the first portion of the
//! pair.

use luach_calendar::{
    CalendarError, HebrewDate, HebrewMonth, Weekday, is_leap_year, new_year,
};

use crate::festival::Rite;
use crate::portion::Portion;

/// A calendar fact the rules measure distance to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Anchor {
    /// 14 Nisan, the eve of Pesach.
    ErevPesach,
    /// 9 Av.
    TishaBav,
}

/// Condition under which a pair of portions is read on one Shabbat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JoinRule {
    /// Fewer than `weeks` whole weeks remain from the Shabbat to the anchor.
    WeeksBefore { anchor: Anchor, weeks: i64 },
    /// The year has 12 months.
    CommonYear,
    /// The year has 12 months, unless following the Israel rite in a year
    /// whose Pesach starts on `weekday`.
    CommonYearUnlessIsraelPesachOn(Weekday),
    /// Following the Diaspora rite in a year whose Pesach starts on `weekday`.
    DiasporaPesachOn(Weekday),
    /// The next Rosh Hashanah falls on one of the listed weekdays.
    NextRoshHashanahOn(&'static [Weekday]),
}

/// Joinable pairs, keyed by their first portion.
pub(crate) const COMBINATION_RULES: [(Portion, JoinRule); 7] = [
    (
        Portion::VAYAKHEL,
        JoinRule::WeeksBefore {
            anchor: Anchor::ErevPesach,
            weeks: 3,
        },
    ),
    (Portion::TAZRIA, JoinRule::CommonYear),
    (Portion::ACHREI_MOT, JoinRule::CommonYear),
    (
        Portion::BEHAR,
        JoinRule::CommonYearUnlessIsraelPesachOn(Weekday::Saturday),
    ),
    (Portion::CHUKAT, JoinRule::DiasporaPesachOn(Weekday::Thursday)),
    (
        Portion::MATOT,
        JoinRule::WeeksBefore {
            anchor: Anchor::TishaBav,
            weeks: 2,
        },
    ),
    (
        Portion::NITZAVIM,
        JoinRule::NextRoshHashanahOn(&[Weekday::Thursday, Weekday::Saturday]),
    ),
];

/// Weekdays of Rosh Hashanah on which the year opens with Vayeilech read
/// alone; otherwise Vayeilech was joined to Nitzavim the year before.
pub(crate) const VAYEILECH_OPENS_ON: [Weekday; 2] = [Weekday::Monday, Weekday::Tuesday];

/// The facts about one Hebrew year that the rules consult.
#[derive(Debug, Clone)]
pub(crate) struct YearContext {
    pub(crate) rite: Rite,
    pub(crate) leap: bool,
    pub(crate) rosh_hashanah: i64,
    pub(crate) next_rosh_hashanah: i64,
    pesach: i64,
    tisha_bav: i64,
}

impl YearContext {
    pub(crate) fn new(year: i32, rite: Rite) -> Result<Self, CalendarError> {
        Ok(Self {
            rite,
            leap: is_leap_year(year),
            rosh_hashanah: new_year(year),
            next_rosh_hashanah: new_year(year + 1),
            pesach: HebrewDate::from_month(year, HebrewMonth::Nisan, 15)?.fixed(),
            tisha_bav: HebrewDate::from_month(year, HebrewMonth::Av, 9)?.fixed(),
        })
    }

    fn anchor(&self, anchor: Anchor) -> i64 {
        match anchor {
            Anchor::ErevPesach => self.pesach - 1,
            Anchor::TishaBav => self.tisha_bav,
        }
    }

    fn pesach_weekday(&self) -> Weekday {
        Weekday::from_fixed(self.pesach)
    }
}

impl JoinRule {
    /// Returns `true` if the pair is joined on the Shabbat at fixed day `shabbat`.
    pub(crate) fn joins(self, year: &YearContext, shabbat: i64) -> bool {
        match self {
            JoinRule::WeeksBefore { anchor, weeks } => {
                (year.anchor(anchor) - shabbat).div_euclid(7) < weeks
            }
            JoinRule::CommonYear => !year.leap,
            JoinRule::CommonYearUnlessIsraelPesachOn(weekday) => {
                !year.leap && !(year.rite == Rite::Israel && year.pesach_weekday() == weekday)
            }
            JoinRule::DiasporaPesachOn(weekday) => {
                year.rite == Rite::Diaspora && year.pesach_weekday() == weekday
            }
            JoinRule::NextRoshHashanahOn(weekdays) => {
                weekdays.contains(&Weekday::from_fixed(year.next_rosh_hashanah))
            }
        }
    }
}

/// Returns the rule joining `portion` with the next one, if it has one.
pub(crate) fn join_rule(portion: Portion) -> Option<JoinRule> {
    COMBINATION_RULES
        .iter()
        .find(|(first, _)| *first == portion)
        .map(|&(_, rule)| rule)
}
