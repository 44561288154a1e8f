//! The 54 weekly Torah portions.

use std::fmt;

/// Number of portions in the annual cycle.
pub const PORTION_COUNT: usize = 54;

/// Transliterated and Hebrew names, in reading order from Bereshit.
#[rustfmt::skip]
const PORTIONS: [(&str, &str); PORTION_COUNT] = [
    // Bereshit (Genesis)
    ("Bereshit", "בראשית"), ("Noach", "נח"), ("Lech-Lecha", "לך לך"),
    ("Vayera", "וירא"), ("Chayei Sara", "חיי שרה"), ("Toldot", "תולדות"),
    ("Vayetzei", "ויצא"), ("Vayishlach", "וישלח"), ("Vayeshev", "וישב"),
    ("Miketz", "מקץ"), ("Vayigash", "ויגש"), ("Vayechi", "ויחי"),
    // Shemot (Exodus)
    ("Shemot", "שמות"), ("Vaera", "וארא"), ("Bo", "בא"),
    ("Beshalach", "בשלח"), ("Yitro", "יתרו"), ("Mishpatim", "משפטים"),
    ("Terumah", "תרומה"), ("Tetzaveh", "תצוה"), ("Ki Tisa", "כי תשא"),
    ("Vayakhel", "ויקהל"), ("Pekudei", "פקודי"),
    // Vayikra (Leviticus)
    ("Vayikra", "ויקרא"), ("Tzav", "צו"), ("Shmini", "שמיני"),
    ("Tazria", "תזריע"), ("Metzora", "מצורע"), ("Achrei Mot", "אחרי מות"),
    ("Kedoshim", "קדושים"), ("Emor", "אמור"), ("Behar", "בהר"),
    ("Bechukotai", "בחקתי"),
    // Bamidbar (Numbers)
    ("Bamidbar", "במדבר"), ("Nasso", "נשא"), ("Beha'alotcha", "בהעלתך"),
    ("Sh'lach", "שלח"), ("Korach", "קרח"), ("Chukat", "חקת"),
    ("Balak", "בלק"), ("Pinchas", "פינחס"), ("Matot", "מטות"),
    ("Masei", "מסעי"),
    // Devarim (Deuteronomy)
    ("Devarim", "דברים"), ("Vaetchanan", "ואתחנן"), ("Eikev", "עקב"),
    ("Re'eh", "ראה"), ("Shoftim", "שופטים"), ("Ki Teitzei", "כי תצא"),
    ("Ki Tavo", "כי תבוא"), ("Nitzavim", "נצבים"), ("Vayeilech", "וילך"),
    ("Ha'azinu", "האזינו"), ("Vezot Haberakhah", "וזאת הברכה"),
];

/// One of the 54 weekly portions, identified by its position in the cycle
/// (0 = Bereshit, 53 = Vezot Haberakhah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Portion(u8);

impl Portion {
    pub const BERESHIT: Portion = Portion(0);
    pub const VAYAKHEL: Portion = Portion(21);
    pub const PEKUDEI: Portion = Portion(22);
    pub const TAZRIA: Portion = Portion(26);
    pub const ACHREI_MOT: Portion = Portion(28);
    pub const BEHAR: Portion = Portion(31);
    pub const CHUKAT: Portion = Portion(38);
    pub const MATOT: Portion = Portion(41);
    pub const NITZAVIM: Portion = Portion(50);
    pub const VAYEILECH: Portion = Portion(51);
    pub const HAAZINU: Portion = Portion(52);
    /// Read on Simchat Torah, never on a Shabbat.
    pub const VEZOT_HABERAKHAH: Portion = Portion(53);

    /// Returns the portion at `index`, or `None` past the end of the cycle.
    pub fn new(index: u8) -> Option<Self> {
        (usize::from(index) < PORTION_COUNT).then_some(Self(index))
    }

    /// Returns the position in the cycle.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Returns the transliterated name.
    pub fn name(self) -> &'static str {
        PORTIONS[usize::from(self.0)].0
    }

    /// Returns the name in Hebrew letters.
    pub fn hebrew_name(self) -> &'static str {
        PORTIONS[usize::from(self.0)].1
    }

    /// Iterates over all portions in reading order.
    pub fn all() -> impl Iterator<Item = Portion> {
        (0..PORTION_COUNT as u8).map(Portion)
    }
}

impl fmt::Display for Portion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Portion::new(0), Some(Portion::BERESHIT));
        assert_eq!(Portion::new(53), Some(Portion::VEZOT_HABERAKHAH));
        assert_eq!(Portion::new(54), None);
    }

    #[test]
    fn names() {
        assert_eq!(Portion::BERESHIT.name(), "Bereshit");
        assert_eq!(Portion::BERESHIT.hebrew_name(), "בראשית");
        assert_eq!(Portion::VAYAKHEL.name(), "Vayakhel");
        assert_eq!(Portion::PEKUDEI.name(), "Pekudei");
        assert_eq!(Portion::MATOT.name(), "Matot");
        assert_eq!(Portion::NITZAVIM.name(), "Nitzavim");
        assert_eq!(Portion::HAAZINU.hebrew_name(), "האזינו");
    }

    #[test]
    fn all_in_order() {
        let all: Vec<_> = Portion::all().collect();
        assert_eq!(all.len(), PORTION_COUNT);
        assert!(all.windows(2).all(|w| w[0].index() + 1 == w[1].index()));
    }

    #[test]
    fn names_unique() {
        let mut names: Vec<_> = Portion::all().map(Portion::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PORTION_COUNT);
    }
}
