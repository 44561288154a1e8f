//! Hebrew numerals (gematria) for days and years.

const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 4] = ['ק', 'ר', 'ש', 'ת'];

const GERESH: char = '׳';
const GERSHAYIM: char = '״';

/// Renders `n` in Hebrew letters.
///
/// A single letter is followed by a geresh; longer numerals carry gershayim
/// before the last letter. 15 and 16 are written ט״ו and ט״ז. With
/// `thousands`, the thousands digit is prefixed and marked with a geresh
/// (5784 → ה׳תשפ״ד); without it the thousands are dropped (תשפ״ד).
pub fn hebrew_numeral(n: u32, thousands: bool) -> String {
    let mut letters = String::new();
    let mut rest = n % 1000;

    while rest >= 400 {
        letters.push('ת');
        rest -= 400;
    }
    if rest >= 100 {
        letters.push(HUNDREDS[(rest / 100 - 1) as usize]);
        rest %= 100;
    }
    match rest {
        15 => letters.push_str("טו"),
        16 => letters.push_str("טז"),
        _ => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10 - 1) as usize]);
            }
            if rest % 10 > 0 {
                letters.push(ONES[(rest % 10 - 1) as usize]);
            }
        }
    }

    let mut out = String::new();
    let thousands_digit = n / 1000 % 10;
    if thousands && thousands_digit > 0 {
        out.push(ONES[(thousands_digit - 1) as usize]);
        out.push(GERESH);
    }

    let count = letters.chars().count();
    for (i, c) in letters.chars().enumerate() {
        if count > 1 && i == count - 1 {
            out.push(GERSHAYIM);
        }
        out.push(c);
    }
    if count == 1 {
        out.push(GERESH);
    }
    out
}
