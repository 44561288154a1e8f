use luach_calendar::{GregorianDate, HebrewDate, Weekday};
use luach_parasha::{
    Festival, ParashaError, Reading, Rite, Scheduler, current_parasha, festival_on,
};

fn greg(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn name_on(rite: Rite, date: GregorianDate) -> String {
    Scheduler::new(rite).current_parasha(date).unwrap().transliterated_name
}

#[rustfmt::skip]
const DIASPORA: &[((i32, u8, u8), &str)] = &[
    ((2023,  9, 23), "Ha'azinu"),
    ((2023,  9, 30), "Sukkot"),
    ((2023, 10,  7), "Shemini Atzeret"),
    ((2023, 10, 14), "Bereshit"),
    ((2023,  3, 18), "Vayakhel-Pekudei"),
    ((2023,  4, 22), "Tazria-Metzora"),
    ((2023,  4, 29), "Achrei Mot-Kedoshim"),
    ((2023,  5, 13), "Behar-Bechukotai"),
    ((2023,  7,  1), "Chukat-Balak"),
    ((2023,  7, 15), "Matot-Masei"),
    ((2023,  9,  9), "Nitzavim-Vayeilech"),
    ((2024,  3,  9), "Vayakhel"),
    ((2024,  3, 16), "Pekudei"),
    ((2024,  5, 11), "Kedoshim"),
    ((2024,  8,  3), "Matot-Masei"),
    ((2024,  9, 28), "Nitzavim-Vayeilech"),
    ((2024, 10,  5), "Ha'azinu"),
    ((2024, 10, 12), "Yom Kippur"),
    ((2025, 10, 18), "Bereshit"),
];

#[test]
fn diaspora_shabbatot() {
    for &((y, m, d), expected) in DIASPORA {
        let date = greg(y, m, d);
        assert_eq!(date.weekday(), Weekday::Saturday, "{date} is not a Shabbat");
        assert_eq!(name_on(Rite::Diaspora, date), expected, "reading on {date}");
    }
}

#[test]
fn israel_splits_chukat_balak_5783() {
    assert_eq!(name_on(Rite::Israel, greg(2023, 7, 1)), "Balak");
    assert_eq!(name_on(Rite::Israel, greg(2023, 6, 24)), "Chukat");
}

#[test]
fn last_day_of_pesach_only_in_diaspora() {
    // 22 Nisan 5784.
    let date = greg(2024, 4, 30);
    assert_eq!(name_on(Rite::Diaspora, date), "Acharon shel Pesach");
    assert_eq!(name_on(Rite::Israel, date), "Achrei Mot");
}

#[test]
fn second_day_of_shavuot_only_in_diaspora() {
    // 7 Sivan 5785.
    let date = greg(2025, 6, 3);
    assert_eq!(name_on(Rite::Diaspora, date), "Shavuot");
    assert_eq!(name_on(Rite::Israel, date), "Nasso");
}

#[test]
fn chol_hamoed_shabbat_reads_festival() {
    let entry = current_parasha(greg(2024, 4, 27)).unwrap();
    assert_eq!(entry.reading, Reading::Festival(Festival::CholHamoedPesach));
}

#[test]
fn week_shares_the_shabbat_reading() {
    // Sunday 2023-10-08 to Friday 2023-10-13 fall after Simchat Torah.
    let shabbat = current_parasha(greg(2023, 10, 14)).unwrap();
    for day in 9..=13 {
        let entry = current_parasha(greg(2023, 10, day)).unwrap();
        assert_eq!(entry, shabbat, "2023-10-{day}");
    }
}

#[test]
fn week_start_is_the_preceding_sunday() {
    for (y, m, d) in [(2024, 3, 9), (2024, 3, 5), (2024, 3, 3)] {
        let entry = current_parasha(greg(y, m, d)).unwrap();
        let sunday = entry.week_start.to_gregorian().unwrap();
        assert_eq!(sunday, greg(2024, 3, 3));
        assert_eq!(sunday.weekday(), Weekday::Sunday);
    }
}

#[test]
fn festival_days_match_festival_readings() {
    for rite in [Rite::Diaspora, Rite::Israel] {
        let scheduler = Scheduler::new(rite);
        let mut date = greg(2023, 9, 1);
        while date <= greg(2024, 10, 31) {
            let entry = scheduler.current_parasha(date).unwrap();
            let festival = festival_on(HebrewDate::from_gregorian(date), rite);
            match festival {
                Some(f) => assert_eq!(entry.reading, Reading::Festival(f), "{date} {rite}"),
                None if date.weekday() == Weekday::Saturday => {
                    assert!(!entry.reading.is_festival(), "{date} {rite}");
                }
                None => {}
            }
            date = date.add_days(1).unwrap();
        }
    }
}

#[test]
fn names_in_hebrew() {
    let entry = current_parasha(greg(2023, 3, 18)).unwrap();
    assert_eq!(entry.hebrew_name, "ויקהל-פקודי");
}

#[test]
fn dates_outside_supported_years() {
    let err = current_parasha(greg(1899, 1, 1)).unwrap_err();
    assert_eq!(
        err,
        ParashaError::UnsupportedDateRange { year: 5659, min: 5660, max: 5861 }
    );
    assert!(current_parasha(greg(2200, 6, 1)).is_err());
}
