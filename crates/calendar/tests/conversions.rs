use luach_calendar::{
    CalendarError, GregorianDate, HebrewDate, days_in_month, months_in_year, to_gregorian,
    to_hebrew,
};

fn greg(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

fn every_day(from: GregorianDate, to: GregorianDate) -> impl Iterator<Item = GregorianDate> {
    (from.fixed()..=to.fixed()).map(|f| GregorianDate::from_fixed(f).unwrap())
}

#[test]
fn roundtrip_1900_to_2100() {
    for date in every_day(greg(1900, 1, 1), greg(2100, 12, 31)) {
        let hebrew = to_hebrew(date);
        assert_eq!(
            to_gregorian(hebrew).unwrap(),
            date,
            "roundtrip failed for {date}: hebrew={hebrew}"
        );
    }
}

#[test]
fn hebrew_dates_are_valid() {
    for date in every_day(greg(1999, 1, 1), greg(2030, 12, 31)) {
        let h = to_hebrew(date);
        let rebuilt = HebrewDate::new(h.year(), h.month(), h.day());
        assert_eq!(rebuilt, Ok(h), "{date} produced an invalid Hebrew date {h:?}");
    }
}

#[test]
fn monotonic_day_by_day() {
    let mut previous = to_hebrew(greg(1900, 1, 1));
    for date in every_day(greg(1900, 1, 2), greg(2100, 12, 31)) {
        let current = to_hebrew(date);
        assert!(
            previous < current,
            "not increasing at {date}: {previous:?} then {current:?}"
        );
        previous = current;
    }
}

#[test]
fn every_hebrew_day_of_5784_maps_back() {
    let mut expected = greg(2023, 9, 16);
    for month in 1..=months_in_year(5784) {
        for day in 1..=days_in_month(5784, month).unwrap() {
            let h = HebrewDate::new(5784, month, day).unwrap();
            assert_eq!(to_gregorian(h).unwrap(), expected, "{h}");
            expected = expected.add_days(1).unwrap();
        }
    }
    // 1 Tishrei 5785
    assert_eq!(expected, greg(2024, 10, 3));
}

#[test]
fn known_fixed_points() {
    let cases: &[((i32, u8, u8), (i32, u8, u8, &str))] = &[
        ((2023, 9, 16), (5784, 1, 1, "Tishrei")),
        ((2023, 10, 14), (5784, 1, 29, "Tishrei")),
        ((2024, 1, 1), (5784, 4, 20, "Tevet")),
        ((2024, 3, 11), (5784, 7, 1, "Adar II")),
        ((2024, 4, 23), (5784, 8, 15, "Nisan")),
        ((2024, 10, 3), (5785, 1, 1, "Tishrei")),
        ((2000, 1, 1), (5760, 4, 23, "Tevet")),
        ((2100, 12, 31), (5861, 3, 29, "Kislev")),
    ];
    for &((gy, gm, gd), (hy, hm, hd, name)) in cases {
        let h = to_hebrew(greg(gy, gm, gd));
        assert_eq!(
            (h.year(), h.month(), h.day(), h.month_name()),
            (hy, hm, hd, name),
            "{gy:04}-{gm:02}-{gd:02}"
        );
    }
}

#[test]
fn nonexistent_gregorian_dates_rejected() {
    for (y, m, d) in [(2023, 2, 30), (2023, 4, 31), (1900, 2, 29), (2023, 13, 1)] {
        assert!(
            matches!(
                GregorianDate::new(y, m, d),
                Err(CalendarError::InvalidDate { .. })
            ),
            "{y}-{m}-{d} should be invalid"
        );
    }
}
