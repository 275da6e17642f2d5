use jalcal::{
    Calendar, DateError, DateInfo, GregorianDate, JalaaliDate, WeekConfig, Weekday, add_days,
    add_months, add_years, date_info, diff_days, to_gregorian, weekday,
};

#[test]
fn test_add_days_table() {
    struct TestCase {
        calendar: Calendar,
        date: (i32, u8, u8),
        days: i32,
        expected: (i32, u8, u8),
    }

    let cases = [
        TestCase {
            calendar: Calendar::Jalaali,
            date: (1404, 6, 31),
            days: 1,
            expected: (1404, 7, 1),
        },
        TestCase {
            calendar: Calendar::Jalaali,
            date: (1404, 12, 29),
            days: 1,
            expected: (1405, 1, 1),
        },
        TestCase {
            calendar: Calendar::Jalaali,
            date: (1404, 1, 1),
            days: 365,
            expected: (1405, 1, 1),
        },
        TestCase {
            calendar: Calendar::Jalaali,
            date: (1403, 1, 1),
            days: 366,
            expected: (1404, 1, 1),
        },
        TestCase {
            calendar: Calendar::Jalaali,
            date: (1404, 7, 1),
            days: -1,
            expected: (1404, 6, 31),
        },
        TestCase {
            calendar: Calendar::Gregorian,
            date: (2024, 2, 28),
            days: 2,
            expected: (2024, 3, 1),
        },
        TestCase {
            calendar: Calendar::Gregorian,
            date: (2025, 8, 23),
            days: -365,
            expected: (2024, 8, 23),
        },
        TestCase {
            calendar: Calendar::Gregorian,
            date: (2000, 1, 1),
            days: 36_524,
            expected: (2099, 12, 31),
        },
    ];

    for case in cases {
        let (year, month, day) = case.date;
        assert_eq!(
            add_days(year, month, day, case.days, case.calendar),
            Ok(case.expected),
            "{}: {year}-{month}-{day} + {}",
            case.calendar,
            case.days
        );
    }
}

#[test]
fn test_add_days_inverse() {
    let start = JalaaliDate::new(1350, 9, 17).unwrap();
    for days in [-100_000, -3_650, -1, 0, 1, 29, 366, 46_751, 100_000] {
        let moved = start.add_days(days).unwrap();
        assert_eq!(moved.add_days(-days).unwrap(), start, "{days}");
        assert_eq!(moved.diff_days(&start), i64::from(days));
    }
}

#[test]
fn test_add_months_clamps_to_month_end() {
    assert_eq!(add_months(1404, 6, 31, 1, Calendar::Jalaali), Ok((1404, 7, 30)));
    assert_eq!(add_months(1404, 11, 30, 1, Calendar::Jalaali), Ok((1404, 12, 29)));
    assert_eq!(add_months(1403, 11, 30, 1, Calendar::Jalaali), Ok((1403, 12, 30)));
    assert_eq!(add_months(1404, 1, 31, -1, Calendar::Jalaali), Ok((1403, 12, 30)));
    assert_eq!(add_months(2023, 1, 31, 1, Calendar::Gregorian), Ok((2023, 2, 28)));
    assert_eq!(add_months(2023, 8, 31, 1, Calendar::Gregorian), Ok((2023, 9, 30)));
}

#[test]
fn test_add_months_whole_years() {
    assert_eq!(add_months(1404, 6, 1, 12, Calendar::Jalaali), Ok((1405, 6, 1)));
    assert_eq!(add_months(1404, 6, 1, -24, Calendar::Jalaali), Ok((1402, 6, 1)));
    assert_eq!(add_months(2025, 8, 23, 0, Calendar::Gregorian), Ok((2025, 8, 23)));
}

#[test]
fn test_add_years_clamps_leap_day() {
    assert_eq!(add_years(1403, 12, 30, 1, Calendar::Jalaali), Ok((1404, 12, 29)));
    assert_eq!(add_years(1408, 12, 30, -5, Calendar::Jalaali), Ok((1403, 12, 30)));
    assert_eq!(add_years(2024, 2, 29, 1, Calendar::Gregorian), Ok((2025, 2, 28)));
    assert_eq!(add_years(2096, 2, 29, 4, Calendar::Gregorian), Ok((2100, 2, 28)));
}

#[test]
fn test_invalid_input_is_rejected() {
    assert!(matches!(
        add_days(1404, 12, 30, 1, Calendar::Jalaali),
        Err(DateError::InvalidDate { .. })
    ));
    assert!(matches!(
        add_months(2025, 2, 30, 1, Calendar::Gregorian),
        Err(DateError::InvalidDate { .. })
    ));
    assert!(matches!(
        add_years(2025, 13, 1, 1, Calendar::Gregorian),
        Err(DateError::InvalidDate { .. })
    ));
}

#[test]
fn test_diff_days() {
    assert_eq!(diff_days((1404, 1, 1), (1403, 12, 30), Calendar::Jalaali), Ok(1));
    assert_eq!(diff_days((1404, 6, 23), (1404, 5, 23), Calendar::Jalaali), Ok(31));
    assert_eq!(diff_days((1403, 1, 1), (1404, 1, 1), Calendar::Jalaali), Ok(-366));
    assert_eq!(diff_days((2025, 1, 1), (2024, 1, 1), Calendar::Gregorian), Ok(366));
    assert_eq!(diff_days((2025, 8, 23), (2025, 8, 23), Calendar::Gregorian), Ok(0));
}

#[test]
fn test_diff_days_agrees_with_conversion() {
    let pairs = [((1300, 1, 1), (1400, 1, 1)), ((1398, 12, 29), (1409, 1, 1)), ((1500, 6, 31), (1700, 12, 29))];
    for (a, b) in pairs {
        let jalaali = diff_days(a, b, Calendar::Jalaali).unwrap();
        let ga = to_gregorian(a.0, a.1, a.2).unwrap();
        let gb = to_gregorian(b.0, b.1, b.2).unwrap();
        assert_eq!(diff_days(ga, gb, Calendar::Gregorian), Ok(jalaali));
    }
}

#[test]
fn test_weekday_agrees_across_calendars() {
    let mut date = GregorianDate::new(2024, 1, 1).unwrap();
    let mut expected = Weekday::Monday;
    for _ in 0..1_000 {
        let jalaali = date.to_jalaali().unwrap();
        assert_eq!(date.weekday(), expected, "{date}");
        assert_eq!(jalaali.weekday(), expected, "{jalaali}");
        assert!(expected.number() <= 6);
        date = date.add_days(1).unwrap();
        expected = expected.succ();
    }
}

#[test]
fn test_weekday_free_function() {
    assert_eq!(weekday(1404, 1, 1, Calendar::Jalaali), Ok(Weekday::Friday));
    assert_eq!(weekday(1403, 12, 30, Calendar::Jalaali), Ok(Weekday::Thursday));
    assert_eq!(weekday(2025, 8, 23, Calendar::Gregorian).map(Weekday::number), Ok(0));
}

#[test]
fn test_date_info() {
    assert_eq!(
        date_info(1404, 6, 1, Calendar::Jalaali, Weekday::Friday),
        Ok(DateInfo {
            weekday: Weekday::Saturday,
            day_of_year: 156,
            week_of_year: 23,
        })
    );
    assert_eq!(
        date_info(2025, 8, 23, Calendar::Gregorian, Weekday::Friday),
        Ok(DateInfo {
            weekday: Weekday::Saturday,
            day_of_year: 235,
            week_of_year: 34,
        })
    );
}

#[test]
fn test_week_of_year_starts_at_one() {
    for week_start in [Weekday::Saturday, Weekday::Monday, Weekday::Friday] {
        let info = date_info(1404, 1, 1, Calendar::Jalaali, week_start).unwrap();
        assert_eq!(info.day_of_year, 1);
        assert_eq!(info.week_of_year, 1);
    }
    // 1404-01-08 is the year's second Friday
    let info = date_info(1404, 1, 8, Calendar::Jalaali, Weekday::Friday).unwrap();
    assert_eq!(info.weekday, Weekday::Friday);
    assert_eq!(info.week_of_year, 2);
}

#[test]
fn test_last_day_of_year_info() {
    let date = JalaaliDate::new(1403, 12, 30).unwrap();
    let info = date.info_with(&WeekConfig::new().with_week_start(Weekday::Saturday));
    assert_eq!(info.day_of_year, 366);
    assert!(info.week_of_year >= 53);

    let date = GregorianDate::new(2025, 12, 31).unwrap();
    assert_eq!(date.info().day_of_year, 365);
}
