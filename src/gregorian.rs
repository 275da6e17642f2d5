//! Gregorian calendar facts: leap years, month lengths and ordinals.

use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_DAYS, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, LAST_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS,
};

pub const fn is_gregorian_leap(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= LAST_MONTH);

    if month == FEBRUARY && is_gregorian_leap(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i64) -> u16 {
    if is_gregorian_leap(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// 1-based ordinal of the date within its year.
pub fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
    (1..month)
        .map(|m| u16::from(days_in_month(year, m)))
        .sum::<u16>()
        + u16::from(day)
}

/// Inverse of [`day_of_year`]; `ordinal` must be within the year.
pub(crate) fn month_day_from_ordinal(year: i64, ordinal: u16) -> (u8, u8) {
    debug_assert!(ordinal >= 1 && ordinal <= days_in_year(year));

    let mut remaining = ordinal;
    let mut month = 1;
    while month < LAST_MONTH && remaining > u16::from(days_in_month(year, month)) {
        remaining -= u16::from(days_in_month(year, month));
        month += 1;
    }
    // remaining <= 31 here
    #[allow(clippy::cast_possible_truncation)]
    let day = remaining as u8;
    (month, day)
}

/// Cumulative count of Gregorian leap years up to and including `year`
/// (proleptic, year 0 is leap).
pub(crate) const fn gregorian_leaps_through(year: i64) -> i64 {
    year.div_euclid(LEAP_YEAR_CYCLE) - year.div_euclid(CENTURY_CYCLE)
        + year.div_euclid(GREGORIAN_CYCLE)
}

/// Days in all years from 1 up to, but excluding, `year`.
///
/// Negative for years before 1, which keeps day numbers continuous.
pub(crate) const fn days_before_year(year: i64) -> i64 {
    let prior = year - 1;
    prior * COMMON_YEAR_DAYS as i64 + gregorian_leaps_through(prior) - gregorian_leaps_through(0)
}
