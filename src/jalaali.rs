//! Jalaali calendar facts built on the leap rule.

use crate::consts::{
    COMMON_YEAR_DAYS, JALAALI_ESFAND_COMMON_DAYS, JALAALI_FIRST_HALF_DAYS,
    JALAALI_LAST_LONG_MONTH, JALAALI_LONG_MONTH_DAYS, JALAALI_SHORT_MONTH_DAYS, LAST_MONTH,
    LEAP_YEAR_DAYS,
};
use crate::leap::{is_jalaali_leap, jalaali_leaps_through};

/// Farvardin..Shahrivar have 31 days, Mehr..Bahman 30, Esfand 29 or 30.
pub fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= LAST_MONTH);

    if month <= JALAALI_LAST_LONG_MONTH {
        JALAALI_LONG_MONTH_DAYS
    } else if month < LAST_MONTH || is_jalaali_leap(year) {
        JALAALI_SHORT_MONTH_DAYS
    } else {
        JALAALI_ESFAND_COMMON_DAYS
    }
}

pub fn days_in_year(year: i64) -> u16 {
    if is_jalaali_leap(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

pub const fn day_of_year(month: u8, day: u8) -> u16 {
    let (month, day) = (month as u16, day as u16);
    if month <= JALAALI_LAST_LONG_MONTH as u16 {
        (month - 1) * JALAALI_LONG_MONTH_DAYS as u16 + day
    } else {
        JALAALI_FIRST_HALF_DAYS
            + (month - 1 - JALAALI_LAST_LONG_MONTH as u16) * JALAALI_SHORT_MONTH_DAYS as u16
            + day
    }
}

/// Inverse of [`day_of_year`]; `ordinal` must be within the year.
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn month_day_from_ordinal(ordinal: u16) -> (u8, u8) {
    debug_assert!(ordinal >= 1 && ordinal <= LEAP_YEAR_DAYS);

    let long = JALAALI_LONG_MONTH_DAYS as u16;
    let short = JALAALI_SHORT_MONTH_DAYS as u16;
    // both results fit in u8: months <= 12, days <= 31
    if ordinal <= JALAALI_FIRST_HALF_DAYS {
        let month = ordinal.div_ceil(long);
        (month as u8, (ordinal - (month - 1) * long) as u8)
    } else {
        let rest = ordinal - JALAALI_FIRST_HALF_DAYS;
        let month = rest.div_ceil(short) + JALAALI_LAST_LONG_MONTH as u16;
        (
            month as u8,
            (rest - (month - 1 - JALAALI_LAST_LONG_MONTH as u16) * short) as u8,
        )
    }
}

/// Days in all Jalaali years from 1 up to, but excluding, `year`.
pub(crate) fn days_before_year(year: i64) -> i64 {
    let prior = year - 1;
    prior * i64::from(COMMON_YEAR_DAYS) + jalaali_leaps_through(prior) - jalaali_leaps_through(0)
}
