//! Jalaali ⇄ Gregorian conversion through Nowruz and day-of-year arithmetic.
//!
//! Inputs are assumed valid; [`crate::Date`] checks them before calling in.

use crate::consts::GREGORIAN_YEAR_OFFSET;
use crate::nowruz::nowruz_ordinal;
use crate::{gregorian, jalaali};

/// Moves `ordinal` (1-based, possibly outside the year) into the year it
/// actually falls in.
fn settle(mut year: i64, mut ordinal: i64, days_in_year: impl Fn(i64) -> u16) -> (i64, u16) {
    while ordinal < 1 {
        year -= 1;
        ordinal += i64::from(days_in_year(year));
    }
    while ordinal > i64::from(days_in_year(year)) {
        ordinal -= i64::from(days_in_year(year));
        year += 1;
    }
    // 1..=366 after settling
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ordinal = ordinal as u16;
    (year, ordinal)
}

/// Converts a valid Jalaali date to `(year, month, day)` in the Gregorian calendar.
///
/// Nowruz of `jy` lies in March of `jy + 621`; the last days of Esfand
/// spill into the following Gregorian year.
pub fn jalaali_to_gregorian(jy: i64, jm: u8, jd: u8) -> (i64, u8, u8) {
    let gy = jy + GREGORIAN_YEAR_OFFSET;
    let ordinal = nowruz_ordinal(jy, gy) + i64::from(jalaali::day_of_year(jm, jd)) - 1;

    let (gy, ordinal) = settle(gy, ordinal, gregorian::days_in_year);
    let (gm, gd) = gregorian::month_day_from_ordinal(gy, ordinal);
    (gy, gm, gd)
}

/// Converts a valid Gregorian date to `(year, month, day)` in the Jalaali calendar.
///
/// A date before Nowruz of `gy - 621` belongs to the previous Jalaali year
/// and is counted from that year's Nowruz.
pub fn gregorian_to_jalaali(gy: i64, gm: u8, gd: u8) -> (i64, u8, u8) {
    let jy = gy - GREGORIAN_YEAR_OFFSET;
    let ordinal = i64::from(gregorian::day_of_year(gy, gm, gd)) - nowruz_ordinal(jy, gy) + 1;

    let (jy, ordinal) = settle(jy, ordinal, jalaali::days_in_year);
    let (jm, jd) = jalaali::month_day_from_ordinal(ordinal);
    (jy, jm, jd)
}
