//! Placement of Nowruz (1 Farvardin) on the Gregorian calendar.
//!
//! The March day is anchored at 1399-01-01 = 2020-03-20. Each Jalaali year
//! moves the next Nowruz by its own length minus the length of the
//! Gregorian year it spans; summing those moves in closed form gives an
//! exact O(1) answer for any year.

use crate::consts::{
    FEBRUARY, GREGORIAN_YEAR_OFFSET, JANUARY_DAYS, NOWRUZ_ANCHOR_MARCH_DAY, NOWRUZ_ANCHOR_YEAR,
};
use crate::gregorian::{self, gregorian_leaps_through};
use crate::leap::jalaali_leaps_through;

/// Day of March on which 1 Farvardin of `jy` falls, in Gregorian year `jy + 621`.
///
/// 20 or 21 across the modern range; values outside `1..=31` are still
/// meaningful as offsets from 1 March.
pub fn march_day(jy: i64) -> i64 {
    let anchor = NOWRUZ_ANCHOR_YEAR;
    let offset = GREGORIAN_YEAR_OFFSET;

    let jalaali_leaps = jalaali_leaps_through(jy - 1) - jalaali_leaps_through(anchor - 1);
    let gregorian_leaps =
        gregorian_leaps_through(jy + offset) - gregorian_leaps_through(anchor + offset);
    NOWRUZ_ANCHOR_MARCH_DAY + jalaali_leaps - gregorian_leaps
}

/// Gregorian day-of-year of Nowruz of `jy`.
///
/// `gregorian_ref` only decides the length of February; callers pass the
/// Gregorian year that holds this Nowruz (`jy + 621`).
pub fn nowruz_ordinal(jy: i64, gregorian_ref: i64) -> i64 {
    let february = i64::from(gregorian::days_in_month(gregorian_ref, FEBRUARY));
    i64::from(JANUARY_DAYS) + february + march_day(jy)
}
