//! Jalaali leap-year rule: the Behrooz–Birashk 128-year remainder table.
//!
//! A year is leap when `(year + 124) mod 128` is one of a fixed set of
//! remainders. Years up to 473 first remap a handful of remainders to the
//! remainder just before them.

use crate::consts::{
    JALAALI_CYCLE, JALAALI_CYCLE_OFFSET, JALAALI_LEAP_REMAINDERS, JALAALI_LEAPS_PER_CYCLE,
    JALAALI_REMAINDER_REMAP, JALAALI_REMAP_LAST_YEAR,
};

const CYCLE_LEN: usize = JALAALI_CYCLE as usize;

const fn build_leap_table() -> [bool; CYCLE_LEN] {
    let mut table = [false; CYCLE_LEN];
    let mut i = 0;
    while i < JALAALI_LEAP_REMAINDERS.len() {
        table[JALAALI_LEAP_REMAINDERS[i] as usize] = true;
        i += 1;
    }
    table
}

/// `prefix[r]` = number of leap remainders `<= r`.
const fn build_prefix_table() -> [u8; CYCLE_LEN] {
    let leap = build_leap_table();
    let mut prefix = [0u8; CYCLE_LEN];
    let mut running = 0u8;
    let mut r = 0;
    while r < CYCLE_LEN {
        if leap[r] {
            running += 1;
        }
        prefix[r] = running;
        r += 1;
    }
    prefix
}

static LEAP_TABLE: [bool; CYCLE_LEN] = build_leap_table();
static LEAP_PREFIX: [u8; CYCLE_LEN] = build_prefix_table();

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn base_remainder(year: i64) -> u8 {
    // rem_euclid keeps this in 0..128
    (year + JALAALI_CYCLE_OFFSET).rem_euclid(JALAALI_CYCLE) as u8
}

fn cycle_remainder(year: i64) -> u8 {
    let r = base_remainder(year);
    if year > JALAALI_REMAP_LAST_YEAR {
        return r;
    }
    JALAALI_REMAINDER_REMAP
        .iter()
        .find(|(from, _)| *from == r)
        .map_or(r, |&(_, to)| to)
}

/// Returns whether `year` is a Jalaali leap year (Esfand has 30 days).
///
/// Total over every integer year; O(1).
pub fn is_jalaali_leap(year: i64) -> bool {
    LEAP_TABLE[usize::from(cycle_remainder(year))]
}

/// Cumulative count of Jalaali leap years up to and including `year`.
///
/// Only differences are meaningful: for every `n`,
/// `jalaali_leaps_through(n) - jalaali_leaps_through(n - 1)` is 1 when `n`
/// is leap and 0 otherwise.
pub(crate) fn jalaali_leaps_through(year: i64) -> i64 {
    let shifted = year + JALAALI_CYCLE_OFFSET;
    let cycles = shifted.div_euclid(JALAALI_CYCLE);
    let r = usize::from(base_remainder(year));
    cycles * JALAALI_LEAPS_PER_CYCLE + i64::from(LEAP_PREFIX[r]) + remap_correction(year)
}

/// Leap-status changes the remap makes in `(year, 473]`, negated, so the
/// count stays flat above the remapped range.
fn remap_correction(year: i64) -> i64 {
    let last = JALAALI_REMAP_LAST_YEAR;
    if year >= last {
        return 0;
    }
    JALAALI_REMAINDER_REMAP
        .iter()
        .map(|&(from, to)| {
            let delta = i64::from(LEAP_TABLE[usize::from(to)])
                - i64::from(LEAP_TABLE[usize::from(from)]);
            -delta * years_with_remainder(year, last, from)
        })
        .sum()
}

/// Years in `(after, through]` whose base remainder is `remainder`.
fn years_with_remainder(after: i64, through: i64, remainder: u8) -> i64 {
    let shift = JALAALI_CYCLE_OFFSET - i64::from(remainder);
    (through + shift).div_euclid(JALAALI_CYCLE) - (after + shift).div_euclid(JALAALI_CYCLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_leap_years() {
        for year in [1399, 1403, 1408] {
            assert!(is_jalaali_leap(year), "{year} should be leap");
        }
        for year in [1398, 1400, 1401, 1402, 1404, 1405, 1406, 1407, 1409] {
            assert!(!is_jalaali_leap(year), "{year} should not be leap");
        }
    }

    #[test]
    fn test_one_cycle_has_31_leap_years() {
        let count = (1400..1400 + 128).filter(|&y| is_jalaali_leap(y)).count();
        assert_eq!(count, 31);
    }

    #[test]
    fn test_remap_applies_only_up_to_473() {
        // 413 and 541 both have remainder 25; only 413 is remapped onto 24
        assert!(is_jalaali_leap(413));
        assert!(!is_jalaali_leap(541));
        // 380 and 508 both have remainder 120; only 380 is remapped onto 119
        assert!(is_jalaali_leap(380));
        assert!(!is_jalaali_leap(508));
    }

    #[test]
    fn test_negative_years_are_total() {
        // -124 has remainder 0
        assert!(is_jalaali_leap(-124));
        assert!(!is_jalaali_leap(-123));
        let _ = is_jalaali_leap(i64::from(i32::MIN));
        let _ = is_jalaali_leap(i64::from(i32::MAX));
    }

    #[test]
    fn test_cumulative_count_matches_rule() {
        for year in -1500..3000 {
            let step = jalaali_leaps_through(year) - jalaali_leaps_through(year - 1);
            assert_eq!(
                step,
                i64::from(is_jalaali_leap(year)),
                "cumulative count disagrees at {year}"
            );
        }
    }
}
