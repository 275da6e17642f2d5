//! Day of the week, Saturday-first.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_WEEK, FEBRUARY};
use crate::convert::jalaali_to_gregorian;
use crate::prelude::*;

/// Day of the week; the discriminant is the weekday number, 0 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Saturday = 0,
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Saturday,
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Returns the weekday number, 0 = Saturday … 6 = Friday.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Weekday::number`]; `None` above 6.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number)).copied()
    }

    /// The following day.
    pub const fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_congruence(value: i64) -> Self {
        Self::ALL[value.rem_euclid(i64::from(DAYS_PER_WEEK)) as usize]
    }
}

/// Weekday of a valid Gregorian date (Zeller's congruence).
pub fn gregorian_weekday(year: i64, month: u8, day: u8) -> Weekday {
    let (mut year, mut month) = (year, i64::from(month));
    // January and February count as months 13 and 14 of the previous year
    if month <= i64::from(FEBRUARY) {
        month += 12;
        year -= 1;
    }
    let k = year.rem_euclid(100);
    let j = year.div_euclid(100);
    Weekday::from_congruence(
        i64::from(day) + 13 * (month + 1) / 5 + k + k / 4 + j.div_euclid(4) + 5 * j,
    )
}

/// Weekday of a valid Jalaali date, via its Gregorian counterpart.
pub fn jalaali_weekday(year: i64, month: u8, day: u8) -> Weekday {
    let (gy, gm, gd) = jalaali_to_gregorian(year, month, day);
    gregorian_weekday(gy, gm, gd)
}
