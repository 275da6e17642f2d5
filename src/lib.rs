//! # jalcal
//!
//! Jalaali (Solar Hijri) ⇄ Gregorian date conversion and calendar
//! arithmetic, computed directly from the 128-year leap rule and the date of
//! Nowruz. No Julian Day Number, host date library or platform calendar is
//! involved.
//!
//! Dates are domain-tagged: a [`JalaaliDate`] and a [`GregorianDate`] are
//! different types. The free functions at the crate root take a runtime
//! [`Calendar`] tag instead, for callers holding plain `(year, month, day)`
//! triples.
//!
//! ```
//! use jalcal::{GregorianDate, JalaaliDate, Weekday};
//!
//! let nowruz = JalaaliDate::new(1404, 1, 1).unwrap();
//! assert_eq!(nowruz.to_gregorian().unwrap(), GregorianDate::new(2025, 3, 21).unwrap());
//! assert_eq!(nowruz.weekday(), Weekday::Friday);
//!
//! let eve = nowruz.add_days(-1).unwrap();
//! assert_eq!(eve.to_tuple(), (1403, 12, 30));
//! assert_eq!(nowruz.diff_days(&eve), 1);
//! ```
//!
//! Results are validated for Jalaali years around 1300–1700 and Gregorian
//! years around 1900–2500; every function is still total and deterministic
//! outside that range.

mod arith;
mod calendar;
mod consts;
mod convert;
mod diff;
mod error;
mod gregorian;
mod info;
mod jalaali;
mod leap;
mod nowruz;
mod prelude;
mod weekday;

pub use calendar::{Calendar, CalendarSystem, Date, Gregorian, GregorianDate, Jalaali, JalaaliDate};
pub use consts::*;
pub use error::DateError;
pub use info::{DateInfo, WeekConfig, week_of_year};
pub use weekday::Weekday;

/// Runs `$body` with `$system` bound to the calendar marker for `$calendar`.
macro_rules! with_calendar {
    ($calendar:expr, $system:ident => $body:expr) => {
        match $calendar {
            Calendar::Jalaali => {
                type $system = Jalaali;
                $body
            }
            Calendar::Gregorian => {
                type $system = Gregorian;
                $body
            }
        }
    };
}

/// Returns whether `year` is a Jalaali leap year.
pub fn is_leap_year_jalaali(year: i32) -> bool {
    leap::is_jalaali_leap(i64::from(year))
}

/// Returns whether `year` is a Gregorian leap year.
pub fn is_leap_year_gregorian(year: i32) -> bool {
    gregorian::is_gregorian_leap(i64::from(year))
}

/// Length of `month` in `year` of `calendar`.
///
/// # Errors
/// Returns `DateError::InvalidMonth` if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8, calendar: Calendar) -> Result<u8, DateError> {
    if !(FIRST_MONTH..=LAST_MONTH).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(with_calendar!(calendar, C => <C as CalendarSystem>::days_in_month(i64::from(year), month)))
}

/// Converts a Jalaali date to Gregorian.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input is not a valid Jalaali date.
pub fn to_gregorian(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), DateError> {
    Ok(JalaaliDate::new(year, month, day)?.to_gregorian()?.to_tuple())
}

/// Converts a Gregorian date to Jalaali.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input is not a valid Gregorian date.
pub fn to_jalaali(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), DateError> {
    Ok(GregorianDate::new(year, month, day)?.to_jalaali()?.to_tuple())
}

/// Day of the week, 0 = Saturday … 6 = Friday via [`Weekday::number`].
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input is not a valid date of `calendar`.
pub fn weekday(year: i32, month: u8, day: u8, calendar: Calendar) -> Result<Weekday, DateError> {
    with_calendar!(calendar, C => Ok(Date::<C>::new(year, month, day)?.weekday()))
}

/// Weekday, day-of-year and week-of-year, counting weeks from `week_start`.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input is not a valid date of `calendar`.
pub fn date_info(
    year: i32,
    month: u8,
    day: u8,
    calendar: Calendar,
    week_start: Weekday,
) -> Result<DateInfo, DateError> {
    let config = WeekConfig::new().with_week_start(week_start);
    with_calendar!(calendar, C => Ok(Date::<C>::new(year, month, day)?.info_with(&config)))
}

/// Adds (or, when negative, subtracts) `days`.
///
/// # Errors
/// Returns `DateError::InvalidDate` for invalid input and
/// `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
pub fn add_days(
    year: i32,
    month: u8,
    day: u8,
    days: i32,
    calendar: Calendar,
) -> Result<(i32, u8, u8), DateError> {
    with_calendar!(calendar, C => Ok(Date::<C>::new(year, month, day)?.add_days(days)?.to_tuple()))
}

/// Adds `months`, clamping the day to the target month's length.
///
/// # Errors
/// Returns `DateError::InvalidDate` for invalid input and
/// `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
pub fn add_months(
    year: i32,
    month: u8,
    day: u8,
    months: i32,
    calendar: Calendar,
) -> Result<(i32, u8, u8), DateError> {
    with_calendar!(calendar, C => Ok(Date::<C>::new(year, month, day)?.add_months(months)?.to_tuple()))
}

/// Adds `years`, clamping the day to the month's length in the target year.
///
/// # Errors
/// Returns `DateError::InvalidDate` for invalid input and
/// `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
pub fn add_years(
    year: i32,
    month: u8,
    day: u8,
    years: i32,
    calendar: Calendar,
) -> Result<(i32, u8, u8), DateError> {
    with_calendar!(calendar, C => Ok(Date::<C>::new(year, month, day)?.add_years(years)?.to_tuple()))
}

/// Signed day difference `a - b` between two dates of `calendar`.
///
/// # Errors
/// Returns `DateError::InvalidDate` if either input is not a valid date of `calendar`.
pub fn diff_days(a: (i32, u8, u8), b: (i32, u8, u8), calendar: Calendar) -> Result<i64, DateError> {
    with_calendar!(calendar, C => {
        let a = Date::<C>::try_from(a)?;
        let b = Date::<C>::try_from(b)?;
        Ok(a.diff_days(&b))
    })
}
