use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{DATE_SEPARATOR, FIRST_MONTH, LAST_MONTH, MIN_DAY};
use crate::error::{DateError, checked_year};
use crate::info::{DateInfo, WeekConfig};
use crate::prelude::*;
use crate::weekday::{self, Weekday};
use crate::{convert, gregorian, jalaali, leap};

/// Runtime tag naming one of the supported calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[display(fmt = "jalaali")]
    Jalaali,
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl FromStr for Calendar {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jalaali" | "jalali" => Ok(Self::Jalaali),
            "gregorian" => Ok(Self::Gregorian),
            "" => Err(DateError::EmptyInput),
            _ => Err(DateError::InvalidFormat(format!("unknown calendar: {s}"))),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Calendar rules a [`Date`] is parameterized by.
///
/// Implemented only by [`Jalaali`] and [`Gregorian`]. Years are `i64` here so
/// intermediate results of conversions and arithmetic never overflow.
pub trait CalendarSystem:
    sealed::Sealed + fmt::Debug + Clone + Copy + Default + Eq + Ord + Hash + Send + Sync + 'static
{
    const CALENDAR: Calendar;

    fn is_leap_year(year: i64) -> bool;

    /// `month` must be in 1..=12.
    fn days_in_month(year: i64, month: u8) -> u8;

    fn day_of_year(year: i64, month: u8, day: u8) -> u16;

    /// Inverse of [`CalendarSystem::day_of_year`].
    fn month_day_from_ordinal(year: i64, ordinal: u16) -> (u8, u8);

    /// Days in years 1 up to, but excluding, `year`; negative before year 1.
    fn days_before_year(year: i64) -> i64;

    fn weekday(year: i64, month: u8, day: u8) -> Weekday;

    fn days_in_year(year: i64) -> u16;
}

/// Marker for the Jalaali (Solar Hijri) calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Jalaali;

/// Marker for the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gregorian;

impl sealed::Sealed for Jalaali {}
impl sealed::Sealed for Gregorian {}

impl CalendarSystem for Jalaali {
    const CALENDAR: Calendar = Calendar::Jalaali;

    fn is_leap_year(year: i64) -> bool {
        leap::is_jalaali_leap(year)
    }

    fn days_in_month(year: i64, month: u8) -> u8 {
        jalaali::days_in_month(year, month)
    }

    fn day_of_year(_year: i64, month: u8, day: u8) -> u16 {
        jalaali::day_of_year(month, day)
    }

    fn month_day_from_ordinal(_year: i64, ordinal: u16) -> (u8, u8) {
        jalaali::month_day_from_ordinal(ordinal)
    }

    fn days_before_year(year: i64) -> i64 {
        jalaali::days_before_year(year)
    }

    fn weekday(year: i64, month: u8, day: u8) -> Weekday {
        weekday::jalaali_weekday(year, month, day)
    }

    fn days_in_year(year: i64) -> u16 {
        jalaali::days_in_year(year)
    }
}

impl CalendarSystem for Gregorian {
    const CALENDAR: Calendar = Calendar::Gregorian;

    fn is_leap_year(year: i64) -> bool {
        gregorian::is_gregorian_leap(year)
    }

    fn days_in_month(year: i64, month: u8) -> u8 {
        gregorian::days_in_month(year, month)
    }

    fn day_of_year(year: i64, month: u8, day: u8) -> u16 {
        gregorian::day_of_year(year, month, day)
    }

    fn month_day_from_ordinal(year: i64, ordinal: u16) -> (u8, u8) {
        gregorian::month_day_from_ordinal(year, ordinal)
    }

    fn days_before_year(year: i64) -> i64 {
        gregorian::days_before_year(year)
    }

    fn weekday(year: i64, month: u8, day: u8) -> Weekday {
        weekday::gregorian_weekday(year, month, day)
    }

    fn days_in_year(year: i64) -> u16 {
        gregorian::days_in_year(year)
    }
}

/// A valid calendar date, tagged with the calendar it belongs to.
///
/// Month is always in 1..=12 and day within that month's length, so a
/// `Date<Jalaali>` can never be handed to code expecting a
/// `Date<Gregorian>`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C> {
    year: i32,
    month: u8,
    day: u8,
    calendar: PhantomData<C>,
}

/// Room left for estimation error before `from_day_number` gives up early.
const YEAR_ESTIMATE_SLACK: u64 = 10_000;

pub type JalaaliDate = Date<Jalaali>;
pub type GregorianDate = Date<Gregorian>;

impl<C: CalendarSystem> Date<C> {
    /// Creates a date, validating month and day for the calendar.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month is outside 1..=12 or the
    /// day is outside 1..=days-in-month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let valid = (FIRST_MONTH..=LAST_MONTH).contains(&month)
            && day >= MIN_DAY
            && day <= C::days_in_month(i64::from(year), month);
        if !valid {
            debug!(calendar = %C::CALENDAR, year, month, day, "rejected invalid date");
            return Err(DateError::InvalidDate {
                calendar: C::CALENDAR,
                year,
                month,
                day,
            });
        }
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    /// Creates a date from a 1-based day-of-year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if `ordinal` is 0 or exceeds the
    /// length of `year`.
    pub fn from_ordinal(year: i32, ordinal: u16) -> Result<Self, DateError> {
        if ordinal == 0 || ordinal > C::days_in_year(i64::from(year)) {
            debug!(calendar = %C::CALENDAR, year, ordinal, "rejected invalid ordinal");
            return Err(DateError::InvalidOrdinal {
                calendar: C::CALENDAR,
                year,
                ordinal,
            });
        }
        let (month, day) = C::month_day_from_ordinal(i64::from(year), ordinal);
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            calendar: PhantomData,
        }
    }

    /// Wraps already-valid parts whose year may not fit an `i32`.
    pub(crate) fn from_valid_parts(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self::from_parts_unchecked(checked_year(year)?, month, day))
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn calendar(&self) -> Calendar {
        C::CALENDAR
    }

    /// Returns `(year, month, day)`.
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(i64::from(self.year))
    }

    pub fn days_in_month(&self) -> u8 {
        C::days_in_month(i64::from(self.year), self.month)
    }

    pub fn days_in_year(&self) -> u16 {
        C::days_in_year(i64::from(self.year))
    }

    /// 1-based ordinal within the year.
    pub fn day_of_year(&self) -> u16 {
        C::day_of_year(i64::from(self.year), self.month, self.day)
    }

    pub fn weekday(&self) -> Weekday {
        C::weekday(i64::from(self.year), self.month, self.day)
    }

    /// Weekday, day-of-year and week-of-year with the default week start.
    pub fn info(&self) -> DateInfo {
        self.info_with(&WeekConfig::default())
    }

    pub fn info_with(&self, config: &WeekConfig) -> DateInfo {
        DateInfo::compose(self.weekday(), self.day_of_year(), config)
    }

    /// Days since the start of year 1 in this calendar; 1 is its first day.
    pub fn day_number(&self) -> i64 {
        C::days_before_year(i64::from(self.year)) + i64::from(self.day_of_year())
    }

    /// Inverse of [`Date::day_number`].
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the year does not fit an `i32`.
    pub fn from_day_number(day_number: i64) -> Result<Self, DateError> {
        // 146097 days per 400 Gregorian years; the Jalaali year drifts from
        // this by about a day every 3200 years
        let mut year = day_number.saturating_sub(1).saturating_mul(400).div_euclid(146_097) + 1;
        if year.unsigned_abs() > u64::from(i32::MAX.unsigned_abs()) + YEAR_ESTIMATE_SLACK {
            return Err(DateError::YearOutOfRange(year));
        }
        while C::days_before_year(year) >= day_number {
            year -= 1;
        }
        while C::days_before_year(year + 1) < day_number {
            year += 1;
        }
        // within 1..=366 after the search
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ordinal = (day_number - C::days_before_year(year)) as u16;
        let (month, day) = C::month_day_from_ordinal(year, ordinal);
        Self::from_valid_parts(year, month, day)
    }
}

impl Date<Jalaali> {
    /// Converts to the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` only for years near the `i32` limits.
    pub fn to_gregorian(&self) -> Result<Date<Gregorian>, DateError> {
        let (gy, gm, gd) = convert::jalaali_to_gregorian(i64::from(self.year), self.month, self.day);
        Date::from_valid_parts(gy, gm, gd)
    }
}

impl Date<Gregorian> {
    /// Converts to the Jalaali calendar.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` only for years near the `i32` limits.
    pub fn to_jalaali(&self) -> Result<Date<Jalaali>, DateError> {
        let (jy, jm, jd) = convert::gregorian_to_jalaali(i64::from(self.year), self.month, self.day);
        Date::from_valid_parts(jy, jm, jd)
    }
}

impl TryFrom<Date<Jalaali>> for Date<Gregorian> {
    type Error = DateError;

    fn try_from(date: Date<Jalaali>) -> Result<Self, Self::Error> {
        date.to_gregorian()
    }
}

impl TryFrom<Date<Gregorian>> for Date<Jalaali> {
    type Error = DateError;

    fn try_from(date: Date<Gregorian>) -> Result<Self, Self::Error> {
        date.to_jalaali()
    }
}

impl<C: CalendarSystem> TryFrom<(i32, u8, u8)> for Date<C> {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl<C> From<Date<C>> for (i32, u8, u8) {
    fn from(date: Date<C>) -> Self {
        (date.year, date.month, date.day)
    }
}

impl<C> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl<C: CalendarSystem> Date<C> {
    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl<C: CalendarSystem> FromStr for Date<C> {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`; a leading `-` marks a negative year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed}"
            )));
        };

        let year: i64 = Self::parse_component(year)?;
        let year = checked_year(if negative { -year } else { year })?;
        let month: u8 = Self::parse_component(month)?;
        let day: u8 = Self::parse_component(day)?;

        Self::new(year, month, day)
    }
}

impl<C> Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, C: CalendarSystem> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
