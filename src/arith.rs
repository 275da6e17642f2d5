//! Calendar-aware date arithmetic, identical in shape for both calendars.

use crate::calendar::{CalendarSystem, Date};
use crate::consts::MONTHS_PER_YEAR;
use crate::error::DateError;

impl<C: CalendarSystem> Date<C> {
    /// Moves the date by `days`, carrying into following months and years
    /// (or borrowing from preceding ones when negative).
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
    pub fn add_days(self, days: i32) -> Result<Self, DateError> {
        Self::from_day_number(self.day_number() + i64::from(days))
    }

    /// Moves the date by `months`; a day past the end of the target month is
    /// clamped to its last day, never carried into the next month.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        let per_year = i64::from(MONTHS_PER_YEAR);
        let total = i64::from(self.month() - 1) + i64::from(months);
        let year = i64::from(self.year()) + total.div_euclid(per_year);
        // rem_euclid keeps this in 0..12
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = total.rem_euclid(per_year) as u8 + 1;
        Self::clamped(year, month, self.day())
    }

    /// Moves the date by `years`, clamping the day to the month's length in
    /// the target year (30 Esfand or 29 February in a common year).
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
    pub fn add_years(self, years: i32) -> Result<Self, DateError> {
        Self::clamped(i64::from(self.year()) + i64::from(years), self.month(), self.day())
    }

    /// Subtracts `days`; same as `add_days(-days)`.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` if the result's year does not fit an `i32`.
    pub fn sub_days(self, days: i32) -> Result<Self, DateError> {
        Self::from_day_number(self.day_number() - i64::from(days))
    }

    fn clamped(year: i64, month: u8, day: u8) -> Result<Self, DateError> {
        let day = day.min(C::days_in_month(year, month));
        Self::from_valid_parts(year, month, day)
    }
}
