//! Error types for the jalcal crate.

use tracing::debug;

use crate::calendar::Calendar;

/// Error type for all fallible operations in the jalcal crate.
///
/// Every variant is a caller input error; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside 1..=12, or day outside 1..=days-in-month for the calendar.
    #[error("invalid {calendar} date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        calendar: Calendar,
        year: i32,
        month: u8,
        day: u8,
    },

    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day-of-year of 0, or past the end of the year.
    #[error("invalid {calendar} day of year {ordinal} for year {year}")]
    InvalidOrdinal {
        calendar: Calendar,
        year: i32,
        ordinal: u16,
    },

    /// An arithmetic result left the representable year range.
    #[error("year out of range: {0}")]
    YearOutOfRange(i64),

    #[error("invalid date format: {0}")]
    InvalidFormat(String),

    #[error("empty date string")]
    EmptyInput,
}

/// Narrows a computed year to the `i32` years dates carry.
pub(crate) fn checked_year(year: i64) -> Result<i32, DateError> {
    i32::try_from(year).map_err(|_| {
        debug!(year, "year out of range");
        DateError::YearOutOfRange(year)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let err = DateError::InvalidDate {
            calendar: Calendar::Jalaali,
            year: 1404,
            month: 12,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid jalaali date: 1404-12-30");
    }

    #[test]
    fn test_year_out_of_range_display() {
        let err = DateError::YearOutOfRange(3_000_000_000);
        assert_eq!(err.to_string(), "year out of range: 3000000000");
    }

    #[test]
    fn test_checked_year() {
        assert_eq!(checked_year(1404), Ok(1404));
        assert_eq!(
            checked_year(i64::from(i32::MAX) + 1),
            Err(DateError::YearOutOfRange(2_147_483_648))
        );
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DateError>();
    }
}
