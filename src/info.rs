//! Weekday, day-of-year and week-of-year for a date.

use serde::{Deserialize, Serialize};

use crate::consts::DAYS_PER_WEEK;
use crate::weekday::Weekday;

/// Derived facts about a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateInfo {
    pub weekday: Weekday,
    /// 1-based, up to 366.
    pub day_of_year: u16,
    /// 1-based.
    pub week_of_year: u16,
}

/// Configuration for week numbering.
///
/// # Example
///
/// ```
/// use jalcal::{WeekConfig, Weekday};
///
/// let config = WeekConfig::new().with_week_start(Weekday::Saturday);
/// assert_eq!(config.week_start(), Weekday::Saturday);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekConfig {
    /// Weekday treated as the first day of a week.
    week_start: Weekday,
}

impl WeekConfig {
    /// Creates a configuration with the default week start (weekday 6, Friday).
    pub const fn new() -> Self {
        Self {
            week_start: Weekday::Friday,
        }
    }

    /// Sets the weekday a week starts on.
    #[must_use]
    pub const fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Week number of a day, given its ordinal and weekday.
///
/// The day's own distance from `week_start` shifts the ordinal before
/// dividing into weeks.
pub fn week_of_year(day_of_year: u16, weekday: Weekday, week_start: Weekday) -> u16 {
    let offset = (u16::from(weekday.number()) + DAYS_PER_WEEK - u16::from(week_start.number()))
        % DAYS_PER_WEEK;
    (day_of_year + offset - 1) / DAYS_PER_WEEK + 1
}

impl DateInfo {
    pub(crate) fn compose(weekday: Weekday, day_of_year: u16, config: &WeekConfig) -> Self {
        Self {
            weekday,
            day_of_year,
            week_of_year: week_of_year(day_of_year, weekday, config.week_start),
        }
    }
}
