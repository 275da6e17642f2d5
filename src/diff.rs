//! Signed day differences between dates of the same calendar.

use crate::calendar::{CalendarSystem, Date};

impl<C: CalendarSystem> Date<C> {
    /// Days from `other` to `self`; positive when `self` is later.
    pub fn diff_days(&self, other: &Self) -> i64 {
        self.day_number() - other.day_number()
    }
}

#[cfg(test)]
mod tests {
    use crate::{GregorianDate, JalaaliDate};

    #[test]
    fn test_diff_across_nowruz() {
        let a = JalaaliDate::new(1404, 1, 1).unwrap();
        let b = JalaaliDate::new(1403, 12, 30).unwrap();
        assert_eq!(a.diff_days(&b), 1);
        assert_eq!(b.diff_days(&a), -1);
        assert_eq!(a.diff_days(&a), 0);
    }

    #[test]
    fn test_diff_within_year() {
        let a = JalaaliDate::new(1404, 6, 23).unwrap();
        let b = JalaaliDate::new(1404, 5, 23).unwrap();
        assert_eq!(a.diff_days(&b), 31);

        let a = GregorianDate::new(2025, 8, 23).unwrap();
        let b = GregorianDate::new(2025, 8, 22).unwrap();
        assert_eq!(a.diff_days(&b), 1);
    }

    #[test]
    fn test_diff_spans_leap_years() {
        let a = GregorianDate::new(2000, 1, 1).unwrap();
        let b = GregorianDate::new(1900, 1, 1).unwrap();
        assert_eq!(a.diff_days(&b), 36_524);

        let a = JalaaliDate::new(1528, 1, 1).unwrap();
        let b = JalaaliDate::new(1400, 1, 1).unwrap();
        // one full 128-year cycle holds 31 leap years
        assert_eq!(a.diff_days(&b), 128 * 365 + 31);
    }

    #[test]
    fn test_diff_agrees_across_calendars() {
        let j1 = JalaaliDate::new(1350, 4, 10).unwrap();
        let j2 = JalaaliDate::new(1420, 11, 3).unwrap();
        let g1 = j1.to_gregorian().unwrap();
        let g2 = j2.to_gregorian().unwrap();
        assert_eq!(j2.diff_days(&j1), g2.diff_days(&g1));
    }
}
