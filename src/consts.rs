/// Number of months in both calendars
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January / Farvardin
pub const FIRST_MONTH: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December / Esfand
pub const LAST_MONTH: u8 = 12;

/// Days in a common year, either calendar
pub const COMMON_YEAR_DAYS: u16 = 365;
/// Days in a leap year, either calendar
pub const LEAP_YEAR_DAYS: u16 = 366;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Farvardin through Shahrivar have 31 days
pub const JALAALI_LONG_MONTH_DAYS: u8 = 31;
/// Mehr through Bahman have 30 days, as does Esfand in a leap year
pub const JALAALI_SHORT_MONTH_DAYS: u8 = 30;
/// Esfand in a common year
pub const JALAALI_ESFAND_COMMON_DAYS: u8 = 29;
/// Last of the 31-day months (Shahrivar)
pub(crate) const JALAALI_LAST_LONG_MONTH: u8 = 6;
/// Days in the first half of the Jalaali year (6 * 31)
pub(crate) const JALAALI_FIRST_HALF_DAYS: u16 = 186;

/// Length of the Jalaali leap cycle in years
pub(crate) const JALAALI_CYCLE: i64 = 128;
/// Offset applied to a year before taking its cycle remainder
pub(crate) const JALAALI_CYCLE_OFFSET: i64 = 124;
/// Leap years in one full cycle
pub(crate) const JALAALI_LEAPS_PER_CYCLE: i64 = 31;
/// Years up to and including this one use the remainder remap below
pub(crate) const JALAALI_REMAP_LAST_YEAR: i64 = 473;

/// Cycle remainders denoting a Jalaali leap year
pub(crate) const JALAALI_LEAP_REMAINDERS: [u8; 31] = [
    0, 4, 8, 12, 16, 20, 24, 29, 33, 37, 41, 45, 49, 53, 57, 62, 66, 70, 74, 78, 82, 86, 90, 95,
    99, 103, 107, 111, 115, 119, 124,
];

/// Remainders that map to the one before them for years <= `JALAALI_REMAP_LAST_YEAR`
pub(crate) const JALAALI_REMAINDER_REMAP: [(u8, u8); 4] = [(25, 24), (51, 50), (98, 97), (120, 119)];

/// Jalaali year whose Nowruz anchors the closed-form March day
pub(crate) const NOWRUZ_ANCHOR_YEAR: i64 = 1399;
/// 1399-01-01 fell on 20 March 2020
pub(crate) const NOWRUZ_ANCHOR_MARCH_DAY: i64 = 20;
/// Gregorian year = Jalaali year + this, for the year holding Nowruz
pub const GREGORIAN_YEAR_OFFSET: i64 = 621;

/// Days in January, the only month fully before Nowruz besides February
pub(crate) const JANUARY_DAYS: u16 = 31;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: u16 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
