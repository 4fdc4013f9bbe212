//! Some useful constants.

/// Number of milliseconds in one second
pub const MILLIS_PER_SECOND: i64 = 1_000;
/// Number of milliseconds in one minute
pub const MILLIS_PER_MINUTE: i64 = 60_000;
/// Number of milliseconds in one hour
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
/// Number of milliseconds in one day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Number of days in one week
pub const DAYS_PER_WEEK: i64 = 7;
/// Number of months in one year
pub const MONTHS_PER_YEAR: i64 = 12;
/// Number of days in a normal year
pub const DAYS_PER_NORMAL_YEAR: i64 = 365;
/// Number of days in a leap year
pub const DAYS_PER_LEAP_YEAR: i64 = 366;
/// Number of days in 4 years (including 1 leap year)
pub const DAYS_PER_4_YEARS: i64 = DAYS_PER_NORMAL_YEAR * 4 + 1;
/// Number of days in 100 years (including 24 leap years)
pub const DAYS_PER_100_YEARS: i64 = DAYS_PER_NORMAL_YEAR * 100 + 24;
/// Number of days in 400 years (including 97 leap years)
pub const DAYS_PER_400_YEARS: i64 = DAYS_PER_NORMAL_YEAR * 400 + 97;

/// Month days in a normal year
pub const DAY_IN_MONTHS_NORMAL_YEAR: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
/// Cumulated month days in a normal year
pub const CUMUL_DAY_IN_MONTHS_NORMAL_YEAR: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Unix time in milliseconds at `0001-01-01T00:00:00Z`, the origin of the day count
pub const EPOCH_OFFSET_MILLIS: i64 = -62_135_596_800_000;
/// Number of days between `1970-01-01` and `2000-03-01`
pub const DAYS_TO_2000_03_01: i64 = 11017;
/// Year of the `2000-03-01` reference date
pub const OFFSET_YEAR: i64 = 2000;
/// Month days in a leap year from March
pub const DAY_IN_MONTHS_LEAP_YEAR_FROM_MARCH: [i64; 12] = [31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 29];

/// Largest absolute offset from UTC in seconds (`25:59:59`)
pub const MAX_UT_OFFSET_SECONDS: i32 = 93_599;
