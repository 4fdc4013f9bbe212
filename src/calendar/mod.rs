//! Calendar arithmetic in the [proleptic gregorian calendar](https://en.wikipedia.org/wiki/Proleptic_Gregorian_calendar).
//!
//! Years are full years: year `0` is 1 BC, year `-1` is 2 BC, and so on.

mod month;

pub use month::{Month, Weekday};

use crate::constants::*;
use crate::error::datetime::DateTimeError;
use crate::timezone::LocalFields;

/// Calendar date in the proleptic gregorian calendar
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GregorianDate {
    /// Year
    pub year: i32,
    /// Month
    pub month: Month,
    /// Day of the month in `[1, 31]`
    pub day: u8,
}

impl GregorianDate {
    /// Construct a calendar date.
    ///
    /// The date is not validated here: an out of range day is rejected when the date is converted.
    ///
    pub const fn new(year: i32, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Check that the day exists in the month of the year
    pub fn validate(&self) -> Result<(), DateTimeError> {
        if (1..=days_in_month(self.year, self.month)).contains(&self.day) {
            Ok(())
        } else {
            Err(DateTimeError::InvalidMonthDay)
        }
    }
}

/// Check if a year is a leap year
#[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Returns the number of days in a year, `365` or `366`
#[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        DAYS_PER_LEAP_YEAR as u16
    } else {
        DAYS_PER_NORMAL_YEAR as u16
    }
}

/// Returns the number of days in a month of a year
#[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
pub fn days_in_month(year: i32, month: Month) -> u8 {
    let days = DAY_IN_MONTHS_NORMAL_YEAR[month as usize - 1] as u8;
    match month {
        Month::February if is_leap_year(year) => days + 1,
        _ => days,
    }
}

/// Compute the one-based ordinal day of the year in `[1, 366]`, without validating `month_day`
#[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
pub(crate) fn ordinal_day(is_leap_year: bool, month: Month, month_day: i64) -> i64 {
    let m = month as i64;

    let offset = if m <= 2 {
        0
    } else if is_leap_year {
        -1
    } else {
        -2
    };

    (367 * m - 362) / 12 + offset + month_day
}

/// Compute the number of days between `0001-01-01` and the ordinal day of a year
#[cfg_attr(feature = "const", const_fn::const_fn("1.61"))]
pub(crate) fn days_from_origin(year: i32, ordinal_day: i64) -> i64 {
    let previous_year = year as i64 - 1;

    ordinal_day + DAYS_PER_NORMAL_YEAR * previous_year + previous_year.div_euclid(4) - previous_year.div_euclid(100) + previous_year.div_euclid(400) - 1
}

/// Compute the validated number of days between `0001-01-01` and a calendar date
pub(crate) fn checked_days_from_origin(date: GregorianDate) -> Result<i64, DateTimeError> {
    date.validate()?;

    let leap = is_leap_year(date.year);
    let ordinal_day = ordinal_day(leap, date.month, date.day.into());

    if !(1..=i64::from(days_in_year(date.year))).contains(&ordinal_day) {
        return Err(DateTimeError::InvalidMonthDay);
    }

    Ok(days_from_origin(date.year, ordinal_day))
}

/// Compute the number of days since January 1 in `[0, 365]`.
///
/// Fails with [`DateTimeError::InvalidMonthDay`] if the day does not exist in the month of the year.
///
pub fn year_day(year: i32, month: Month, month_day: u8) -> Result<u16, DateTimeError> {
    GregorianDate::new(year, month, month_day).validate()?;
    Ok(unchecked_year_day(year, month, month_day))
}

/// Compute the number of days since January 1, for a day of the month already known to be valid
pub(crate) fn unchecked_year_day(year: i32, month: Month, month_day: u8) -> u16 {
    let leap = (month > Month::February && is_leap_year(year)) as i64;
    (CUMUL_DAY_IN_MONTHS_NORMAL_YEAR[month.index()] + leap + month_day as i64 - 1) as u16
}

/// Compute the number of days since Unix epoch (`1970-01-01T00:00:00Z`).
///
/// Fails with [`DateTimeError::InvalidMonthDay`] if the day does not exist in the month of the year.
///
pub fn days_since_unix_epoch(year: i32, month: Month, month_day: u8) -> Result<i64, DateTimeError> {
    let days_from_origin = checked_days_from_origin(GregorianDate::new(year, month, month_day))?;
    Ok(days_from_origin + EPOCH_OFFSET_MILLIS / MILLIS_PER_DAY)
}

/// Split a local time in milliseconds since `1970-01-01T00:00:00` into calendar and clock fields.
///
/// Days are counted from `2000-03-01`, so that leap days fall at the end of the 400, 100 and 4 year cycles.
///
pub(crate) fn local_fields(local_millis: i128) -> LocalFields {
    // The quotient of an `i64` time shifted by an `i32` offset in seconds always fits an `i64`
    let days_since_unix_epoch = local_millis.div_euclid(MILLIS_PER_DAY.into()) as i64;
    let millis_of_day = local_millis.rem_euclid(MILLIS_PER_DAY.into()) as i64;

    let week_day = Weekday::ALL[(4 + days_since_unix_epoch).rem_euclid(DAYS_PER_WEEK) as usize];

    let mut remaining_days = days_since_unix_epoch - DAYS_TO_2000_03_01;

    let cycles_400_years = remaining_days.div_euclid(DAYS_PER_400_YEARS);
    remaining_days = remaining_days.rem_euclid(DAYS_PER_400_YEARS);

    let cycles_100_years = (remaining_days / DAYS_PER_100_YEARS).min(3);
    remaining_days -= cycles_100_years * DAYS_PER_100_YEARS;

    let cycles_4_years = (remaining_days / DAYS_PER_4_YEARS).min(24);
    remaining_days -= cycles_4_years * DAYS_PER_4_YEARS;

    let remaining_years = (remaining_days / DAYS_PER_NORMAL_YEAR).min(3);
    remaining_days -= remaining_years * DAYS_PER_NORMAL_YEAR;

    let mut year = OFFSET_YEAR + remaining_years + cycles_4_years * 4 + cycles_100_years * 100 + cycles_400_years * 400;

    let mut month = 2;
    for days in DAY_IN_MONTHS_LEAP_YEAR_FROM_MARCH {
        if remaining_days < days {
            break;
        }
        remaining_days -= days;
        month += 1;
    }

    if month >= MONTHS_PER_YEAR {
        month -= MONTHS_PER_YEAR;
        year += 1;
    }

    LocalFields {
        // Years of an `i64` millisecond count stay within 300 million
        year: year as i32,
        month: Month::ALL[month as usize],
        day: (remaining_days + 1) as u8,
        week_day,
        hour: (millis_of_day / MILLIS_PER_HOUR) as u8,
        minute: (millis_of_day % MILLIS_PER_HOUR / MILLIS_PER_MINUTE) as u8,
        second: (millis_of_day % MILLIS_PER_MINUTE / MILLIS_PER_SECOND) as u8,
        millis: (millis_of_day % MILLIS_PER_SECOND) as u16,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Result;

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2400));

        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    #[test]
    fn test_days_in_year_and_month() {
        assert_eq!(days_in_year(1999), 365);
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(-4), 366);

        assert_eq!(days_in_month(1999, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29);
        assert_eq!(days_in_month(1900, Month::February), 28);

        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, days) in Month::ALL.into_iter().zip(expected) {
            assert_eq!(days_in_month(2023, month), days);
        }

        let total: u16 = Month::ALL.into_iter().map(|month| u16::from(days_in_month(2024, month))).sum();
        assert_eq!(total, days_in_year(2024));
    }

    #[test]
    fn test_ordinal_day() {
        assert_eq!(ordinal_day(false, Month::January, 1), 1);
        assert_eq!(ordinal_day(false, Month::February, 28), 59);
        assert_eq!(ordinal_day(true, Month::February, 29), 60);
        assert_eq!(ordinal_day(false, Month::March, 1), 60);
        assert_eq!(ordinal_day(true, Month::March, 1), 61);
        assert_eq!(ordinal_day(false, Month::December, 31), 365);
        assert_eq!(ordinal_day(true, Month::December, 31), 366);

        for leap in [false, true] {
            let year = if leap { 2024 } else { 2023 };
            for month in Month::ALL {
                let expected = i64::from(unchecked_year_day(year, month, 1)) + 1;
                assert_eq!(ordinal_day(leap, month, 1), expected);
            }
        }
    }

    #[test]
    fn test_checked_days_from_origin() {
        assert_eq!(checked_days_from_origin(GregorianDate::new(1, Month::January, 1)), Ok(0));
        assert_eq!(checked_days_from_origin(GregorianDate::new(0, Month::January, 1)), Ok(-366));
        assert_eq!(checked_days_from_origin(GregorianDate::new(1970, Month::January, 1)), Ok(719162));

        assert_eq!(checked_days_from_origin(GregorianDate::new(1999, Month::February, 29)), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(checked_days_from_origin(GregorianDate::new(2000, Month::January, 0)), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(checked_days_from_origin(GregorianDate::new(2000, Month::April, 31)), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(checked_days_from_origin(GregorianDate::new(2000, Month::January, 32)), Err(DateTimeError::InvalidMonthDay));
        assert!(checked_days_from_origin(GregorianDate::new(2000, Month::February, 29)).is_ok());
    }

    #[test]
    fn test_year_day() -> Result<()> {
        assert_eq!(year_day(2000, Month::January, 1)?, 0);
        assert_eq!(year_day(2000, Month::February, 28)?, 58);
        assert_eq!(year_day(2000, Month::February, 29)?, 59);
        assert_eq!(year_day(2000, Month::March, 1)?, 60);
        assert_eq!(year_day(2000, Month::December, 31)?, 365);

        assert_eq!(year_day(2001, Month::January, 1)?, 0);
        assert_eq!(year_day(2001, Month::February, 28)?, 58);
        assert_eq!(year_day(2001, Month::March, 1)?, 59);
        assert_eq!(year_day(2001, Month::December, 31)?, 364);

        assert_eq!(year_day(2001, Month::January, 0), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(year_day(2001, Month::February, 29), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(year_day(2001, Month::April, 31), Err(DateTimeError::InvalidMonthDay));

        Ok(())
    }

    #[test]
    fn test_days_since_unix_epoch() -> Result<()> {
        assert_eq!(days_since_unix_epoch(1970, Month::January, 1)?, 0);
        assert_eq!(days_since_unix_epoch(1969, Month::December, 31)?, -1);

        assert_eq!(days_since_unix_epoch(-1001, Month::March, 1)?, -1085076);
        assert_eq!(days_since_unix_epoch(1600, Month::February, 29)?, -135081);
        assert_eq!(days_since_unix_epoch(1600, Month::March, 1)?, -135080);
        assert_eq!(days_since_unix_epoch(1700, Month::March, 1)?, -98556);
        assert_eq!(days_since_unix_epoch(1701, Month::March, 1)?, -98191);
        assert_eq!(days_since_unix_epoch(1704, Month::February, 29)?, -97096);
        assert_eq!(days_since_unix_epoch(2000, Month::February, 29)?, 11016);
        assert_eq!(days_since_unix_epoch(2000, Month::March, 1)?, 11017);
        assert_eq!(days_since_unix_epoch(2001, Month::March, 1)?, 11382);
        assert_eq!(days_since_unix_epoch(2004, Month::February, 29)?, 12477);
        assert_eq!(days_since_unix_epoch(2100, Month::March, 1)?, 47541);
        assert_eq!(days_since_unix_epoch(3001, Month::March, 1)?, 376624);

        assert_eq!(days_since_unix_epoch(1970, Month::January, 0), Err(DateTimeError::InvalidMonthDay));
        assert_eq!(days_since_unix_epoch(1900, Month::February, 29), Err(DateTimeError::InvalidMonthDay));

        Ok(())
    }

    #[test]
    fn test_local_fields() -> Result<()> {
        let unix_times = [
            -93750523200,
            -11670955200,
            -11670868800,
            -8515195200,
            -8483659200,
            -8389051200,
            -8388964800,
            951825600,
            951912000,
            983448000,
            1078056000,
            1078142400,
            4107585600,
            32540356800,
        ];

        let dates = [
            (-1001, Month::March, 1),
            (1600, Month::February, 29),
            (1600, Month::March, 1),
            (1700, Month::March, 1),
            (1701, Month::March, 1),
            (1704, Month::February, 29),
            (1704, Month::March, 1),
            (2000, Month::February, 29),
            (2000, Month::March, 1),
            (2001, Month::March, 1),
            (2004, Month::February, 29),
            (2004, Month::March, 1),
            (2100, Month::March, 1),
            (3001, Month::March, 1),
        ];

        for (unix_time, (year, month, day)) in unix_times.into_iter().zip(dates) {
            let fields = local_fields(i128::from(unix_time) * 1000);

            assert_eq!((fields.year, fields.month, fields.day), (year, month, day));
            assert_eq!((fields.hour, fields.minute, fields.second, fields.millis), (12, 0, 0, 0));
            assert_eq!(days_since_unix_epoch(year, month, day)? * 86400 + 43200, unix_time);
        }

        Ok(())
    }

    #[test]
    fn test_local_fields_week_day() -> Result<()> {
        let week_day = |year, month, day| -> Result<Weekday> { Ok(local_fields(i128::from(days_since_unix_epoch(year, month, day)?) * i128::from(MILLIS_PER_DAY)).week_day) };

        assert_eq!(week_day(1970, Month::January, 1)?, Weekday::Thursday);

        assert_eq!(week_day(2000, Month::January, 1)?, Weekday::Saturday);
        assert_eq!(week_day(2000, Month::February, 28)?, Weekday::Monday);
        assert_eq!(week_day(2000, Month::February, 29)?, Weekday::Tuesday);
        assert_eq!(week_day(2000, Month::March, 1)?, Weekday::Wednesday);
        assert_eq!(week_day(2000, Month::December, 31)?, Weekday::Sunday);

        assert_eq!(week_day(2001, Month::January, 1)?, Weekday::Monday);
        assert_eq!(week_day(2001, Month::February, 28)?, Weekday::Wednesday);
        assert_eq!(week_day(2001, Month::March, 1)?, Weekday::Thursday);
        assert_eq!(week_day(2001, Month::December, 31)?, Weekday::Monday);

        Ok(())
    }

    #[test]
    fn test_local_fields_before_epoch() {
        let fields = local_fields(-1);
        assert_eq!((fields.year, fields.month, fields.day), (1969, Month::December, 31));
        assert_eq!((fields.hour, fields.minute, fields.second, fields.millis), (23, 59, 59, 999));
        assert_eq!(fields.week_day, Weekday::Wednesday);

        let fields = local_fields(i128::from(EPOCH_OFFSET_MILLIS) - 1);
        assert_eq!((fields.year, fields.month, fields.day), (0, Month::December, 31));
    }

    #[test]
    fn test_local_fields_extremes() {
        let max = local_fields(i64::MAX.into());
        assert_eq!((max.year, max.month, max.day), (292278994, Month::August, 17));

        let min = local_fields(i64::MIN.into());
        assert_eq!((min.year, min.month, min.day), (-292275055, Month::May, 16));
    }
}
