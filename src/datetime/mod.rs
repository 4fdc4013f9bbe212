//! Types related to a date time.

mod posix;

pub use posix::Posix;

use crate::calendar::{self, GregorianDate, Month, Weekday};
use crate::clock::{Clock, SystemClock};
use crate::constants::*;
use crate::error::datetime::DateTimeError;
use crate::timezone::{LocalFields, TimeZone, Utc};

use std::cmp::Ordering;

/// Absolute instant paired with a time zone.
///
/// The instant is the source of truth: calendar and clock fields are computed on every call by asking the time zone
/// for the local fields at the instant, so no operation can corrupt the instant through a field round trip.
///
/// Arithmetic operations return a new value, and never change the time zone.
///
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ZonedTime<Z = Utc> {
    /// Time zone
    zone: Z,
    /// Absolute instant
    posix: Posix,
}

impl<Z> ZonedTime<Z> {
    /// Construct a zoned time from a time zone and an absolute instant
    pub const fn from_posix(zone: Z, posix: Posix) -> Self {
        Self { zone, posix }
    }

    /// Returns the current zoned time, reading the instant and the local time zone from a clock.
    ///
    /// The clock is sampled on each call.
    ///
    pub fn now_with<C: Clock<Zone = Z>>(clock: &C) -> Self {
        Self::from_posix(clock.local_zone(), clock.now())
    }

    /// Returns the absolute instant
    pub fn to_posix(&self) -> Posix {
        self.posix
    }

    /// Returns the time zone
    pub fn to_zone(&self) -> &Z {
        &self.zone
    }

    /// Consume the zoned time, returning its time zone
    pub fn into_zone(self) -> Z {
        self.zone
    }

    /// Replace the time zone, keeping the absolute instant unchanged.
    ///
    /// Local fields of the result are those observed from the new time zone at the same instant.
    ///
    pub fn overwrite_zone<Y>(self, zone: Y) -> ZonedTime<Y> {
        ZonedTime { zone, posix: self.posix }
    }

    /// Apply a transformation to the absolute instant, keeping the time zone unchanged
    pub fn map_posix<F: FnOnce(Posix) -> Posix>(self, f: F) -> Self {
        Self { posix: f(self.posix), zone: self.zone }
    }

    /// Compare the absolute instants of two zoned times, whatever their time zones
    pub fn cmp_instant<Y>(&self, other: &ZonedTime<Y>) -> Ordering {
        self.posix.cmp(&other.posix)
    }

    /// Add a number of units of the specified length in milliseconds, returning `None` on overflow
    fn checked_add_units(self, count: i64, unit_millis: i64) -> Option<Self> {
        let posix = self.posix.checked_add_millis(count.checked_mul(unit_millis)?)?;
        Some(self.map_posix(|_| posix))
    }

    /// Add a number of units of the specified length in milliseconds, panicking on overflow
    fn add_units(self, count: i64, unit_millis: i64, unit: &str) -> Self {
        let posix = self.posix;
        match self.checked_add_units(count, unit_millis) {
            Some(zoned_time) => zoned_time,
            None => panic!("overflow when adding {count} {unit} to Unix time {} ms", posix.millis()),
        }
    }
}

/// Macro for implementing arithmetic operations
macro_rules! impl_arithmetic {
    ($(($add:ident, $checked_add:ident, $unit_millis:expr, $unit:literal)),* $(,)?) => {
        impl<Z> ZonedTime<Z> {
            $(
                #[doc = concat!("Add ", $unit, ", which may be negative.")]
                ///
                /// # Panics
                ///
                /// Panics if the resulting instant overflows the `i64` millisecond range.
                /// Use the checked variant to handle this case.
                ///
                pub fn $add(self, count: i64) -> Self {
                    self.add_units(count, $unit_millis, $unit)
                }

                #[doc = concat!("Add ", $unit, ", which may be negative, returning `None` on overflow")]
                pub fn $checked_add(self, count: i64) -> Option<Self> {
                    self.checked_add_units(count, $unit_millis)
                }
            )*
        }
    };
}

impl_arithmetic!(
    (add_days, checked_add_days, MILLIS_PER_DAY, "days"),
    (add_hours, checked_add_hours, MILLIS_PER_HOUR, "hours"),
    (add_minutes, checked_add_minutes, MILLIS_PER_MINUTE, "minutes"),
    (add_seconds, checked_add_seconds, MILLIS_PER_SECOND, "seconds"),
    (add_millis, checked_add_millis, 1, "milliseconds"),
);

impl<Z: TimeZone> ZonedTime<Z> {
    /// Returns all local fields observed from the time zone at the instant
    pub fn local_fields(&self) -> LocalFields {
        self.zone.local_fields(self.posix)
    }

    /// Returns year
    pub fn year(&self) -> i32 {
        self.local_fields().year
    }

    /// Returns month
    pub fn month(&self) -> Month {
        self.local_fields().month
    }

    /// Returns day of the month in `[1, 31]`
    pub fn day(&self) -> u8 {
        self.local_fields().day
    }

    /// Returns day of the week
    pub fn week_day(&self) -> Weekday {
        self.local_fields().week_day
    }

    /// Returns hours since midnight in `[0, 23]`
    pub fn hour(&self) -> u8 {
        self.local_fields().hour
    }

    /// Returns minutes in `[0, 59]`
    pub fn minute(&self) -> u8 {
        self.local_fields().minute
    }

    /// Returns seconds in `[0, 59]`
    pub fn second(&self) -> u8 {
        self.local_fields().second
    }

    /// Returns milliseconds in `[0, 999]`
    pub fn millis(&self) -> u16 {
        self.local_fields().millis
    }

    /// Returns days since January 1 in `[0, 365]`
    pub fn year_day(&self) -> u16 {
        let LocalFields { year, month, day, .. } = self.local_fields();
        calendar::unchecked_year_day(year, month, day)
    }

    /// Subtract the current local hours.
    ///
    /// # Panics
    ///
    /// Panics if the resulting instant overflows the `i64` millisecond range, which can only happen within a day of
    /// [`Posix::MIN`]. Use [`checked_reset_hour`](Self::checked_reset_hour) to handle this case.
    ///
    pub fn reset_hour(self) -> Self {
        let hour = self.hour();
        self.add_hours(-i64::from(hour))
    }

    /// Subtract the current local hours, returning `None` on overflow
    pub fn checked_reset_hour(self) -> Option<Self> {
        let hour = self.hour();
        self.checked_add_hours(-i64::from(hour))
    }

    /// Subtract the current local minutes.
    ///
    /// # Panics
    ///
    /// Panics if the resulting instant overflows the `i64` millisecond range.
    ///
    pub fn reset_minute(self) -> Self {
        let minute = self.minute();
        self.add_minutes(-i64::from(minute))
    }

    /// Subtract the current local minutes, returning `None` on overflow
    pub fn checked_reset_minute(self) -> Option<Self> {
        let minute = self.minute();
        self.checked_add_minutes(-i64::from(minute))
    }

    /// Subtract the current local seconds.
    ///
    /// # Panics
    ///
    /// Panics if the resulting instant overflows the `i64` millisecond range.
    ///
    pub fn reset_second(self) -> Self {
        let second = self.second();
        self.add_seconds(-i64::from(second))
    }

    /// Subtract the current local seconds, returning `None` on overflow
    pub fn checked_reset_second(self) -> Option<Self> {
        let second = self.second();
        self.checked_add_seconds(-i64::from(second))
    }

    /// Subtract the current local milliseconds.
    ///
    /// # Panics
    ///
    /// Panics if the resulting instant overflows the `i64` millisecond range.
    ///
    pub fn reset_millis(self) -> Self {
        let millis = self.millis();
        self.add_millis(-i64::from(millis))
    }

    /// Subtract the current local milliseconds, returning `None` on overflow
    pub fn checked_reset_millis(self) -> Option<Self> {
        let millis = self.millis();
        self.checked_add_millis(-i64::from(millis))
    }

    /// Move back to the start of the local day.
    ///
    /// The local hours, minutes, seconds and milliseconds are all read at the original instant, and subtracted at once.
    ///
    /// The local fields of the result are exactly zero unless the UTC offset of the time zone changes between the
    /// original instant and the start of the day, for example when Daylight Saving Time begins during the night.
    /// In that case the result is still the original instant minus the elapsed local time of day, its local time is
    /// not midnight, and calling this method again moves back further instead of returning the same instant.
    ///
    /// # Panics
    ///
    /// Panics if the resulting instant overflows the `i64` millisecond range, which can only happen within a day of
    /// [`Posix::MIN`]. Use [`checked_set_to_midnight`](Self::checked_set_to_midnight) to handle this case.
    ///
    pub fn set_to_midnight(self) -> Self {
        let elapsed = self.elapsed_of_day();
        self.add_millis(-elapsed)
    }

    /// Move back to the start of the local day, returning `None` on overflow
    pub fn checked_set_to_midnight(self) -> Option<Self> {
        let elapsed = self.elapsed_of_day();
        self.checked_add_millis(-elapsed)
    }

    /// Returns the local time of day in milliseconds
    fn elapsed_of_day(&self) -> i64 {
        let LocalFields { hour, minute, second, millis, .. } = self.local_fields();
        i64::from(hour) * MILLIS_PER_HOUR + i64::from(minute) * MILLIS_PER_MINUTE + i64::from(second) * MILLIS_PER_SECOND + i64::from(millis)
    }
}

impl ZonedTime<Utc> {
    /// Returns the current UTC zoned time, reading the system clock
    pub fn now() -> Self {
        Self::now_with(&SystemClock::utc())
    }

    /// Construct a UTC zoned time at midnight of a date in the proleptic gregorian calendar.
    ///
    /// Fails with [`DateTimeError::InvalidMonthDay`] if the day does not exist in the month of the year,
    /// and with [`DateTimeError::OutOfRange`] if the date is not representable as a Unix time in milliseconds.
    ///
    pub fn from_gregorian_utc(date: GregorianDate) -> Result<Self, DateTimeError> {
        let days_from_origin = calendar::checked_days_from_origin(date)?;

        let millis = i128::from(days_from_origin) * i128::from(MILLIS_PER_DAY) + i128::from(EPOCH_OFFSET_MILLIS);
        let millis = i64::try_from(millis).map_err(|_| DateTimeError::OutOfRange)?;

        Ok(Self::from_posix(Utc, Posix::from_millis(millis)))
    }
}
