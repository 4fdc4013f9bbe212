#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! This crate provides the `ZonedTime` struct, an absolute instant paired with a time zone, which can be used to perform calendar-aware arithmetic
//! and to read local calendar and clock fields without ever corrupting the underlying instant.
//!
//! Instants are [Unix times](https://en.wikipedia.org/wiki/Unix_time) in milliseconds, and calendar fields are exprimed in the
//! [proleptic gregorian calendar](https://en.wikipedia.org/wiki/Proleptic_Gregorian_calendar).
//!
//! Time zones are opaque capabilities implementing the [`TimeZone`] trait: given an instant, a time zone reports the local fields
//! that an observer in the zone would see. The crate provides [`Utc`], [`FixedOffset`], and [`OffsetSchedule`] for zones whose
//! offset changes at known instants, such as Daylight Saving Time transitions. Reading a time zone database is out of scope.
//!
//! # Usage
//!
//! ## Zoned time
//!
//! ```rust
//! # fn main() -> Result<(), zoned_time::Error> {
//!     use zoned_time::{FixedOffset, GregorianDate, Month, Posix, Utc, Weekday, ZonedTime};
//!
//!     // 1970-01-04T13:54:12.123Z
//!     let zoned_time = ZonedTime::from_posix(Utc, Posix::from_millis(309252123));
//!     assert_eq!(zoned_time.year(), 1970);
//!     assert_eq!(zoned_time.month(), Month::January);
//!     assert_eq!(zoned_time.day(), 4);
//!     assert_eq!(zoned_time.week_day(), Weekday::Sunday);
//!     assert_eq!(zoned_time.hour(), 13);
//!     assert_eq!(zoned_time.minute(), 54);
//!     assert_eq!(zoned_time.second(), 12);
//!     assert_eq!(zoned_time.millis(), 123);
//!
//!     // Go back to the start of the day
//!     let midnight = zoned_time.set_to_midnight();
//!     assert_eq!((midnight.hour(), midnight.minute(), midnight.second(), midnight.millis()), (0, 0, 0, 0));
//!     assert_eq!(midnight.day(), 4);
//!
//!     // Build a UTC zoned time from a calendar date (2000-02-29T00:00:00Z)
//!     let leap_day = ZonedTime::from_gregorian_utc(GregorianDate::new(2000, Month::February, 29))?;
//!     assert_eq!(leap_day.to_posix(), Posix::from_millis(951782400000));
//!
//!     // Days that do not exist are rejected
//!     assert!(ZonedTime::from_gregorian_utc(GregorianDate::new(1999, Month::February, 29)).is_err());
//!
//!     // Arithmetic never changes the time zone
//!     let later = leap_day.add_days(1).add_hours(13).add_minutes(-5);
//!     assert_eq!((later.month(), later.day(), later.hour(), later.minute()), (Month::March, 1, 12, 55));
//!
//!     // Observe the same instant from another time zone
//!     let projected = leap_day.overwrite_zone(FixedOffset::new(-3600)?);
//!     assert_eq!(projected.to_posix(), leap_day.to_posix());
//!     assert_eq!((projected.day(), projected.hour()), (28, 23));
//! # Ok(())
//! # }
//! ```
//!
//! ## Time zone with Daylight Saving Time
//!
//! ```rust
//! # fn main() -> Result<(), zoned_time::Error> {
//!     use zoned_time::{FixedOffset, Month, OffsetSchedule, Posix, Transition, ZonedTime};
//!
//!     // New Zealand clocks jump from 02:00 NZST to 03:00 NZDT on 2000-10-01
//!     let nzst = FixedOffset::new(43200)?;
//!     let nzdt = FixedOffset::new(46800)?;
//!     let time_zone = OffsetSchedule::new(nzst, vec![Transition::new(Posix::from_millis(970322400000), nzdt)])?;
//!
//!     // 2000-10-01T03:30:00 NZDT
//!     let zoned_time = ZonedTime::from_posix(time_zone, Posix::from_millis(970324200000));
//!     assert_eq!((zoned_time.month(), zoned_time.day(), zoned_time.hour(), zoned_time.minute()), (Month::October, 1, 3, 30));
//!
//!     // Three and a half hours earlier, the clock only shows 23:00 the day before
//!     let midnight = zoned_time.set_to_midnight();
//!     assert_eq!((midnight.month(), midnight.day(), midnight.hour()), (Month::September, 30, 23));
//! # Ok(())
//! # }
//! ```
//!
//! ## Current time
//!
//! ```rust
//!     use zoned_time::{FixedOffset, SystemClock, ZonedTime};
//!
//!     // Get the current UTC zoned time
//!     let _now = ZonedTime::now();
//!
//!     // Get the current zoned time, observed from a fixed offset
//!     let clock = SystemClock::new(FixedOffset::constant(3600));
//!     let _now = ZonedTime::now_with(&clock);
//! ```
//!
//! # Limitations
//!
//! Arithmetic is performed on `i64` milliseconds. The `add_*`, `reset_*` and `set_to_midnight` methods panic when the result
//! overflows this range, and their `checked_*` variants return `None` instead.
//!
//! For the same reason, [`ZonedTime::from_gregorian_utc`] fails with [`DateTimeError::OutOfRange`](error::datetime::DateTimeError::OutOfRange)
//! for dates whose midnight is not representable, which only happens beyond about 292 million years from the Unix epoch.
//!
//! Resetting fields reads them from the time zone at the original instant. Across an offset change during the night,
//! [`ZonedTime::set_to_midnight`] does not land on a local midnight, and applying it again moves further back.
//!

#[macro_use]
mod logging;

mod calendar;
mod clock;
mod constants;
mod datetime;
mod timezone;
mod utils;

pub mod error;

pub use calendar::{days_in_month, days_in_year, days_since_unix_epoch, is_leap_year, year_day, GregorianDate, Month, Weekday};
pub use clock::{Clock, SystemClock};
pub use datetime::{Posix, ZonedTime};
pub use error::{Error, Result};
pub use timezone::{FixedOffset, LocalFields, OffsetSchedule, TimeZone, Transition, Utc};
