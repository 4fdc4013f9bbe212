//! Types related to a time zone.

mod offset;
mod schedule;

pub use offset::FixedOffset;
pub use schedule::{OffsetSchedule, Transition};

use crate::calendar::{self, Month, Weekday};
use crate::constants::MILLIS_PER_SECOND;
use crate::datetime::Posix;

use std::rc::Rc;
use std::sync::Arc;

/// Local calendar and clock fields observed in a time zone at a given instant
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LocalFields {
    /// Year
    pub year: i32,
    /// Month
    pub month: Month,
    /// Day of the month in `[1, 31]`
    pub day: u8,
    /// Day of the week
    pub week_day: Weekday,
    /// Hours since midnight in `[0, 23]`
    pub hour: u8,
    /// Minutes in `[0, 59]`
    pub minute: u8,
    /// Seconds in `[0, 59]`
    pub second: u8,
    /// Milliseconds in `[0, 999]`
    pub millis: u16,
}

impl LocalFields {
    /// Compute the local fields of an instant observed with the specified offset from UTC in seconds
    pub fn from_ut_offset(posix: Posix, ut_offset: i32) -> Self {
        let local_millis = i128::from(posix.millis()) + i128::from(ut_offset) * i128::from(MILLIS_PER_SECOND);
        calendar::local_fields(local_millis)
    }
}

/// Time zone capability: maps an absolute instant to the local fields an observer in the zone would see.
///
/// The rules of the zone, including any Daylight Saving Time transitions, are entirely up to the implementor.
/// A [`ZonedTime`](crate::ZonedTime) never inspects a zone, it only asks it for local fields.
///
pub trait TimeZone {
    /// Returns the local fields at the specified instant
    fn local_fields(&self, posix: Posix) -> LocalFields;
}

/// UTC time zone
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Utc;

impl TimeZone for Utc {
    fn local_fields(&self, posix: Posix) -> LocalFields {
        LocalFields::from_ut_offset(posix, 0)
    }
}

impl TimeZone for FixedOffset {
    fn local_fields(&self, posix: Posix) -> LocalFields {
        LocalFields::from_ut_offset(posix, self.seconds())
    }
}

impl TimeZone for OffsetSchedule {
    fn local_fields(&self, posix: Posix) -> LocalFields {
        LocalFields::from_ut_offset(posix, self.offset_at(posix).seconds())
    }
}

/// Macro for implementing the time zone capability on pointer types
macro_rules! impl_time_zone_for_pointer {
    ($($pointer:ty),*) => {
        $(
            impl<Z: TimeZone + ?Sized> TimeZone for $pointer {
                fn local_fields(&self, posix: Posix) -> LocalFields {
                    (**self).local_fields(posix)
                }
            }
        )*
    };
}

impl_time_zone_for_pointer!(&Z, Box<Z>, Rc<Z>, Arc<Z>);
