//! Clock providing the current instant and the local time zone.

use crate::datetime::Posix;
use crate::timezone::{TimeZone, Utc};

use std::time::SystemTime;

/// Source of the current instant and of the observer's time zone.
///
/// Implement this trait to inject a deterministic clock, for example in tests.
///
pub trait Clock {
    /// Time zone of the observer
    type Zone: TimeZone;

    /// Returns the current instant
    fn now(&self) -> Posix;

    /// Returns the time zone of the observer
    fn local_zone(&self) -> Self::Zone;
}

impl<C: Clock + ?Sized> Clock for &C {
    type Zone = C::Zone;

    fn now(&self) -> Posix {
        (**self).now()
    }

    fn local_zone(&self) -> Self::Zone {
        (**self).local_zone()
    }
}

/// Clock reading the system time, with a configured local time zone
#[derive(Debug, Clone, Default)]
pub struct SystemClock<Z = Utc> {
    /// Local time zone
    zone: Z,
}

impl SystemClock {
    /// Construct a system clock observing from UTC
    pub fn utc() -> Self {
        Self { zone: Utc }
    }
}

impl<Z> SystemClock<Z> {
    /// Construct a system clock observing from the specified time zone
    pub fn new(zone: Z) -> Self {
        Self { zone }
    }
}

impl<Z: TimeZone + Clone> Clock for SystemClock<Z> {
    type Zone = Z;

    fn now(&self) -> Posix {
        let posix = Posix::from_system_time(SystemTime::now());
        trace!("read system clock: {} ms since Unix epoch", posix.millis());
        posix
    }

    fn local_zone(&self) -> Z {
        self.zone.clone()
    }
}
