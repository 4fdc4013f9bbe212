//! Absolute instant as a Unix time in milliseconds.

use crate::constants::MILLIS_PER_SECOND;
use crate::utils::total_milliseconds;

use std::time::SystemTime;

/// Absolute instant, counted in milliseconds since Unix epoch (`1970-01-01T00:00:00Z`).
///
/// The count is signed: negative values are instants before the epoch.
///
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Posix {
    /// Milliseconds since Unix epoch
    millis: i64,
}

impl Posix {
    /// Unix epoch (`1970-01-01T00:00:00Z`)
    pub const UNIX_EPOCH: Self = Self { millis: 0 };
    /// Earliest representable instant
    pub const MIN: Self = Self { millis: i64::MIN };
    /// Latest representable instant
    pub const MAX: Self = Self { millis: i64::MAX };

    /// Construct an instant from milliseconds since Unix epoch
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Construct an instant from seconds since Unix epoch, returning `None` if it overflows the millisecond range
    pub const fn from_secs(secs: i64) -> Option<Self> {
        match secs.checked_mul(MILLIS_PER_SECOND) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }

    /// Construct an instant from a `SystemTime`.
    ///
    /// Sub-millisecond precision is truncated toward the past, and times outside of the `i64` range are saturated.
    ///
    pub fn from_system_time(time: SystemTime) -> Self {
        Self { millis: total_milliseconds(time) }
    }

    /// Returns milliseconds since Unix epoch
    pub const fn millis(self) -> i64 {
        self.millis
    }

    /// Returns whole seconds since Unix epoch, rounded toward the past
    pub const fn secs(self) -> i64 {
        self.millis.div_euclid(MILLIS_PER_SECOND)
    }

    /// Add milliseconds, returning `None` on overflow
    pub const fn checked_add_millis(self, millis: i64) -> Option<Self> {
        match self.millis.checked_add(millis) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }
}

impl From<i64> for Posix {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<Posix> for i64 {
    fn from(posix: Posix) -> Self {
        posix.millis
    }
}

impl From<SystemTime> for Posix {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Posix {
    fn arbitrary(g: &mut quickcheck::Gen) -> Posix {
        // About 300 thousand years around the epoch, so that day arithmetic never overflows
        Posix::from_millis(<i64 as quickcheck::Arbitrary>::arbitrary(g) % 10_000_000_000_000_000)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Posix>> {
        Box::new(quickcheck::Arbitrary::shrink(&self.millis).map(Posix::from_millis))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::time::Duration;

    #[test]
    fn test_posix() {
        assert_eq!(Posix::from_millis(1_500).secs(), 1);
        assert_eq!(Posix::from_millis(-1_500).secs(), -2);
        assert_eq!(Posix::from_secs(946684800), Some(Posix::from_millis(946684800000)));
        assert_eq!(Posix::from_secs(i64::MAX), None);

        assert_eq!(Posix::MAX.checked_add_millis(1), None);
        assert_eq!(Posix::MIN.checked_add_millis(-1), None);
        assert_eq!(Posix::UNIX_EPOCH.checked_add_millis(-1), Some(Posix::from_millis(-1)));

        assert_eq!(i64::from(Posix::from(42)), 42);
        assert!(Posix::from_millis(-1) < Posix::UNIX_EPOCH);
    }

    #[test]
    fn test_posix_from_system_time() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(946684800);
        assert_eq!(Posix::from(time), Posix::from_millis(946684800000));

        let time = SystemTime::UNIX_EPOCH - Duration::from_millis(86_400_001);
        assert_eq!(Posix::from_system_time(time), Posix::from_millis(-86_400_001));
    }
}
