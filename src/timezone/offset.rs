//! Fixed offsets from UTC.

use crate::constants::MAX_UT_OFFSET_SECONDS;
use crate::error::timezone::TimeZoneError;

/// Constant offset from UTC in seconds, within `[-25:59:59, +25:59:59]`
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FixedOffset {
    /// Offset from UTC in seconds
    seconds: i32,
}

impl FixedOffset {
    /// Offset of UTC
    pub const UTC: Self = Self { seconds: 0 };
    /// Smallest offset (`-25:59:59`)
    pub const MIN: Self = Self { seconds: -MAX_UT_OFFSET_SECONDS };
    /// Largest offset (`+25:59:59`)
    pub const MAX: Self = Self { seconds: MAX_UT_OFFSET_SECONDS };

    /// Construct a fixed offset from a number of seconds east of UTC
    pub fn new(seconds: i32) -> Result<Self, TimeZoneError> {
        if !(-MAX_UT_OFFSET_SECONDS..=MAX_UT_OFFSET_SECONDS).contains(&seconds) {
            return Err(TimeZoneError::InvalidUtcOffset);
        }

        Ok(Self { seconds })
    }

    /// Construct a fixed offset from a number of seconds east of UTC, in a const context.
    ///
    /// # Panics
    ///
    /// Panics if the offset is outside of `[-25:59:59, +25:59:59]`. In a const context, this is a compile error.
    ///
    pub const fn constant(seconds: i32) -> Self {
        assert!(-MAX_UT_OFFSET_SECONDS <= seconds && seconds <= MAX_UT_OFFSET_SECONDS, "UTC offset out of range");
        Self { seconds }
    }

    /// Returns the offset from UTC in seconds
    pub const fn seconds(self) -> i32 {
        self.seconds
    }
}
