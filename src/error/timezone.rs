//! Time zone error types.

use core::error::Error;
use core::fmt;

/// Time zone error
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimeZoneError {
    /// UTC offset outside of `[-25:59:59, +25:59:59]`
    InvalidUtcOffset,
    /// Offset transitions not in strictly increasing order
    UnsortedTransitions,
}

impl fmt::Display for TimeZoneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::InvalidUtcOffset => f.write_str("UTC offset must be in [-25:59:59, +25:59:59]"),
            Self::UnsortedTransitions => f.write_str("offset transitions must be in strictly increasing order"),
        }
    }
}

impl Error for TimeZoneError {}
