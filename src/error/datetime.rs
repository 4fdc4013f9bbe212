//! Date time error types.

use core::error::Error;
use core::fmt;

/// Date time error
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DateTimeError {
    /// Invalid month
    InvalidMonth,
    /// Invalid month day
    InvalidMonthDay,
    /// Invalid week day
    InvalidWeekDay,
    /// Date time is not representable as a Unix time in milliseconds
    OutOfRange,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::InvalidMonth => f.write_str("invalid month"),
            Self::InvalidMonthDay => f.write_str("invalid month day"),
            Self::InvalidWeekDay => f.write_str("invalid week day"),
            Self::OutOfRange => f.write_str("date time is out of the representable range"),
        }
    }
}

impl Error for DateTimeError {}
