//! Error types.

pub mod datetime;
pub mod timezone;

use datetime::DateTimeError;
use timezone::TimeZoneError;

use core::error;
use core::fmt;

/// Alias for [`core::result::Result`] with the crate unified error
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Unified error type for everything in the crate
#[non_exhaustive]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// Time zone error
    TimeZone(TimeZoneError),
    /// Date time error
    DateTime(DateTimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::TimeZone(error) => write!(f, "invalid time zone: {error}"),
            Self::DateTime(error) => write!(f, "invalid date time: {error}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::TimeZone(error) => Some(error),
            Self::DateTime(error) => Some(error),
        }
    }
}

impl From<TimeZoneError> for Error {
    fn from(error: TimeZoneError) -> Self {
        Self::TimeZone(error)
    }
}

impl From<DateTimeError> for Error {
    fn from(error: DateTimeError) -> Self {
        Self::DateTime(error)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn test_error_display_and_source() {
        let error = Error::from(DateTimeError::InvalidMonthDay);
        assert_eq!(error.to_string(), "invalid date time: invalid month day");
        assert_eq!(error.source().map(|x| x.to_string()).as_deref(), Some("invalid month day"));

        let error = Error::from(TimeZoneError::UnsortedTransitions);
        assert_eq!(error.to_string(), "invalid time zone: offset transitions must be in strictly increasing order");

        let error = Error::from(TimeZoneError::InvalidUtcOffset);
        assert_eq!(error, Error::TimeZone(TimeZoneError::InvalidUtcOffset));
    }
}
