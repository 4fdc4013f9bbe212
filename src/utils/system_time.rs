//! Some useful system time functions.

use std::time::{Duration, SystemTime};

/// Number of nanoseconds in one millisecond
const NANOSECONDS_PER_MILLISECOND: i128 = 1_000_000;

/// Returns the duration between Unix epoch (`1970-01-01T00:00:00Z`) and a `SystemTime`.
///
/// The `Ok` variant corresponds to a positive duration, and the `Err` variant to a negative duration.
fn duration_since_epoch(time: SystemTime) -> Result<Duration, Duration> {
    time.duration_since(SystemTime::UNIX_EPOCH).map_err(|e| e.duration())
}

/// Returns the total nanoseconds between Unix epoch (`1970-01-01T00:00:00Z`) and a `SystemTime`
fn total_nanoseconds(time: SystemTime) -> i128 {
    match duration_since_epoch(time) {
        Ok(duration) => 0i128.saturating_add_unsigned(duration.as_nanos()),
        Err(duration) => 0i128.saturating_sub_unsigned(duration.as_nanos()),
    }
}

/// Returns the Unix time in milliseconds for a `SystemTime`, rounded toward negative infinity and saturated to the `i64` range
pub(crate) fn total_milliseconds(time: SystemTime) -> i64 {
    let millis = total_nanoseconds(time).div_euclid(NANOSECONDS_PER_MILLISECOND);
    i64::try_from(millis).unwrap_or(if millis < 0 { i64::MIN } else { i64::MAX })
}
