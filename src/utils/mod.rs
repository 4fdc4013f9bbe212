//! Some useful utilities.

mod system_time;

pub(crate) use system_time::total_milliseconds;
