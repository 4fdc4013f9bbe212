#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, i32)| {
    use zoned_time::{FixedOffset, Posix, ZonedTime};

    let (millis, ut_offset) = input;
    let zone = FixedOffset::constant(ut_offset % 86400);
    let zoned_time = ZonedTime::from_posix(zone, Posix::from_millis(millis.clamp(i64::MIN / 2, i64::MAX / 2)));

    let midnight = zoned_time.set_to_midnight();
    let fields = midnight.local_fields();
    assert_eq!((fields.hour, fields.minute, fields.second, fields.millis), (0, 0, 0, 0));
    assert_eq!((fields.year, fields.month, fields.day), {
        let fields = zoned_time.local_fields();
        (fields.year, fields.month, fields.day)
    });
    assert_eq!(midnight.set_to_midnight(), midnight);
});
