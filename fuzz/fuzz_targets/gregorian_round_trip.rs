#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|millis: i64| {
    use zoned_time::{GregorianDate, Posix, TimeZone, Utc, ZonedTime};

    let posix = Posix::from_millis(millis);
    let fields = Utc.local_fields(posix);

    // The start of the first representable day is before `i64::MIN`
    let Ok(zoned_time) = ZonedTime::from_gregorian_utc(GregorianDate::new(fields.year, fields.month, fields.day)) else {
        return;
    };
    let zoned_time = zoned_time
        .add_hours(fields.hour.into())
        .add_minutes(fields.minute.into())
        .add_seconds(fields.second.into())
        .add_millis(fields.millis.into());

    assert_eq!(zoned_time.to_posix(), posix);
});
