use zoned_time::*;

fn main() -> Result<()> {
    //
    // ZonedTime
    //

    // 2000-01-01T00:00:00Z
    let posix = Posix::from_millis(946684800000);

    // Pair an instant with the UTC time zone
    let zoned_time = ZonedTime::from_posix(Utc, posix);
    println!("{:?}", zoned_time.local_fields());

    // Observe the same instant at GMT-1
    let zoned_time_fixed = zoned_time.overwrite_zone(FixedOffset::new(-3600)?);
    println!("{:?}", zoned_time_fixed.local_fields());

    // Build a UTC zoned time from a calendar date
    let leap_day = ZonedTime::from_gregorian_utc(GregorianDate::new(2000, Month::February, 29))?;
    println!("{:?}", leap_day);

    // Invalid dates are rejected
    println!("{:?}", ZonedTime::from_gregorian_utc(GregorianDate::new(1999, Month::February, 29)));

    // Arithmetic
    let later = leap_day.add_days(1).add_hours(13).add_minutes(54).add_seconds(12).add_millis(123);
    println!("{:?}", later.local_fields());
    println!("{:?}", later.set_to_midnight().local_fields());

    //
    // Time zone with Daylight Saving Time
    //

    // New Zealand in 2000: NZDT until March 19, then NZST until October 1
    let nzst = FixedOffset::new(43200)?;
    let nzdt = FixedOffset::new(46800)?;
    let time_zone = OffsetSchedule::new(
        nzdt,
        vec![Transition::new(Posix::from_millis(953388000000), nzst), Transition::new(Posix::from_millis(970322400000), nzdt)],
    )?;

    let zoned_time = ZonedTime::from_posix(time_zone, posix);
    println!("{:?}", zoned_time.to_zone().offset_at(zoned_time.to_posix()));
    println!("{:?}", zoned_time.local_fields());

    // 2000-10-01T03:30:00 NZDT, half an hour after clocks jumped forward
    let zoned_time = zoned_time.map_posix(|_| Posix::from_millis(970324200000));
    let midnight = zoned_time.clone().set_to_midnight();
    println!("{:?}", midnight.local_fields());
    println!("{:?}", midnight.checked_set_to_midnight().map(|x| x.local_fields()));

    //
    // Calendar
    //

    for year in [1900, 2000, 2023, 2024] {
        println!("{year}: leap = {}, days = {}, February = {}", is_leap_year(year), days_in_year(year), days_in_month(year, Month::February));
    }

    for (year, month, day) in [(2000, Month::March, 1), (2001, Month::February, 29)] {
        println!("{year}-{:02}-{day:02}: year day = {:?}, days since Unix epoch = {:?}", month.number(), year_day(year, month, day), days_since_unix_epoch(year, month, day));
    }

    Ok(())
}
