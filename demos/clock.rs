use zoned_time::*;

fn main() {
    // Get the current UTC zoned time
    let now = ZonedTime::now();
    println!("{:?}", now.local_fields());

    // Get the current zoned time, observed from a fixed offset
    let clock = SystemClock::new(FixedOffset::constant(3600));
    let now = ZonedTime::now_with(&clock);
    println!("{:?}", now.local_fields());

    // Get the start of the current day
    let today = now.set_to_midnight();
    println!("{:?}", today.to_posix());
}
