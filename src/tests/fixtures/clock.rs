use crate::shared::core::clock::FixedClock;
use chrono::{TimeZone, Utc};

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap())
}
