use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `instant` as wall-clock time in Asia/Kolkata.
pub fn ist_timestamp(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Kolkata).format(TIMESTAMP_FORMAT).to_string()
}

pub fn now_ist_timestamp() -> String {
    ist_timestamp(Utc::now())
}
