//! Time utilities: parsing HH:MM and display formatting.

use chrono::{DateTime, Local, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn fmt_clock(ts: &DateTime<Local>) -> String {
    ts.format("%H:%M:%S").to_string()
}

pub fn fmt_date(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
