//! Export timestamps
//!
//! Both documents carry an "Exported" line such as
//! `Tuesday 05-03-2024 , 02:07 PM` (local wall-clock time, 12-hour clock).

use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%A %d-%m-%Y , %I:%M %p";

/// Format a local wall-clock time for the document header.
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// The current local time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
