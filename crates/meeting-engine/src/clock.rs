//! Conversions between `"HH:MM"` clock strings and minutes since midnight.
//!
//! Uses `chrono::NaiveTime` for parsing and formatting. `"24:00"` is accepted as
//! the exclusive end of the day (minute 1440), which `NaiveTime` cannot represent.

use chrono::{NaiveTime, Timelike};

use crate::error::{MeetingError, Result};
use crate::time_range::MINUTES_PER_DAY;

/// Parse a `"HH:MM"` string into minutes since midnight.
///
/// # Errors
/// Returns `MeetingError::InvalidClockTime` if the string is not a valid
/// 24-hour clock time.
pub fn parse_minute_of_day(clock: &str) -> Result<u32> {
    let trimmed = clock.trim();
    if trimmed == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| MeetingError::InvalidClockTime(format!("{trimmed}: {e}")))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Format minutes since midnight as `"HH:MM"`.
///
/// Minute 1440 formats as `"24:00"`; anything past it wraps into the next day.
pub fn format_minute_of_day(minute: u32) -> String {
    if minute == MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    let wrapped = minute % MINUTES_PER_DAY;
    match NaiveTime::from_hms_opt(wrapped / 60, wrapped % 60, 0) {
        Some(time) => time.format("%H:%M").to_string(),
        None => format!("{:02}:{:02}", wrapped / 60, wrapped % 60),
    }
}
