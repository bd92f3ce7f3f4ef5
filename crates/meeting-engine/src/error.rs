//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeetingError {
    /// A range whose exclusive end falls before its start.
    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: u32, end: u32 },

    /// An event interval that does not fit inside a single day.
    #[error("Time range {start}..{end} lies outside the day [0, 1440)")]
    OutsideDay { start: u32, end: u32 },

    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
