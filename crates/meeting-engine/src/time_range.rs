//! Immutable intervals of minutes within a single day.
//!
//! A [`TimeRange`] is stored as a start minute and a length. The end is
//! exclusive: a range starting at 540 with duration 60 covers 09:00 up to, but
//! not including, 10:00.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::format_minute_of_day;
use crate::error::{MeetingError, Result};

/// Number of minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: u32 = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: u32 = MINUTES_PER_DAY - 1;

/// A half-open interval `[start, start + duration)` of minutes since midnight.
///
/// Ordering compares `start` first and `duration` second, so sorting a list of
/// ranges orders it by start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    start: u32,
    duration: u32,
}

impl TimeRange {
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        duration: MINUTES_PER_DAY,
    };

    pub const fn from_start_duration(start: u32, duration: u32) -> Self {
        Self { start, duration }
    }

    /// Build a range from a start and an end minute.
    ///
    /// When `inclusive` is true, `end` is the last minute covered and the stored
    /// exclusive end is `end + 1`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidRange` if the exclusive end falls before `start`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let exclusive_end = if inclusive {
            end.checked_add(1).ok_or(MeetingError::InvalidRange { start, end })?
        } else {
            end
        };
        if exclusive_end < start {
            return Err(MeetingError::InvalidRange {
                start,
                end: exclusive_end,
            });
        }
        Ok(Self {
            start,
            duration: exclusive_end - start,
        })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.duration)
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Two ranges overlap iff `self.start < other.end && other.start < self.end`.
    ///
    /// Ranges that merely touch (one ends where the other starts) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end() <= self.end()
    }

    pub fn contains_point(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end()
    }

    /// True when the range lies inside `[0, 1440)`.
    pub fn is_within_day(&self) -> bool {
        Self::WHOLE_DAY.contains(self)
    }
}

/// Comparator ordering ranges by start only.
///
/// Ranges with the same start compare equal, so a stable sort keeps their input order.
pub fn order_by_start(a: &TimeRange, b: &TimeRange) -> Ordering {
    a.start.cmp(&b.start)
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            format_minute_of_day(self.start),
            format_minute_of_day(self.end())
        )
    }
}
