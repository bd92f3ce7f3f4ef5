//! Calendar events and meeting requests -- the solver's inputs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::time_range::TimeRange;

/// A busy interval on the calendar shared by a set of attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    when: TimeRange,
    attendees: BTreeSet<String>,
}

/// Unvalidated wire shape of an [`Event`].
#[derive(Deserialize)]
struct EventRecord {
    #[serde(default)]
    title: Option<String>,
    when: TimeRange,
    #[serde(default)]
    attendees: BTreeSet<String>,
}

impl TryFrom<EventRecord> for Event {
    type Error = MeetingError;

    fn try_from(record: EventRecord) -> Result<Self> {
        let event = Event::new(record.when, record.attendees)?;
        Ok(match record.title {
            Some(title) => event.with_title(title),
            None => event,
        })
    }
}

impl Event {
    /// Create an event occupying `when` for the given attendees.
    ///
    /// Duplicate attendee names collapse into one.
    ///
    /// # Errors
    /// Returns `MeetingError::OutsideDay` if `when` does not lie inside `[0, 1440)`.
    pub fn new<I, S>(when: TimeRange, attendees: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !when.is_within_day() {
            return Err(MeetingError::OutsideDay {
                start: when.start(),
                end: when.end(),
            });
        }
        Ok(Self {
            title: None,
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True when at least one of `people` attends this event.
    pub fn involves_any(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}

/// A request to find room for a meeting of `duration` minutes.
///
/// Mandatory attendees must all be free; optional attendees are accommodated
/// only when that still leaves a slot of the requested length.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    #[serde(default)]
    attendees: BTreeSet<String>,
    #[serde(default)]
    optional_attendees: BTreeSet<String>,
    duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    pub fn with_optional_attendees<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = optional.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    /// Requested meeting length in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }
}
