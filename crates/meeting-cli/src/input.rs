//! Serde-friendly DTOs for the calendar file read by `findmeeting`.
//!
//! Times may be given as minutes since midnight or as `"HH:MM"` strings. An
//! event names either an `end` or a `duration`.

use anyhow::{bail, Context, Result};
use meeting_engine::clock::parse_minute_of_day;
use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CalendarInput {
    #[serde(default)]
    pub events: Vec<EventInput>,
    pub request: MeetingRequest,
}

#[derive(Debug, Deserialize)]
pub struct EventInput {
    #[serde(default)]
    pub title: Option<String>,
    pub start: ClockValue,
    #[serde(default)]
    pub end: Option<ClockValue>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn minutes(&self) -> Result<u32> {
        match self {
            ClockValue::Minutes(m) => Ok(*m),
            ClockValue::Clock(s) => Ok(parse_minute_of_day(s)?),
        }
    }
}

impl EventInput {
    fn label(&self, index: usize) -> String {
        match &self.title {
            Some(title) => format!("event #{} ({})", index, title),
            None => format!("event #{}", index),
        }
    }

    fn time_range(&self) -> Result<TimeRange> {
        let start = self.start.minutes()?;
        match (&self.end, self.duration) {
            (Some(end), None) => Ok(TimeRange::from_start_end(start, end.minutes()?, false)?),
            (None, Some(duration)) => Ok(TimeRange::from_start_duration(start, duration)),
            (Some(_), Some(_)) => bail!("give either 'end' or 'duration', not both"),
            (None, None) => bail!("missing 'end' or 'duration'"),
        }
    }

    pub fn into_event(self, index: usize) -> Result<Event> {
        let label = self.label(index);
        let when = self.time_range().with_context(|| format!("Invalid time in {}", label))?;
        let event = Event::new(when, self.attendees)
            .with_context(|| format!("Invalid {}", label))?;
        Ok(match self.title {
            Some(title) => event.with_title(title),
            None => event,
        })
    }
}

impl CalendarInput {
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse calendar JSON")
    }

    /// Convert every event, stopping at the first invalid one.
    pub fn into_parts(self) -> Result<(Vec<Event>, MeetingRequest)> {
        let events = self
            .events
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.into_event(i))
            .collect::<Result<Vec<_>>>()?;
        Ok((events, self.request))
    }
}
