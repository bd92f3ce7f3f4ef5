//! # meeting-engine
//!
//! Meeting availability solver over a single day of minute-granular busy
//! intervals.
//!
//! Given the day's events and a [`MeetingRequest`] naming mandatory and
//! optional attendees plus a duration, [`query`] returns every free interval
//! long enough for the meeting. Mandatory attendees are a hard constraint;
//! optional attendees are accommodated wherever that still leaves a slot.
//!
//! ```rust
//! use meeting_engine::{query, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(TimeRange::from_start_duration(60, 30), ["A"]).unwrap()];
//! let request = MeetingRequest::new(["A"], 30);
//!
//! let free = query(&events, &request);
//! assert_eq!(
//!     free,
//!     vec![
//!         TimeRange::from_start_end(0, 60, false).unwrap(),
//!         TimeRange::from_start_end(90, 1440, false).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`] — Half-open minute-of-day intervals
//! - [`event`] — Events and meeting requests
//! - [`mandatory`] — Free intervals for mandatory attendees
//! - [`optional`] — Refinement for optional attendees
//! - [`query`] — The full query
//! - [`clock`] — `"HH:MM"` conversions
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod event;
pub mod mandatory;
pub mod optional;
pub mod query;
pub mod time_range;

pub use error::MeetingError;
pub use event::{Event, MeetingRequest};
pub use mandatory::{resolve_mandatory, MergeStrategy};
pub use optional::refine_with_optional;
pub use query::{query, query_with};
pub use time_range::{order_by_start, TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
