//! Meeting query -- wires attendee filtering, the mandatory sweep, and the
//! optional refinement into one pure function.

use std::collections::BTreeSet;

use tracing::debug;

use crate::event::{Event, MeetingRequest};
use crate::mandatory::{resolve_mandatory, MergeStrategy};
use crate::optional::refine_with_optional;
use crate::time_range::{order_by_start, TimeRange};

/// Find every time of day at which the requested meeting could take place.
///
/// Uses [`MergeStrategy::Union`] for the mandatory sweep. See [`query_with`].
pub fn query(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    query_with(events, request, MergeStrategy::Union)
}

/// Find free slots for `request` given the day's `events`, with an explicit
/// merge strategy for the mandatory sweep.
///
/// An event counts as busy for mandatory (or optional) attendees when at least
/// one of its attendees is in the corresponding set of the request. An event
/// can be busy for both. The optional refinement only narrows the mandatory
/// result and never empties it.
pub fn query_with(
    events: &[Event],
    request: &MeetingRequest,
    strategy: MergeStrategy,
) -> Vec<TimeRange> {
    let duration = request.duration();
    if duration >= TimeRange::WHOLE_DAY.duration() {
        debug!(duration, "requested duration does not fit in a day");
        return Vec::new();
    }

    let mut mandatory_busy = busy_for(events, request.attendees());
    let mut optional_busy = busy_for(events, request.optional_attendees());
    mandatory_busy.sort_by(order_by_start);
    optional_busy.sort_by(order_by_start);

    debug!(
        events = events.len(),
        mandatory_busy = mandatory_busy.len(),
        optional_busy = optional_busy.len(),
        duration,
        "resolving meeting availability"
    );

    let mandatory_free = resolve_mandatory(&mandatory_busy, duration, strategy);
    debug!(slots = mandatory_free.len(), ?strategy, "mandatory free slots");

    let free = refine_with_optional(&mandatory_free, &optional_busy, duration);
    debug!(slots = free.len(), "free slots after optional refinement");
    free
}

fn busy_for(events: &[Event], people: &BTreeSet<String>) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|event| event.involves_any(people))
        .map(Event::when)
        .collect()
}
