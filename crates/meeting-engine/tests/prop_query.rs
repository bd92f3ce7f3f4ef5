//! Property-based tests for the meeting query using proptest.
//!
//! These verify invariants that hold for *any* calendar, not just the specific
//! scenarios in `query_tests.rs`.

use proptest::prelude::*;
use meeting_engine::{
    query, refine_with_optional, resolve_mandatory, Event, MeetingRequest, MergeStrategy,
    TimeRange, MINUTES_PER_DAY,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

const PEOPLE: [&str; 5] = ["A", "B", "C", "D", "E"];

fn arb_range() -> impl Strategy<Value = TimeRange> {
    (0u32..MINUTES_PER_DAY)
        .prop_flat_map(|start| (Just(start), 0u32..=(MINUTES_PER_DAY - start).min(240)))
        .prop_map(|(start, duration)| TimeRange::from_start_duration(start, duration))
}

fn arb_people() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(PEOPLE.to_vec(), 0..=PEOPLE.len())
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

fn arb_event() -> impl Strategy<Value = Event> {
    (arb_range(), arb_people()).prop_map(|(when, people)| Event::new(when, people).unwrap())
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(arb_event(), 0..20)
}

fn arb_request() -> impl Strategy<Value = MeetingRequest> {
    (arb_people(), arb_people(), 0u32..=300).prop_map(|(mandatory, optional, duration)| {
        MeetingRequest::new(mandatory, duration).with_optional_attendees(optional)
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn mandatory_busy(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|e| e.involves_any(request.attendees()))
        .map(Event::when)
        .collect()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn whole_day_or_longer_yields_nothing(
        events in arb_events(),
        request in arb_request(),
        duration in MINUTES_PER_DAY..MINUTES_PER_DAY * 3,
    ) {
        let request = request.with_duration(duration);
        prop_assert!(query(&events, &request).is_empty());
    }

    #[test]
    fn every_slot_is_long_enough(events in arb_events(), request in arb_request()) {
        for slot in query(&events, &request) {
            prop_assert!(
                slot.duration() >= request.duration(),
                "slot {} shorter than {} minutes", slot, request.duration()
            );
            prop_assert!(slot.duration() > 0, "empty slot {}", slot);
        }
    }

    #[test]
    fn every_slot_lies_within_the_day(events in arb_events(), request in arb_request()) {
        for slot in query(&events, &request) {
            prop_assert!(slot.is_within_day(), "slot {} escapes the day", slot);
        }
    }

    #[test]
    fn slots_are_sorted_and_disjoint(events in arb_events(), request in arb_request()) {
        let slots = query(&events, &request);
        for pair in slots.windows(2) {
            prop_assert!(pair[0].end() <= pair[1].start(), "{} and {} out of order", pair[0], pair[1]);
        }
    }

    #[test]
    fn no_slot_overlaps_mandatory_busy(events in arb_events(), request in arb_request()) {
        let busy = mandatory_busy(&events, &request);
        for slot in query(&events, &request) {
            for b in &busy {
                prop_assert!(!slot.overlaps(b), "slot {} overlaps busy {}", slot, b);
            }
        }
    }

    #[test]
    fn unrelated_events_leave_whole_day(
        ranges in prop::collection::vec(arb_range(), 0..10),
        duration in 0u32..MINUTES_PER_DAY,
    ) {
        let events: Vec<Event> = ranges
            .into_iter()
            .map(|r| Event::new(r, ["Z"]).unwrap())
            .collect();
        let request = MeetingRequest::new(["A"], duration).with_optional_attendees(["B"]);
        prop_assert_eq!(query(&events, &request), vec![TimeRange::WHOLE_DAY]);
    }

    #[test]
    fn query_is_idempotent(events in arb_events(), request in arb_request()) {
        prop_assert_eq!(query(&events, &request), query(&events, &request));
    }

    #[test]
    fn optional_refinement_keeps_a_slot(events in arb_events(), request in arb_request()) {
        let busy = mandatory_busy(&events, &request);
        let mandatory_only = resolve_mandatory(&busy, request.duration(), MergeStrategy::Union);
        if !mandatory_only.is_empty() {
            prop_assert!(!query(&events, &request).is_empty());
        }
    }

    #[test]
    fn refinement_only_narrows(
        busy in prop::collection::vec(arb_range(), 0..10),
        optional in prop::collection::vec(arb_range(), 0..10),
        duration in 0u32..300,
    ) {
        let mandatory_only = resolve_mandatory(&busy, duration, MergeStrategy::Union);
        for slot in refine_with_optional(&mandatory_only, &optional, duration) {
            prop_assert!(
                mandatory_only.iter().any(|m| m.contains(&slot)),
                "refined slot {} not inside any mandatory slot", slot
            );
        }
    }
}
