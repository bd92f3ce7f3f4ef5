//! Free intervals for mandatory attendees.
//!
//! Sorts the busy intervals by start, sweeps them while tracking the current
//! merged busy block, and emits the gaps between blocks that are long enough
//! to hold the meeting.

use serde::{Deserialize, Serialize};

use crate::time_range::{order_by_start, TimeRange, MINUTES_PER_DAY, START_OF_DAY};

/// How the sweep extends the current busy block when intervals overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeStrategy {
    /// Track the running maximum end of the merged block.
    #[default]
    Union,
    /// Replace the block with the most recently started overlapping interval.
    ///
    /// An empty interval sharing the block's start does not overlap the block
    /// and replaces it, so the block end moves backwards and time that is
    /// still busy can be reported as free. Kept for callers that must
    /// reproduce historical results.
    LatestStart,
}

/// Compute the gaps between mandatory busy intervals across the whole day.
///
/// Every returned range is non-empty, at least `duration` minutes long, and
/// the list is ordered by start. A `duration` of a whole day or more always
/// yields an empty list.
pub fn resolve_mandatory(
    busy: &[TimeRange],
    duration: u32,
    strategy: MergeStrategy,
) -> Vec<TimeRange> {
    if duration >= TimeRange::WHOLE_DAY.duration() {
        return Vec::new();
    }

    let mut sorted = busy.to_vec();
    sorted.sort_by(order_by_start);

    if sorted.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    match strategy {
        MergeStrategy::Union => sweep_union(&sorted, duration),
        MergeStrategy::LatestStart => sweep_latest_start(&sorted, duration),
    }
}

fn sweep_union(sorted: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut free = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in sorted {
        free.extend(qualifying_gap(cursor, range.start(), duration));
        cursor = cursor.max(range.end());
    }

    free.extend(qualifying_gap(cursor, MINUTES_PER_DAY, duration));
    free
}

fn sweep_latest_start(sorted: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    let mut free = Vec::new();
    let mut block = sorted[0];
    free.extend(qualifying_gap(START_OF_DAY, block.start(), duration));

    for range in &sorted[1..] {
        if !block.overlaps(range) {
            free.extend(qualifying_gap(block.end(), range.start(), duration));
            block = *range;
        } else if !block.contains(range) {
            block = *range;
        }
    }

    free.extend(qualifying_gap(block.end(), MINUTES_PER_DAY, duration));
    free
}

/// The gap `[start, end)` if it is non-empty and holds at least `duration` minutes.
pub(crate) fn qualifying_gap(start: u32, end: u32, duration: u32) -> Option<TimeRange> {
    if end <= start {
        return None;
    }
    TimeRange::from_start_end(start, end, false)
        .ok()
        .filter(|gap| gap.duration() >= duration)
}
