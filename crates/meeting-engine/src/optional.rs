//! Narrow mandatory free intervals so optional attendees can join too.
//!
//! Optional attendees are a soft constraint. Each optional busy interval that
//! sits entirely inside a free interval splits it into the parts before and
//! after, keeping only the parts long enough for the meeting. The last
//! remaining candidate is never given up: if splitting it would leave no
//! candidates at all, the optional interval is skipped.

use tracing::trace;

use crate::mandatory::qualifying_gap;
use crate::time_range::{order_by_start, TimeRange};

/// Refine `free` against the optional busy intervals.
///
/// Optional intervals are applied in start order, each against the result of
/// the previous step. Split pieces use exclusive endpoints on both sides:
/// `[t.start, r.start)` and `[r.end, t.end)`. Optional intervals that only
/// partially overlap a free interval leave it untouched.
///
/// If `free` is non-empty, the result is non-empty. The result is ordered by start.
pub fn refine_with_optional(
    free: &[TimeRange],
    optional_busy: &[TimeRange],
    duration: u32,
) -> Vec<TimeRange> {
    let mut busy = optional_busy.to_vec();
    busy.sort_by(order_by_start);

    let mut current = free.to_vec();
    current.sort_by(order_by_start);

    for range in &busy {
        current = refine_step(&current, range, duration);
    }
    current
}

/// Apply one optional busy interval, returning the next candidate list.
fn refine_step(candidates: &[TimeRange], busy: &TimeRange, duration: u32) -> Vec<TimeRange> {
    let Some(index) = candidates.iter().position(|slot| slot.contains(busy)) else {
        return candidates.to_vec();
    };
    let slot = candidates[index];

    let mut next: Vec<TimeRange> = candidates
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, slot)| *slot)
        .collect();
    next.extend(qualifying_gap(slot.start(), busy.start(), duration));
    next.extend(qualifying_gap(busy.end(), slot.end(), duration));

    if next.is_empty() {
        trace!(%slot, %busy, "keeping last candidate slot");
        return candidates.to_vec();
    }

    trace!(%slot, %busy, remaining = next.len(), "split slot around optional busy interval");
    next.sort_by(order_by_start);
    next
}
