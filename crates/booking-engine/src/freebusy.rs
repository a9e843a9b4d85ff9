//! Compute the unbooked gaps in a date's availability window.
//!
//! Sorts the booked spans, walks the window merging overlapping or adjacent
//! busy runs, then emits the gaps between them. The ledger already guarantees
//! one date's meetings never overlap; the merge keeps the walk correct for
//! adjacent slots and for spans handed in from other sources.

use serde::{Deserialize, Serialize};

use crate::types::TimeOfDay;
use crate::window::{DayWindow, Span, SECS_PER_DAY};

/// An unbooked stretch of the availability window.
///
/// Times are wall clock: for a window that rolls past midnight, a slot in the
/// rolled-over segment reads as an early-morning time on the following
/// calendar day, and an `end` of `00:00:00` means exactly midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub duration_secs: u32,
}

/// Gaps of `window` not covered by `booked`, in chronological order.
///
/// Spans are clipped to the window; spans entirely outside it are ignored.
/// An empty window yields no slots.
pub fn free_slots(window: DayWindow, booked: &[Span]) -> Vec<FreeSlot> {
    if window.is_empty() {
        return Vec::new();
    }

    let mut spans: Vec<Span> = booked.to_vec();
    spans.sort_by_key(|s| (s.start, s.end));

    let mut slots = Vec::new();
    let mut cursor = window.open();

    for span in spans {
        let busy_start = span.start.max(window.open());
        let busy_end = span.end.min(window.close());
        if busy_start >= busy_end {
            continue;
        }
        if cursor < busy_start {
            slots.push(make_slot(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing gap after the last busy span.
    if cursor < window.close() {
        slots.push(make_slot(cursor, window.close()));
    }

    slots
}

fn make_slot(start: u32, end: u32) -> FreeSlot {
    FreeSlot {
        start: TimeOfDay::from_seconds_of_day(start % SECS_PER_DAY),
        end: TimeOfDay::from_seconds_of_day(end % SECS_PER_DAY),
        duration_secs: end - start,
    }
}
