//! Overlap tests between a proposed slot and booked meetings.
//!
//! Adjacent slots (one ends exactly when the next starts) are NOT conflicts.

use crate::window::Span;

/// Two half-open spans overlap iff `a.start < b.end && b.start < a.end`.
/// This excludes the adjacent case where `a.end == b.start`.
pub fn spans_overlap(a: Span, b: Span) -> bool {
    a.start < b.end && b.start < a.end
}

/// Index of the first booked span that overlaps `candidate`, scanning in
/// booking order.
pub fn first_conflict(booked: &[Span], candidate: Span) -> Option<usize> {
    booked.iter().position(|&b| spans_overlap(b, candidate))
}
