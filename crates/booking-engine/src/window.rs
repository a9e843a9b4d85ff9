//! Minute-of-day window math with midnight rollover.
//!
//! Both availability containment and interval ordering must agree on how a
//! window that crosses midnight is read, so every piece of that arithmetic
//! lives here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};
use crate::types::{Availability, TimeOfDay};

pub const SECS_PER_DAY: u32 = 86_400;

/// A resolved half-open interval, in seconds from the requested date's
/// midnight. `end` (and `start`, for a slot wholly inside the rolled-over
/// segment) may exceed [`SECS_PER_DAY`] when the slot runs on the following
/// calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn duration_secs(&self) -> u32 {
        self.end - self.start
    }
}

/// The availability window projected onto a single date: it opens at a fixed
/// second-of-day and runs for a fixed length, possibly past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    open: u32,
    len: u32,
}

impl DayWindow {
    pub fn of(availability: &Availability) -> Self {
        Self {
            open: u32::from(availability.earliest_time_in_minutes) * 60,
            len: availability.minutes_available * 60,
        }
    }

    /// Second-of-day the window opens.
    pub fn open(&self) -> u32 {
        self.open
    }

    /// Second the window closes, measured from the same midnight as
    /// [`open`](Self::open); exceeds [`SECS_PER_DAY`] when the window rolls
    /// over.
    pub fn close(&self) -> u32 {
        self.open + self.len
    }

    /// A zero-length window accepts nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the window spills past midnight into the following day.
    pub fn rolls_over(&self) -> bool {
        self.close() > SECS_PER_DAY
    }

    /// Resolve a wall-clock time against this window. For a rolled-over
    /// window, times before the opening belong to the following-day segment
    /// and are shifted forward by one day; the caller's date stays the date
    /// the window opened on.
    pub fn resolve(&self, time: TimeOfDay) -> Result<u32> {
        let secs = time.seconds_from_midnight()?;
        if self.rolls_over() && secs < self.open {
            Ok(secs + SECS_PER_DAY)
        } else {
            Ok(secs)
        }
    }

    /// Resolve a start/end pair into a forward span. `InvalidInterval` when
    /// the resolved start does not precede the resolved end, which also
    /// covers raw `start > end` pairs on windows that never cross midnight.
    pub fn resolve_span(&self, start: TimeOfDay, end: TimeOfDay) -> Result<Span> {
        let start = self.resolve(start)?;
        let end = self.resolve(end)?;
        if start >= end {
            return Err(BookingError::InvalidInterval);
        }
        Ok(Span { start, end })
    }

    /// Half-open containment: a span may start exactly at the opening and may
    /// end exactly at the close.
    pub fn contains(&self, span: Span) -> bool {
        span.start >= self.open && span.end <= self.close()
    }
}
