//! Error types for booking operations.

use thiserror::Error;

use crate::types::{Principal, TimeOfDay};

/// Every failure the engine can report. All variants are deterministic
/// input-validation failures: a failed call leaves the ledger unchanged and
/// retrying the identical call fails the identical way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The caller tried to book a meeting on their own calendar.
    #[error("cannot book a meeting with yourself")]
    SelfBooking,

    /// The requested start does not precede the requested end once both are
    /// resolved against the availability window.
    #[error("meeting start must precede meeting end")]
    InvalidInterval,

    /// The requested weekday is not offered, or the slot is not fully inside
    /// the availability window.
    #[error("slot falls outside the availability window")]
    OutsideAvailability,

    /// The slot intersects a meeting already on the ledger.
    #[error("slot overlaps an existing meeting from {start} to {end}")]
    Overlap { start: TimeOfDay, end: TimeOfDay },

    /// No meeting matches the given date, start, and end exactly.
    #[error("no meeting matches the given date and times")]
    NotFound,

    /// The caller is neither the owner (for availability/profile updates) nor
    /// the attendee (for cancellation) of the targeted resource.
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    /// The year/month/day triple does not denote a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// An hour/minute/second component is out of range.
    #[error("{0} is not a valid time of day")]
    InvalidTime(TimeOfDay),

    /// The availability fails validation (e.g. opening minute past 23:59).
    #[error("invalid availability: {0}")]
    InvalidAvailability(String),

    /// A calendar was already created for this owner.
    #[error("a calendar already exists for {0}")]
    CalendarExists(Principal),
}

/// Convenience alias used throughout booking-engine.
pub type Result<T> = std::result::Result<T, BookingError>;
