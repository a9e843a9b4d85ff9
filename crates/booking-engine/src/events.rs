//! Events emitted to external consumers on successful mutation.
//!
//! Booking and cancellation each emit exactly one event; directories emit one
//! per calendar created. Sinks are plain callbacks invoked while the
//! calendar's write lock is held, so the order a sink observes is the
//! ledger's total order. Sinks must not call back into the calendar.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{Date, Principal, TimeOfDay};

/// An observable mutation of a directory or a calendar's ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarEvent {
    /// A calendar was registered for `owner`.
    CalendarCreated { owner: Principal },
    /// A meeting was appended to `owner`'s ledger.
    MeetingBooked {
        owner: Principal,
        date: Date,
        start: TimeOfDay,
        end: TimeOfDay,
        attendee: Principal,
    },
    /// A meeting was excised from `owner`'s ledger.
    MeetingCancelled {
        owner: Principal,
        date: Date,
        start: TimeOfDay,
        end: TimeOfDay,
        attendee: Principal,
    },
}

/// Callback receiving every event. A directory clones its sinks into each
/// calendar it creates, so one subscription covers the whole registry.
pub type EventSink = Arc<dyn Fn(&CalendarEvent) + Send + Sync>;
