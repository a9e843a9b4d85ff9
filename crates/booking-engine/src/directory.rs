//! Owner → calendar registry.
//!
//! One calendar per owner, created exactly once. The directory is the only
//! place identities are mapped to calendar instances; every other component
//! trusts the handle the directory resolved.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::calendar::Calendar;
use crate::error::{BookingError, Result};
use crate::events::{CalendarEvent, EventSink};
use crate::types::{Availability, Principal, Profile};

/// A calendar behind its per-instance lock.
///
/// Booking, cancellation, and availability changes go through the write
/// lock, so mutations of one calendar are applied in a total order: of two
/// concurrent bookings for the same slot, exactly one succeeds and the other
/// fails with `Overlap`. Reads share the read lock and observe consistent
/// snapshots. Calendars of different owners share nothing and mutate fully
/// in parallel.
pub type SharedCalendar = Arc<RwLock<Calendar>>;

#[derive(Default)]
pub struct CalendarDirectory {
    calendars: RwLock<HashMap<Principal, SharedCalendar>>,
    sinks: Vec<EventSink>,
}

impl CalendarDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink that receives directory events and is propagated to
    /// every calendar created afterwards.
    pub fn subscribe(&mut self, sink: EventSink) {
        self.sinks.push(sink);
    }

    /// Create `owner`'s calendar. A second attempt for the same owner fails
    /// with `CalendarExists` and leaves the original untouched.
    pub fn create_calendar(
        &self,
        owner: Principal,
        profile: Profile,
        availability: Availability,
    ) -> Result<SharedCalendar> {
        let mut calendars = self.calendars.write();
        if calendars.contains_key(&owner) {
            return Err(BookingError::CalendarExists(owner));
        }

        let mut calendar = Calendar::new(owner.clone(), profile, availability)?;
        for sink in &self.sinks {
            calendar.subscribe(Arc::clone(sink));
        }

        let shared = Arc::new(RwLock::new(calendar));
        calendars.insert(owner.clone(), Arc::clone(&shared));

        info!(%owner, "calendar created");
        self.emit(&CalendarEvent::CalendarCreated { owner });
        Ok(shared)
    }

    /// Resolve an owner to their calendar, if one was created.
    pub fn calendar(&self, owner: &Principal) -> Option<SharedCalendar> {
        self.calendars.read().get(owner).cloned()
    }

    pub fn len(&self) -> usize {
        self.calendars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.read().is_empty()
    }

    fn emit(&self, event: &CalendarEvent) {
        for sink in &self.sinks {
            sink(event);
        }
    }
}
