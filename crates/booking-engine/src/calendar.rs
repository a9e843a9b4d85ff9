//! A single owner's calendar: profile, recurring availability, and the
//! per-date meeting ledger with its booking/cancellation state machine.
//!
//! Validation fully precedes mutation in every operation, so a failed call
//! leaves the ledger exactly as it was.

use std::collections::BTreeMap;

use tracing::debug;

use crate::conflict;
use crate::error::{BookingError, Result};
use crate::events::{CalendarEvent, EventSink};
use crate::freebusy::{self, FreeSlot};
use crate::types::{Availability, Date, Meeting, Principal, Profile, TimeOfDay};
use crate::window::{DayWindow, Span};

/// A booked meeting together with its span as resolved at booking time.
/// Freezing the span keeps overlap semantics stable when the owner later
/// replaces their availability.
#[derive(Debug, Clone)]
struct Entry {
    meeting: Meeting,
    span: Span,
}

pub struct Calendar {
    owner: Principal,
    profile: Profile,
    availability: Availability,
    meetings: BTreeMap<Date, Vec<Entry>>,
    sinks: Vec<EventSink>,
}

impl std::fmt::Debug for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("owner", &self.owner)
            .field("profile", &self.profile)
            .field("availability", &self.availability)
            .field("meetings", &self.meetings)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Calendar {
    /// Create a calendar owned by `owner`. Ownership never changes afterwards.
    pub fn new(owner: Principal, profile: Profile, availability: Availability) -> Result<Self> {
        availability.validate()?;
        Ok(Self {
            owner,
            profile,
            availability,
            meetings: BTreeMap::new(),
            sinks: Vec::new(),
        })
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Register a sink for this calendar's booking/cancellation events.
    pub fn subscribe(&mut self, sink: EventSink) {
        self.sinks.push(sink);
    }

    /// Owner-only wholesale replacement of the availability. Meetings already
    /// on the ledger keep the spans they were booked under.
    pub fn set_availability(
        &mut self,
        caller: &Principal,
        availability: Availability,
    ) -> Result<()> {
        if caller != &self.owner {
            return Err(BookingError::Unauthorized);
        }
        availability.validate()?;
        self.availability = availability;
        Ok(())
    }

    /// Owner-only wholesale replacement of the profile.
    pub fn set_profile(&mut self, caller: &Principal, profile: Profile) -> Result<()> {
        if caller != &self.owner {
            return Err(BookingError::Unauthorized);
        }
        self.profile = profile;
        Ok(())
    }

    /// Meetings recorded for a date, in booking order. A date with no
    /// meetings, including a date that never existed, yields an empty list,
    /// not an error.
    pub fn meetings(&self, year: i32, month: u32, day: u32) -> Vec<Meeting> {
        self.meetings
            .get(&Date::new(year, month, day))
            .map(|entries| entries.iter().map(|e| e.meeting.clone()).collect())
            .unwrap_or_default()
    }

    /// Book `[start, end)` on the given date for `caller`.
    ///
    /// Checks, in order: the caller is not the owner; the date and times are
    /// well formed; the resolved interval runs forward; the weekday is
    /// offered and the interval sits inside the availability window; nothing
    /// already booked on that date overlaps it. Only then is the meeting
    /// appended and a [`CalendarEvent::MeetingBooked`] emitted.
    pub fn book_meeting(
        &mut self,
        caller: &Principal,
        year: i32,
        month: u32,
        day: u32,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<()> {
        if caller == &self.owner {
            return Err(BookingError::SelfBooking);
        }

        let date = Date::new(year, month, day);
        let weekday = date.weekday()?;
        let window = DayWindow::of(&self.availability);
        let span = window.resolve_span(start, end)?;

        if !self.availability.available_days.contains(weekday) || !window.contains(span) {
            return Err(BookingError::OutsideAvailability);
        }

        if let Some(entries) = self.meetings.get(&date) {
            let booked: Vec<Span> = entries.iter().map(|e| e.span).collect();
            if let Some(i) = conflict::first_conflict(&booked, span) {
                return Err(BookingError::Overlap {
                    start: entries[i].meeting.start,
                    end: entries[i].meeting.end,
                });
            }
        }

        let meeting = Meeting {
            attendee: caller.clone(),
            start,
            end,
        };
        self.meetings
            .entry(date)
            .or_default()
            .push(Entry { meeting, span });

        debug!(owner = %self.owner, attendee = %caller, %date, %start, %end, "meeting booked");
        self.emit(CalendarEvent::MeetingBooked {
            owner: self.owner.clone(),
            date,
            start,
            end,
            attendee: caller.clone(),
        });
        Ok(())
    }

    /// Cancel the meeting matching exactly (date, start, end).
    ///
    /// Matching is by the wall-clock tuple the slot was booked under: a slot
    /// is identified by when it occurs, not by an id. Only the attendee who
    /// booked it may cancel; the remaining meetings keep their order.
    pub fn cancel_meeting(
        &mut self,
        caller: &Principal,
        year: i32,
        month: u32,
        day: u32,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Result<()> {
        let date = Date::new(year, month, day);
        let entries = self.meetings.get_mut(&date).ok_or(BookingError::NotFound)?;
        let i = entries
            .iter()
            .position(|e| e.meeting.start == start && e.meeting.end == end)
            .ok_or(BookingError::NotFound)?;
        if entries[i].meeting.attendee != *caller {
            return Err(BookingError::Unauthorized);
        }

        let removed = entries.remove(i);
        if entries.is_empty() {
            self.meetings.remove(&date);
        }

        debug!(owner = %self.owner, attendee = %caller, %date, %start, %end, "meeting cancelled");
        self.emit(CalendarEvent::MeetingCancelled {
            owner: self.owner.clone(),
            date,
            start,
            end,
            attendee: removed.meeting.attendee,
        });
        Ok(())
    }

    /// Unbooked gaps in the availability window for a date, in order.
    ///
    /// `InvalidDate` for a date that does not exist; a weekday the owner does
    /// not offer (or a zero-length window) yields no slots.
    pub fn free_slots(&self, year: i32, month: u32, day: u32) -> Result<Vec<FreeSlot>> {
        let date = Date::new(year, month, day);
        let weekday = date.weekday()?;
        if !self.availability.available_days.contains(weekday) {
            return Ok(Vec::new());
        }

        let window = DayWindow::of(&self.availability);
        let booked: Vec<Span> = self
            .meetings
            .get(&date)
            .map(|entries| entries.iter().map(|e| e.span).collect())
            .unwrap_or_default();
        Ok(freebusy::free_slots(window, &booked))
    }

    fn emit(&self, event: CalendarEvent) {
        for sink in &self.sinks {
            sink(&event);
        }
    }
}
