//! # booking-engine
//!
//! Recurring weekly availability and meeting-slot booking with airtight
//! conflict detection.
//!
//! A calendar owner publishes a recurring weekly availability window: a set
//! of weekdays, an opening minute-of-day, and a duration that may cross
//! midnight. Other parties book, list, and cancel discrete meeting slots
//! against it. The engine guarantees that no two accepted meetings on one
//! calendar overlap and that an owner can never book themself. Transport,
//! authentication, and persistence live outside: callers pass an
//! already-authenticated [`Principal`] into every mutating operation and the
//! engine performs authorization comparisons only.
//!
//! ## Quick start
//!
//! ```rust
//! use booking_engine::{Availability, CalendarDirectory, DaySet, Principal, Profile, TimeOfDay};
//! use chrono::Weekday;
//!
//! let directory = CalendarDirectory::new();
//! let alice = Principal::from("alice");
//! let bob = Principal::from("bob");
//!
//! let availability = Availability {
//!     available_days: DaySet::from_days(&[Weekday::Mon, Weekday::Tue]),
//!     location: "Remote".into(),
//!     time_zone: "Europe/London".into(),
//!     earliest_time_in_minutes: 9 * 60,
//!     minutes_available: 8 * 60,
//! };
//! let calendar = directory
//!     .create_calendar(alice.clone(), Profile::default(), availability)
//!     .unwrap();
//!
//! // 2026-08-03 is a Monday.
//! calendar
//!     .write()
//!     .book_meeting(&bob, 2026, 8, 3, TimeOfDay::hm(10, 0), TimeOfDay::hm(11, 0))
//!     .unwrap();
//! assert_eq!(calendar.read().meetings(2026, 8, 3).len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`directory`] — owner identity → calendar instance, created once
//! - [`calendar`] — per-owner profile, availability, and meeting ledger
//! - [`window`] — minute-of-day window math with midnight rollover
//! - [`conflict`] — half-open interval overlap tests
//! - [`freebusy`] — unbooked gaps in a date's availability window
//! - [`events`] — booking/cancellation events for external consumers
//! - [`error`] — error types

pub mod calendar;
pub mod conflict;
pub mod directory;
pub mod error;
pub mod events;
pub mod freebusy;
pub mod types;
pub mod window;

pub use calendar::Calendar;
pub use directory::{CalendarDirectory, SharedCalendar};
pub use error::BookingError;
pub use events::{CalendarEvent, EventSink};
pub use freebusy::FreeSlot;
pub use types::{Availability, DaySet, Date, Meeting, Principal, Profile, TimeOfDay};
pub use window::{DayWindow, Span};
