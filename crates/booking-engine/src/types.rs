//! Core data model: principals, dates, times of day, weekday sets, profiles.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Opaque, already-authenticated caller identity.
///
/// The engine never authenticates anyone; transport hands in a principal and
/// the engine only compares them (attendee vs. owner, canceller vs. attendee).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An arbitrary subset of the seven weekdays, stored as a bitmask with
/// `Sunday = 1 << 0` through `Saturday = 1 << 6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DaySet(u8);

impl DaySet {
    /// No days: the owner accepts no meetings.
    pub const NONE: DaySet = DaySet(0);
    /// All seven days.
    pub const ALL: DaySet = DaySet(0b0111_1111);

    pub fn from_days(days: &[Weekday]) -> Self {
        let mut set = Self::NONE;
        for &day in days {
            set.insert(day);
        }
        set
    }

    /// Reconstruct from a raw bitmask. `None` when a bit above Saturday is set.
    pub fn from_bits(bits: u8) -> Option<Self> {
        ((bits & !Self::ALL.0) == 0).then_some(Self(bits))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= Self::bit(day);
    }

    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !Self::bit(day);
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(day: Weekday) -> u8 {
        match day {
            Weekday::Sun => 1 << 0,
            Weekday::Mon => 1 << 1,
            Weekday::Tue => 1 << 2,
            Weekday::Wed => 1 << 3,
            Weekday::Thu => 1 << 4,
            Weekday::Fri => 1 << 5,
            Weekday::Sat => 1 << 6,
        }
    }
}

/// A caller-supplied calendar date. Stored exactly as requested; the only
/// calendar math ever performed on it is weekday derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// The weekday of this date, or `InvalidDate` when the components do not
    /// form a real date (e.g. February 30th).
    pub fn weekday(&self) -> Result<Weekday> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|d| d.weekday())
            .ok_or(BookingError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A wall-clock time of day. Callers that think in hour/minute pairs leave
/// `second` at zero; the engine compares at full second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    pub const fn hm(hour: u8, minute: u8) -> Self {
        Self {
            hour,
            minute,
            second: 0,
        }
    }

    pub const fn hms(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Seconds since midnight, or `InvalidTime` when a component is out of
    /// range. Validation happens here, at the operation boundary, so the
    /// struct itself stays plain data.
    pub fn seconds_from_midnight(&self) -> Result<u32> {
        if self.hour > 23 || self.minute > 59 || self.second > 59 {
            return Err(BookingError::InvalidTime(*self));
        }
        Ok(u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second))
    }

    /// Inverse of [`seconds_from_midnight`](Self::seconds_from_midnight) for
    /// `secs < 86400`.
    pub fn from_seconds_of_day(secs: u32) -> Self {
        debug_assert!(secs < 86_400);
        Self {
            hour: (secs / 3600) as u8,
            minute: (secs % 3600 / 60) as u8,
            second: (secs % 60) as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Public metadata attached to a calendar. Free text throughout; mutable by
/// the owner only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub username: String,
    pub picture: String,
    pub url: String,
    pub description: String,
}

/// Recurring weekly availability: on each day in `available_days`, the owner
/// accepts meetings from `earliest_time_in_minutes` for `minutes_available`
/// minutes. The window may cross midnight into the following day.
///
/// `time_zone` is an opaque label carried for display; the engine never
/// parses or converts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub available_days: DaySet,
    pub location: String,
    pub time_zone: String,
    /// Minute-of-day the window opens, in `[0, 1439]`.
    pub earliest_time_in_minutes: u16,
    /// Window length in minutes, at most 1440. Zero means no meetings are
    /// accepted; `earliest + length` past 1440 crosses midnight.
    pub minutes_available: u32,
}

impl Availability {
    pub fn validate(&self) -> Result<()> {
        if self.earliest_time_in_minutes > 1439 {
            return Err(BookingError::InvalidAvailability(format!(
                "earliest_time_in_minutes {} is past the end of the day",
                self.earliest_time_in_minutes
            )));
        }
        if self.minutes_available > 1440 {
            return Err(BookingError::InvalidAvailability(format!(
                "minutes_available {} is longer than a day; consecutive daily \
                 windows would overlap",
                self.minutes_available
            )));
        }
        Ok(())
    }
}

/// A booked slot on one calendar. Recorded under the caller-supplied date,
/// which keys the ledger; the struct itself carries what `meetings` returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub attendee: Principal,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}
