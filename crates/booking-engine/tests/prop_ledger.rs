//! Property-based tests for the meeting ledger using proptest.
//!
//! These verify invariants that must hold for *any* sequence of booking
//! attempts, not just the specific examples in `booking_tests.rs`.

use booking_engine::{
    Availability, BookingError, Calendar, DaySet, Meeting, Principal, Profile, TimeOfDay,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Fixture — every day offered, window 09:30–17:30, so any generated slot is
// judged purely on interval math.
// ---------------------------------------------------------------------------

fn availability() -> Availability {
    Availability {
        available_days: DaySet::ALL,
        location: String::new(),
        time_zone: "UTC".to_string(),
        earliest_time_in_minutes: 9 * 60 + 30,
        minutes_available: 8 * 60,
    }
}

fn calendar() -> Calendar {
    Calendar::new(Principal::from("owner"), Profile::default(), availability()).unwrap()
}

fn time(minute: u16) -> TimeOfDay {
    TimeOfDay::hm((minute / 60) as u8, (minute % 60) as u8)
}

fn span_minutes(meeting: &Meeting) -> (u16, u16) {
    let start = u16::from(meeting.start.hour) * 60 + u16::from(meeting.start.minute);
    let end = u16::from(meeting.end.hour) * 60 + u16::from(meeting.end.minute);
    (start, end)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A forward slot inside the 09:30 (570) – 17:30 (1050) window.
fn arb_slot() -> impl Strategy<Value = (u16, u16)> {
    (570u16..1050, 15u16..=120).prop_map(|(start, dur)| (start, (start + dur).min(1050)))
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: the ledger never admits an overlap, acceptance matches a naive
// interval model, and retrieval preserves acceptance order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ledger_never_admits_overlap(slots in prop::collection::vec(arb_slot(), 1..40)) {
        let mut cal = calendar();
        let mut model: Vec<(u16, u16)> = Vec::new();

        for (i, (start, end)) in slots.into_iter().enumerate() {
            let attendee = Principal::from(format!("guest{i}"));
            let result = cal.book_meeting(&attendee, 2021, 10, 3, time(start), time(end));
            let clashes = model.iter().any(|&(s, e)| s < end && start < e);

            match result {
                Ok(()) => {
                    prop_assert!(!clashes, "accepted [{start}, {end}) despite a clash");
                    model.push((start, end));
                }
                Err(BookingError::Overlap { .. }) => {
                    prop_assert!(clashes, "rejected [{start}, {end}) with no clash");
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }

            // Ledger-wide invariant, checked after every mutation.
            let booked = cal.meetings(2021, 10, 3);
            for a in 0..booked.len() {
                for b in a + 1..booked.len() {
                    let (s1, e1) = span_minutes(&booked[a]);
                    let (s2, e2) = span_minutes(&booked[b]);
                    prop_assert!(
                        !(s1 < e2 && s2 < e1),
                        "ledger holds overlapping meetings [{s1}, {e1}) and [{s2}, {e2})"
                    );
                }
            }
        }

        // Retrieval order is acceptance order.
        let booked = cal.meetings(2021, 10, 3);
        prop_assert_eq!(booked.len(), model.len());
        for (meeting, &expected) in booked.iter().zip(model.iter()) {
            prop_assert_eq!(span_minutes(meeting), expected);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: cancellation returns the slot to a bookable state
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn cancelled_slot_is_bookable_again((start, end) in arb_slot()) {
        let mut cal = calendar();
        let bob = Principal::from("bob");

        cal.book_meeting(&bob, 2021, 10, 3, time(start), time(end)).unwrap();
        cal.cancel_meeting(&bob, 2021, 10, 3, time(start), time(end)).unwrap();
        prop_assert!(cal.meetings(2021, 10, 3).is_empty());

        // A different attendee can claim the freed slot.
        let carol = Principal::from("carol");
        prop_assert!(cal
            .book_meeting(&carol, 2021, 10, 3, time(start), time(end))
            .is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 3: the owner can never book themself, whatever the slot
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn owner_never_books_themself(start in 0u16..1440, end in 0u16..1440) {
        let mut cal = calendar();
        let owner = Principal::from("owner");

        let result = cal.book_meeting(&owner, 2021, 10, 3, time(start), time(end));
        prop_assert_eq!(result.unwrap_err(), BookingError::SelfBooking);
    }
}

// ---------------------------------------------------------------------------
// Property 4: no input combination panics — malformed dates and times are
// errors, never crashes
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn operations_never_panic(
        year in 1900i32..2200,
        month in 0u32..=14,
        day in 0u32..=35,
        start_hour in 0u8..=30,
        start_minute in 0u8..=70,
        end_hour in 0u8..=30,
        end_minute in 0u8..=70,
    ) {
        let mut cal = calendar();
        let bob = Principal::from("bob");
        let start = TimeOfDay::hm(start_hour, start_minute);
        let end = TimeOfDay::hm(end_hour, end_minute);

        // An Err result is acceptable; a panic is not.
        let _ = cal.book_meeting(&bob, year, month, day, start, end);
        let _ = cal.cancel_meeting(&bob, year, month, day, start, end);
        let _ = cal.meetings(year, month, day);
        let _ = cal.free_slots(year, month, day);
    }
}
