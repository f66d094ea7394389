//! Derive the status of a single slot from the booking list.
//!
//! Status is recomputed from scratch on every query; nothing is stored.
//! The reference time is always an explicit parameter — callers that want
//! wall-clock "now" inject it at their own boundary.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::booking::{cleaning_buffer, Booking, BookingStatus, SlotType, EVENING_START_HOUR};

/// Derived availability of one slot, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Booked,
    Cleaning,
    Blocked,
}

/// Compute the status of the `slot_type` slot on `date`, given the bookings
/// for the unit and a reference time.
///
/// First matching rule wins:
/// 1. **Blocked** — the slot has elapsed. Any slot whose date is before the
///    reference date is blocked; a morning slot on the reference date is also
///    blocked once the reference hour reaches 18 (the same day's evening slot
///    has begun).
/// 2. **Booked** — some booking checks in on `date` for this slot type with
///    status `Upcoming`.
/// 3. **Cleaning** — some `Complete` booking checked out within the 60-minute
///    cleaning buffer before the slot's start.
/// 4. **Available** otherwise.
///
/// Cancelled bookings never influence the outcome.
pub fn get_slot_status(
    date: NaiveDate,
    slot_type: SlotType,
    bookings: &[Booking],
    reference: NaiveDateTime,
) -> SlotStatus {
    if has_elapsed(date, slot_type, reference) {
        return SlotStatus::Blocked;
    }

    // Booked wins over cleaning, so scan for an upcoming checkin first.
    for booking in bookings {
        if booking.check_in_date == date && booking.slot_type == slot_type {
            match booking.status {
                BookingStatus::Upcoming => return SlotStatus::Booked,
                BookingStatus::Complete | BookingStatus::Cancelled => {}
            }
        }
    }

    let slot_start = slot_type.start_on(date);
    for booking in bookings {
        match booking.status {
            BookingStatus::Complete => {
                let since_checkout = slot_start - booking.check_out();
                if since_checkout > TimeDelta::zero() && since_checkout <= cleaning_buffer() {
                    return SlotStatus::Cleaning;
                }
            }
            BookingStatus::Upcoming | BookingStatus::Cancelled => {}
        }
    }

    SlotStatus::Available
}

/// Whether the slot has definitely elapsed relative to the reference time.
///
/// Decision table (slot date vs. reference date, reference hour):
///
/// | slot date   | morning            | evening |
/// |-------------|--------------------|---------|
/// | before ref  | elapsed            | elapsed |
/// | equal, <18h | not elapsed        | not elapsed |
/// | equal, ≥18h | elapsed            | not elapsed |
/// | after ref   | not elapsed        | not elapsed |
fn has_elapsed(date: NaiveDate, slot_type: SlotType, reference: NaiveDateTime) -> bool {
    if date < reference.date() {
        return true;
    }
    match slot_type {
        SlotType::Morning => date == reference.date() && reference.hour() >= EVENING_START_HOUR,
        SlotType::Evening => false,
    }
}
