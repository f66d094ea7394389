//! Detect overlaps between a prospective stay and existing bookings.
//!
//! Every existing booking occupies its checkin..checkout interval plus a
//! 60-minute cleaning buffer after checkout. The buffer applies to the stored
//! booking's end only, never to the candidate. Adjacent intervals (candidate
//! starting exactly when a buffered booking ends) are NOT conflicts.

use chrono::NaiveDateTime;

use crate::booking::{cleaning_buffer, Booking};

/// A detected clash between a candidate interval and one existing booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict {
    pub booking: Booking,
    pub overlap_minutes: i64,
}

/// Report whether a candidate interval clashes with any existing booking.
///
/// Two intervals overlap iff `candidate_start < buffered_end AND
/// candidate_end > start` — open-interval semantics, so touching endpoints
/// are free. Short-circuits on the first conflicting booking.
pub fn has_conflict(
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
    existing: &[Booking],
) -> bool {
    existing.iter().any(|booking| {
        let start = booking.check_in();
        let buffered_end = booking.check_out() + cleaning_buffer();
        candidate_start < buffered_end && candidate_end > start
    })
}

/// Find every existing booking that clashes with the candidate interval.
///
/// Same overlap rule as [`has_conflict`], but exhaustive: each conflicting
/// booking is reported along with the overlap duration against its buffered
/// interval, `min(candidate_end, buffered_end) - max(candidate_start, start)`.
pub fn find_conflicts(
    candidate_start: NaiveDateTime,
    candidate_end: NaiveDateTime,
    existing: &[Booking],
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for booking in existing {
        let start = booking.check_in();
        let buffered_end = booking.check_out() + cleaning_buffer();

        if candidate_start < buffered_end && candidate_end > start {
            let overlap_start = candidate_start.max(start);
            let overlap_end = candidate_end.min(buffered_end);
            let overlap_minutes = (overlap_end - overlap_start).num_minutes();

            conflicts.push(Conflict {
                booking: booking.clone(),
                overlap_minutes,
            });
        }
    }

    conflicts
}
