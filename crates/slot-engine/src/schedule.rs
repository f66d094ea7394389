//! Generate the two-slots-per-day schedule over a date range.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use crate::booking::SlotType;

/// One bookable slot window on a given day, with its fixed wall-clock times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotWindow {
    pub slot_type: SlotType,
    #[serde(serialize_with = "hhmm")]
    pub starts_at: NaiveTime,
    #[serde(serialize_with = "hhmm")]
    pub ends_at: NaiveTime,
}

impl SlotWindow {
    fn of(slot_type: SlotType) -> Self {
        SlotWindow {
            slot_type,
            starts_at: slot_type.starts_at(),
            ends_at: slot_type.ends_at(),
        }
    }
}

/// The two slots of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub slots: [SlotWindow; 2],
}

/// Produce one [`DaySchedule`] per day from `start` to `end` inclusive, in
/// ascending date order.
///
/// Pure function of its inputs: identical arguments yield identical output.
/// An `end` before `start` yields an empty vector rather than looping.
pub fn generate_schedule(start: NaiveDate, end: NaiveDate) -> Vec<DaySchedule> {
    let mut days = Vec::new();
    let mut cursor = start;

    while cursor <= end {
        days.push(DaySchedule {
            date: cursor,
            slots: [
                SlotWindow::of(SlotType::Morning),
                SlotWindow::of(SlotType::Evening),
            ],
        });
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break, // end of chrono's date range
        }
    }

    days
}

/// Serialize a slot boundary in the `HH:MM` form the booking store uses.
fn hhmm<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    time.format("%H:%M").to_string().serialize(serializer)
}
