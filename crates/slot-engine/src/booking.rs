//! Booking records and the fixed slot model.
//!
//! A day has exactly two 12-hour slots: morning (06:00–18:00) and evening
//! (18:00–06:00 the next day). Bookings are owned and persisted by the
//! external booking store; this crate only reads them. The store sends
//! camelCase JSON with string dates/times and numeric status codes — that
//! wire shape is [`BookingRecord`], which converts fallibly into the typed
//! [`Booking`].

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Minutes of turnover cleaning after every completed checkout.
pub const CLEANING_BUFFER_MINUTES: i64 = 60;

/// Local hour at which the morning slot begins.
pub const MORNING_START_HOUR: u32 = 6;

/// Local hour at which the evening slot begins (and the morning slot ends).
pub const EVENING_START_HOUR: u32 = 18;

/// The cleaning buffer as a duration.
pub fn cleaning_buffer() -> TimeDelta {
    TimeDelta::minutes(CLEANING_BUFFER_MINUTES)
}

fn on_the_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).expect("hour is within 0..24")
}

/// Which half of the day a slot covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Morning,
    Evening,
}

impl SlotType {
    /// Wall-clock time at which this slot begins.
    pub fn starts_at(self) -> NaiveTime {
        match self {
            SlotType::Morning => on_the_hour(MORNING_START_HOUR),
            SlotType::Evening => on_the_hour(EVENING_START_HOUR),
        }
    }

    /// Wall-clock time at which this slot ends. The evening slot ends at
    /// 06:00 on the *following* calendar day; it is one continuous interval
    /// across midnight, never two half-days.
    pub fn ends_at(self) -> NaiveTime {
        match self {
            SlotType::Morning => on_the_hour(EVENING_START_HOUR),
            SlotType::Evening => on_the_hour(MORNING_START_HOUR),
        }
    }

    /// The datetime at which this slot starts on the given day.
    pub fn start_on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.starts_at())
    }
}

/// Lifecycle state of a booking, owned by the external booking subsystem.
///
/// The booking store persists these as numeric codes (0=Complete, 1=Upcoming,
/// 2=Cancelled); the codes never appear outside the wire conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Complete,
    Upcoming,
    Cancelled,
}

impl BookingStatus {
    /// The numeric code the booking store uses for this status.
    pub fn code(self) -> u8 {
        match self {
            BookingStatus::Complete => 0,
            BookingStatus::Upcoming => 1,
            BookingStatus::Cancelled => 2,
        }
    }
}

impl TryFrom<u8> for BookingStatus {
    type Error = SlotError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(BookingStatus::Complete),
            1 => Ok(BookingStatus::Upcoming),
            2 => Ok(BookingStatus::Cancelled),
            other => Err(SlotError::InvalidArgument(format!(
                "unknown booking status code {other} (expected 0, 1 or 2)"
            ))),
        }
    }
}

/// A booking as this crate reasons about it: typed dates and times, named
/// status. Read-only input to every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub farm_id: u64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub slot_type: SlotType,
    pub status: BookingStatus,
}

impl Booking {
    /// The moment the guest checks in.
    pub fn check_in(&self) -> NaiveDateTime {
        self.check_in_date.and_time(self.check_in_time)
    }

    /// The moment the guest checks out. For evening bookings the checkout
    /// date is already the following calendar day, so this stays a single
    /// continuous interval with [`check_in`](Self::check_in).
    pub fn check_out(&self) -> NaiveDateTime {
        self.check_out_date.and_time(self.check_out_time)
    }
}

/// The wire shape of a booking record as the booking store emits it:
/// `YYYY-MM-DD` dates, `HH:MM` times, numeric status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub farm_id: u64,
    pub check_in_date: String,
    pub check_out_date: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub slot_type: SlotType,
    pub status: u8,
}

impl TryFrom<BookingRecord> for Booking {
    type Error = SlotError;

    fn try_from(record: BookingRecord) -> Result<Self> {
        let booking = Booking {
            farm_id: record.farm_id,
            check_in_date: parse_date("checkInDate", &record.check_in_date)?,
            check_out_date: parse_date("checkOutDate", &record.check_out_date)?,
            check_in_time: parse_time("checkInTime", &record.check_in_time)?,
            check_out_time: parse_time("checkOutTime", &record.check_out_time)?,
            slot_type: record.slot_type,
            status: BookingStatus::try_from(record.status)?,
        };
        if booking.check_out() <= booking.check_in() {
            return Err(SlotError::InvalidArgument(format!(
                "checkout {} is not after checkin {}",
                booking.check_out(),
                booking.check_in()
            )));
        }
        Ok(booking)
    }
}

/// Parse an ISO `YYYY-MM-DD` date. Malformed input fails fast, never coerces.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| SlotError::Parse {
        field,
        value: value.to_string(),
        message: e.to_string(),
    })
}

/// Parse an `HH:MM` time (seconds tolerated when present).
pub fn parse_time(field: &'static str, value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| SlotError::Parse {
            field,
            value: value.to_string(),
            message: e.to_string(),
        })
}

/// Parse an ISO `YYYY-MM-DDTHH:MM[:SS]` local datetime.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| SlotError::Parse {
            field,
            value: value.to_string(),
            message: e.to_string(),
        })
}
