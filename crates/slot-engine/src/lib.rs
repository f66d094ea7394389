//! # slot-engine
//!
//! Deterministic slot availability and conflict detection for farm bookings.
//!
//! A farm day has two 12-hour slots — morning (06:00–18:00) and evening
//! (18:00–06:00 next day). Given the bookings for a unit and an explicit
//! reference time, this crate derives slot counts, prices, schedules,
//! conflicts against a prospective stay, and per-slot status. Every function
//! is pure and synchronous: no I/O, no clock reads, no shared state, so
//! concurrent callers need no coordination.
//!
//! ## Modules
//!
//! - [`booking`] — booking records, slot types, status codes, parsing
//! - [`pricing`] — slot counts and price for a stay length
//! - [`conflict`] — overlap detection with the cleaning buffer
//! - [`schedule`] — day-by-day slot schedule over a date range
//! - [`status`] — available/booked/cleaning/blocked derivation
//! - [`error`] — error types

pub mod booking;
pub mod conflict;
pub mod error;
pub mod pricing;
pub mod schedule;
pub mod status;

pub use booking::{Booking, BookingRecord, BookingStatus, SlotType, CLEANING_BUFFER_MINUTES};
pub use conflict::{find_conflicts, has_conflict, Conflict};
pub use error::SlotError;
pub use pricing::{compute_slot_counts, compute_slot_price, SlotCalculation};
pub use schedule::{generate_schedule, DaySchedule, SlotWindow};
pub use status::{get_slot_status, SlotStatus};
