//! Slot counting and pricing for a requested stay length.

use serde::Serialize;

use crate::error::{Result, SlotError};

/// Derived slot counts for a stay, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCalculation {
    pub total_slots: i64,
    pub morning_slots: i64,
    pub evening_slots: i64,
    pub cleaning_hours: i64,
}

/// Compute slot counts for a stay of `days` days.
///
/// Each day contributes exactly two slots (one morning, one evening), and one
/// cleaning hour is charged per slot.
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if `days` is negative.
pub fn compute_slot_counts(days: i64) -> Result<SlotCalculation> {
    if days < 0 {
        return Err(SlotError::InvalidArgument(format!(
            "day count must be non-negative, got {days}"
        )));
    }
    Ok(SlotCalculation {
        total_slots: days * 2,
        morning_slots: days,
        evening_slots: days,
        cleaning_hours: days * 2,
    })
}

/// Compute the total price for `number_of_slots` slots at `price_per_slot`.
///
/// Pure multiplication; the result is non-negative whenever the inputs are.
///
/// # Errors
/// Returns `SlotError::InvalidArgument` if the slot count is negative or the
/// price is negative or not finite.
pub fn compute_slot_price(number_of_slots: i64, price_per_slot: f64) -> Result<f64> {
    if number_of_slots < 0 {
        return Err(SlotError::InvalidArgument(format!(
            "slot count must be non-negative, got {number_of_slots}"
        )));
    }
    if !price_per_slot.is_finite() || price_per_slot < 0.0 {
        return Err(SlotError::InvalidArgument(format!(
            "price per slot must be a non-negative number, got {price_per_slot}"
        )));
    }
    Ok(number_of_slots as f64 * price_per_slot)
}
