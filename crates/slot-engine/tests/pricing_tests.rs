//! Tests for slot counting and pricing.

use slot_engine::error::SlotError;
use slot_engine::{compute_slot_counts, compute_slot_price};

#[test]
fn three_day_stay_has_six_slots() {
    let calc = compute_slot_counts(3).unwrap();

    assert_eq!(calc.total_slots, 6);
    assert_eq!(calc.morning_slots, 3);
    assert_eq!(calc.evening_slots, 3);
    assert_eq!(calc.cleaning_hours, 6);
}

#[test]
fn zero_day_stay_has_zero_slots() {
    let calc = compute_slot_counts(0).unwrap();

    assert_eq!(calc.total_slots, 0);
    assert_eq!(calc.morning_slots, 0);
    assert_eq!(calc.evening_slots, 0);
    assert_eq!(calc.cleaning_hours, 0);
}

#[test]
fn negative_day_count_rejected() {
    let err = compute_slot_counts(-1).unwrap_err();
    assert!(
        matches!(err, SlotError::InvalidArgument(_)),
        "negative day count should be an InvalidArgument, got {err:?}"
    );
}

#[test]
fn four_slots_at_2500_cost_10000() {
    let total = compute_slot_price(4, 2500.0).unwrap();
    assert_eq!(total, 10000.0);
}

#[test]
fn zero_slots_cost_nothing() {
    assert_eq!(compute_slot_price(0, 2500.0).unwrap(), 0.0);
}

#[test]
fn negative_slot_count_rejected() {
    let err = compute_slot_price(-4, 2500.0).unwrap_err();
    assert!(matches!(err, SlotError::InvalidArgument(_)));
}

#[test]
fn negative_price_rejected() {
    let err = compute_slot_price(4, -1.0).unwrap_err();
    assert!(matches!(err, SlotError::InvalidArgument(_)));
}

#[test]
fn non_finite_price_rejected() {
    assert!(compute_slot_price(4, f64::NAN).is_err());
    assert!(compute_slot_price(4, f64::INFINITY).is_err());
}
