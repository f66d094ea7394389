//! Integration tests for the `slots` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the quote, schedule,
//! status and conflicts subcommands through the actual binary, including
//! stdin piping, file input and exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the bookings.json fixture.
fn bookings_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bookings.json")
}

/// Helper: read the bookings.json fixture as a string.
fn bookings_json() -> String {
    std::fs::read_to_string(bookings_path()).expect("bookings.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn quote_reports_slot_counts() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["quote", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalSlots\": 6"))
        .stdout(predicate::str::contains("\"morningSlots\": 3"))
        .stdout(predicate::str::contains("\"cleaningHours\": 6"));
}

#[test]
fn quote_with_price_includes_total() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["quote", "--days", "2", "--price-per-slot", "2500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalPrice\": 10000"));
}

#[test]
fn quote_rejects_negative_days() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["quote", "--days=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedule subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn schedule_lists_each_day_with_both_windows() {
    let output = Command::cargo_bin("slots")
        .unwrap()
        .args(["schedule", "--start", "2024-06-24", "--end", "2024-06-26"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let days: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(days.as_array().unwrap().len(), 3);
    assert_eq!(days[0]["date"], "2024-06-24");
    assert_eq!(days[0]["slots"][0]["startsAt"], "06:00");
    assert_eq!(days[2]["slots"][1]["slotType"], "evening");
}

#[test]
fn schedule_rejects_malformed_date() {
    Command::cargo_bin("slots")
        .unwrap()
        .args(["schedule", "--start", "junk", "--end", "2024-06-26"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot parse"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Status subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn status_reports_booked_slot_from_file() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "status",
            "--date",
            "2024-06-25",
            "--slot",
            "morning",
            "--bookings",
            bookings_path(),
            "--at",
            "2024-06-25T05:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"booked\""));
}

#[test]
fn status_reports_blocked_past_slot_via_stdin() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "status",
            "--date",
            "2024-06-20",
            "--slot",
            "evening",
            "--at",
            "2024-06-25T10:00",
        ])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"blocked\""));
}

#[test]
fn status_rejects_unknown_slot_type() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "status",
            "--date",
            "2024-06-25",
            "--slot",
            "midday",
            "--at",
            "2024-06-25T10:00",
        ])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown slot type"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conflicts subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_exit_code_one_when_stay_clashes() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "conflicts",
            "--start",
            "2024-06-25T06:00",
            "--end",
            "2024-06-25T18:00",
        ])
        .write_stdin(bookings_json())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"overlapMinutes\""));
}

#[test]
fn conflicts_exit_code_zero_when_stay_is_clear() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "conflicts",
            "--start",
            "2024-06-27T06:00",
            "--end",
            "2024-06-27T18:00",
            "--bookings",
            bookings_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn conflicts_rejects_malformed_bookings() {
    Command::cargo_bin("slots")
        .unwrap()
        .args([
            "conflicts",
            "--start",
            "2024-06-25T06:00",
            "--end",
            "2024-06-25T18:00",
        ])
        .write_stdin(r#"[{"farmId": 1}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse bookings JSON"));
}
