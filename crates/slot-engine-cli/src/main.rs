//! `slots` CLI — query the slot availability engine from the command line.
//!
//! The system clock enters the program here and only here: every library call
//! takes an explicit reference time, and `--at` overrides the default of
//! "now" for reproducible queries.
//!
//! ## Usage
//!
//! ```sh
//! # Slot counts and price for a 3-day stay
//! slots quote --days 3 --price-per-slot 2500
//!
//! # Day-by-day slot schedule
//! slots schedule --start 2024-06-24 --end 2024-06-26
//!
//! # Status of one slot, bookings from a file, pinned reference time
//! slots status --date 2024-06-25 --slot morning \
//!     --bookings bookings.json --at 2024-06-25T10:00
//!
//! # Check a prospective stay for conflicts (bookings via stdin)
//! cat bookings.json | slots conflicts \
//!     --start 2024-06-25T06:00 --end 2024-06-25T18:00
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Read};
use std::process;

use slot_engine::booking::{parse_date, parse_datetime};
use slot_engine::{
    compute_slot_counts, compute_slot_price, find_conflicts, generate_schedule, get_slot_status,
    Booking, BookingRecord, SlotType,
};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "BookMyFarm slot availability engine CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slot counts (and optionally the price) for a stay length
    Quote {
        /// Number of days in the stay
        #[arg(long)]
        days: i64,
        /// Price per slot; when given, the total price is included
        #[arg(long)]
        price_per_slot: Option<f64>,
    },
    /// Day-by-day slot schedule over an inclusive date range
    Schedule {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: String,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        end: String,
    },
    /// Status of one slot: available, booked, cleaning or blocked
    Status {
        /// Day of the slot (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Which slot: "morning" or "evening"
        #[arg(long)]
        slot: String,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// Reference time (YYYY-MM-DDTHH:MM); defaults to the system clock
        #[arg(long)]
        at: Option<String>,
    },
    /// List bookings conflicting with a prospective stay
    Conflicts {
        /// Candidate checkin (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,
        /// Candidate checkout (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        end: String,
        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            days,
            price_per_slot,
        } => {
            let calc = compute_slot_counts(days)?;
            let mut out = serde_json::to_value(calc)?;
            if let Some(price) = price_per_slot {
                let total = compute_slot_price(calc.total_slots, price)?;
                out["totalPrice"] = json!(total);
            }
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Schedule { start, end } => {
            let start = parse_date("start", &start)?;
            let end = parse_date("end", &end)?;
            let schedule = generate_schedule(start, end);
            println!("{}", serde_json::to_string_pretty(&schedule)?);
        }
        Commands::Status {
            date,
            slot,
            bookings,
            at,
        } => {
            let date = parse_date("date", &date)?;
            let slot_type = parse_slot_type(&slot)?;
            let bookings = load_bookings(bookings.as_deref())?;
            // The one place wall-clock time is allowed in.
            let reference = match at {
                Some(at) => parse_datetime("at", &at)?,
                None => chrono::Local::now().naive_local(),
            };
            let status = get_slot_status(date, slot_type, &bookings, reference);
            let out = json!({
                "date": date.to_string(),
                "slot": slot,
                "status": status,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::Conflicts {
            start,
            end,
            bookings,
        } => {
            let candidate_start = parse_datetime("start", &start)?;
            let candidate_end = parse_datetime("end", &end)?;
            let bookings = load_bookings(bookings.as_deref())?;

            let conflicts = find_conflicts(candidate_start, candidate_end, &bookings);
            let rows: Vec<serde_json::Value> = conflicts
                .iter()
                .map(|c| {
                    json!({
                        "farmId": c.booking.farm_id,
                        "checkIn": c.booking.check_in().format("%Y-%m-%dT%H:%M").to_string(),
                        "checkOut": c.booking.check_out().format("%Y-%m-%dT%H:%M").to_string(),
                        "overlapMinutes": c.overlap_minutes,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);

            if !conflicts.is_empty() {
                process::exit(1);
            }
        }
    }

    Ok(())
}

fn parse_slot_type(slot: &str) -> Result<SlotType> {
    match slot {
        "morning" => Ok(SlotType::Morning),
        "evening" => Ok(SlotType::Evening),
        other => anyhow::bail!("Unknown slot type: '{}'. Expected morning or evening", other),
    }
}

/// Read booking records from a file (or stdin) and convert them into typed
/// bookings, failing fast on the first malformed record.
fn load_bookings(path: Option<&str>) -> Result<Vec<Booking>> {
    let raw = read_input(path)?;
    let records: Vec<BookingRecord> =
        serde_json::from_str(&raw).context("Failed to parse bookings JSON")?;
    records
        .into_iter()
        .map(|record| Booking::try_from(record).context("Malformed booking record"))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
