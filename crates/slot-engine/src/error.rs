//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// A caller contract violation: negative day or slot counts, negative
    /// prices, unknown booking status codes.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A booking record's date/time field could not be parsed.
    #[error("Cannot parse {field} {value:?}: {message}")]
    Parse {
        field: &'static str,
        value: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, SlotError>;
