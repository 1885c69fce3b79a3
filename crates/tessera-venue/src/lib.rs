//! Tessera Venue
//!
//! Pure, synchronous generators for venue master data: the fixed seat
//! layout, and screen records parsed from a hand-maintained CSV. The bin
//! wrappers serialize the output to JSON files.

pub mod screens;
pub mod seats;

pub use screens::{screens_from_csv, Screen};
pub use seats::{create_seats, Seat};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenueError {
    #[error("Malformed row {line}: expected at least {expected} columns, got {actual}")]
    MalformedRow { line: usize, expected: usize, actual: usize },

    #[error("Invalid seat count {value:?} on row {line}")]
    InvalidSeatCount { line: usize, value: String },
}

pub type Result<T> = std::result::Result<T, VenueError>;
