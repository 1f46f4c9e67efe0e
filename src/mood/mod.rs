//! Mood Tracker
//!
//! Session-scoped mood log:
//!
//! - **types**: `MoodRating` (1-5) and `MoodEntry`
//! - **log**: append-only `MoodLog` with recent view and CSV export
//!
//! Entries live only as long as the visitor's session.

pub mod log;
pub mod types;

pub use log::{MoodLog, CSV_FILENAME};
pub use types::{MoodEntry, MoodRating, DATE_FORMAT};

use thiserror::Error;

/// Errors from the mood tracker
#[derive(Error, Debug)]
pub enum MoodError {
    /// Rating outside 1..=5
    #[error("Mood rating must be between {min} and {max}, got {value}")]
    RatingOutOfRange { value: i64, min: u8, max: u8 },

    /// Rating that is not a whole number
    #[error("Mood rating must be a whole number")]
    InvalidRating,

    /// CSV serialization failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<csv::Error> for MoodError {
    fn from(e: csv::Error) -> Self {
        MoodError::Export(e.to_string())
    }
}

/// Result type for mood operations
pub type MoodResult<T> = Result<T, MoodError>;
