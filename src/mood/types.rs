//! Mood entry types

use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

use super::{MoodError, MoodResult};

/// Date format used both on the page and in the CSV export
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A mood rating from 1 (low) to 5 (high)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MoodRating(u8);

impl MoodRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Rating preselected on the tracker slider
    pub const DEFAULT: MoodRating = MoodRating(3);

    pub fn new(value: i64) -> MoodResult<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(MoodError::RatingOutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MoodRating {
    type Error = MoodError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as i64)
    }
}

impl fmt::Display for MoodRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged mood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    pub timestamp: DateTime<FixedOffset>,
    pub rating: MoodRating,
    pub note: String,
}

impl MoodEntry {
    pub fn new(timestamp: DateTime<FixedOffset>, rating: MoodRating, note: impl Into<String>) -> Self {
        Self {
            timestamp,
            rating,
            note: note.into(),
        }
    }

    pub fn formatted_date(&self) -> String {
        self.timestamp.format(DATE_FORMAT).to_string()
    }
}

/// `2025-08-06 01:08: Mood 4/5 (Stressful day)`; the note is omitted when empty
impl fmt::Display for MoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Mood {}/{}", self.formatted_date(), self.rating, MoodRating::MAX)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}
