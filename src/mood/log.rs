//! Append-only mood log

use chrono::{DateTime, FixedOffset};

use super::{MoodEntry, MoodError, MoodRating, MoodResult};

/// File name offered for the CSV download
pub const CSV_FILENAME: &str = "mood_history.csv";

const CSV_HEADER: [&str; 3] = ["Date", "Mood", "Note"];

#[derive(Debug, Clone, Default)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a reference to it
    pub fn log(
        &mut self,
        rating: MoodRating,
        note: impl Into<String>,
        timestamp: DateTime<FixedOffset>,
    ) -> &MoodEntry {
        self.entries.push(MoodEntry::new(timestamp, rating, note));
        &self.entries[self.entries.len() - 1]
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> &[MoodEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full history as CSV with a `Date,Mood,Note` header
    pub fn to_csv(&self) -> MoodResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for entry in &self.entries {
            writer.write_record([
                entry.formatted_date(),
                entry.rating.to_string(),
                entry.note.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| MoodError::Export(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| MoodError::Export(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base_time() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 8, 6, 9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let log = MoodLog::new();
        assert_eq!(log.to_csv().unwrap(), "Date,Mood,Note\n");
    }

    #[test]
    fn test_every_rating_exports_verbatim() {
        let notes = ["Stressful day", "ok", "slept well", "", "great walk"];
        let mut log = MoodLog::new();

        for (i, note) in notes.iter().enumerate() {
            let rating = MoodRating::new(i as i64 + 1).unwrap();
            log.log(rating, *note, base_time() + Duration::minutes(i as i64));
        }

        let csv = log.to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Date,Mood,Note");
        assert_eq!(lines[1], "2025-08-06 09:30,1,Stressful day");
        assert_eq!(lines[4], "2025-08-06 09:33,4,");
        assert_eq!(lines[5], "2025-08-06 09:34,5,great walk");
    }

    #[test]
    fn test_note_with_comma_is_quoted() {
        let mut log = MoodLog::new();
        log.log(MoodRating::new(2).unwrap(), "tired, anxious", base_time());

        let csv = log.to_csv().unwrap();
        assert!(csv.contains("2025-08-06 09:30,2,\"tired, anxious\""));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[2], "tired, anxious");
    }

    #[test]
    fn test_recent_keeps_insertion_order() {
        let mut log = MoodLog::new();
        for i in 0..7 {
            log.log(
                MoodRating::new(i % 5 + 1).unwrap(),
                format!("entry {}", i),
                base_time() + Duration::hours(i),
            );
        }

        let recent = log.recent(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].note, "entry 2");
        assert_eq!(recent[4].note, "entry 6");
        assert_eq!(log.recent(50).len(), 7);
    }

    #[test]
    fn test_export_includes_full_history() {
        let mut log = MoodLog::new();
        for i in 0..8 {
            log.log(MoodRating::DEFAULT, format!("n{}", i), base_time());
        }
        assert_eq!(log.to_csv().unwrap().lines().count(), 9);
    }
}
