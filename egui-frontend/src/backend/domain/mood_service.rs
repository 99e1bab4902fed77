//! # Mood Service Module
//!
//! Domain service for recording and summarizing mood entries.
//!
//! ## Key Functions:
//! - `log_mood()` - Append one entry to the mood log
//! - `mood_history()` - Load the full log from storage
//! - `summarize()` - Count entries per mood label
//!
//! ## Aggregation Policy:
//! Records whose date fails to parse are silently dropped from the counts.
//! An empty log and a log whose header lacks a `Date` column are reported
//! as distinct summary states so the UI can show a warning instead of a
//! chart.

use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use log::{debug, info};
use std::collections::BTreeMap;

use shared::{MoodEntry, MoodLog};

use crate::backend::storage::csv::{CsvConnection, MoodRepository};

/// Command to log one mood entry
#[derive(Debug, Clone)]
pub struct LogMoodCommand {
    pub date: NaiveDate,
    pub mood: String,
}

/// Result of logging a mood entry
#[derive(Debug, Clone)]
pub struct LogMoodResult {
    pub entry: MoodEntry,
}

/// Outcome of aggregating the mood log
#[derive(Debug, Clone, PartialEq)]
pub enum MoodSummary {
    /// Number of entries per mood label, for logs with at least one record.
    /// The map can be empty if every stored date was unparseable; that
    /// renders as an empty chart, not a warning.
    Counts(BTreeMap<String, u64>),
    /// The log has no records yet; the UI shows a warning instead of a chart
    Empty,
    /// The header row does not name a `Date` column; aggregation is skipped
    MissingDateColumn,
}

/// Service for recording and summarizing mood entries
#[derive(Clone)]
pub struct MoodService {
    mood_repository: MoodRepository,
}

impl MoodService {
    /// Create a new MoodService
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            mood_repository: MoodRepository::new(connection),
        }
    }

    /// Append one mood entry to the log
    pub fn log_mood(&self, command: LogMoodCommand) -> Result<LogMoodResult> {
        info!("Logging mood: date={}, mood={}", command.date, command.mood);

        self.mood_repository
            .append_entry(command.date, &command.mood)?;

        Ok(LogMoodResult {
            entry: MoodEntry {
                date: command.date,
                mood: command.mood,
            },
        })
    }

    /// Load the full mood log from storage
    pub fn mood_history(&self) -> Result<MoodLog> {
        self.mood_repository.load_log()
    }

    /// Count entries per mood label.
    ///
    /// Records whose date fails to parse are dropped without error.
    pub fn summarize(&self, log: &MoodLog) -> MoodSummary {
        if log.is_empty() {
            return MoodSummary::Empty;
        }
        if !log.has_date_column() {
            return MoodSummary::MissingDateColumn;
        }

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for record in &log.records {
            if parse_entry_date(&record.date).is_none() {
                debug!("Dropping record with unparseable date '{}'", record.date);
                continue;
            }
            *counts.entry(record.mood.clone()).or_insert(0) += 1;
        }

        MoodSummary::Counts(counts)
    }
}

/// Parse a stored date string. Accepts the canonical `YYYY-MM-DD` form with
/// an RFC 3339 fallback for timestamps written by other tools.
fn parse_entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use shared::MoodRecord;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn service() -> (TestEnvironment, MoodService) {
        let env = TestEnvironment::new().unwrap();
        let service = MoodService::new(env.connection.clone());
        (env, service)
    }

    fn record(date: &str, mood: &str) -> MoodRecord {
        MoodRecord {
            date: date.to_string(),
            mood: mood.to_string(),
        }
    }

    #[test]
    fn counts_sum_matches_row_count_when_all_dates_parse() {
        let (_env, service) = service();
        let mut log = MoodLog::empty();
        log.records = vec![
            record("2024-01-01", "😊 Happy"),
            record("2024-01-02", "😢 Sad"),
            record("2024-01-03", "😊 Happy"),
            record("2024-01-04", "😐 Neutral"),
        ];

        match service.summarize(&log) {
            MoodSummary::Counts(counts) => {
                assert_eq!(counts.values().sum::<u64>(), log.len() as u64);
            }
            other => panic!("expected counts, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_date_row_is_dropped_silently() {
        let (_env, service) = service();
        let mut log = MoodLog::empty();
        log.records = vec![
            record("not-a-date", "😊 Happy"),
            record("2024-01-02", "😊 Happy"),
        ];

        match service.summarize(&log) {
            MoodSummary::Counts(counts) => {
                assert_eq!(counts.get("😊 Happy"), Some(&1));
                assert_eq!(counts.values().sum::<u64>(), 1);
            }
            other => panic!("expected counts, got {:?}", other),
        }
    }

    #[test]
    fn rfc3339_dates_are_accepted() {
        let (_env, service) = service();
        let mut log = MoodLog::empty();
        log.records = vec![record("2024-01-15T10:30:00Z", "😡 Angry")];

        match service.summarize(&log) {
            MoodSummary::Counts(counts) => assert_eq!(counts.get("😡 Angry"), Some(&1)),
            other => panic!("expected counts, got {:?}", other),
        }
    }

    #[test]
    fn empty_log_summarizes_to_warning_state() {
        let (_env, service) = service();
        assert_eq!(service.summarize(&MoodLog::empty()), MoodSummary::Empty);
    }

    #[test]
    fn log_without_date_column_is_reported() {
        let (_env, service) = service();
        let log = MoodLog {
            columns: vec!["Timestamp".to_string(), "Mood".to_string()],
            records: vec![record("2024-01-01", "😊 Happy")],
        };

        assert_eq!(service.summarize(&log), MoodSummary::MissingDateColumn);
    }

    #[test]
    fn fresh_store_has_empty_history() -> Result<()> {
        let (_env, service) = service();
        let log = service.mood_history()?;

        assert!(log.is_empty());
        assert_eq!(service.summarize(&log), MoodSummary::Empty);
        Ok(())
    }

    #[test]
    fn logging_then_summarizing_counts_per_label() -> Result<()> {
        let (_env, service) = service();

        for (day, mood) in [
            ("2024-01-01", "😊 Happy"),
            ("2024-01-02", "😊 Happy"),
            ("2024-01-03", "😢 Sad"),
        ] {
            service.log_mood(LogMoodCommand {
                date: date(day),
                mood: mood.to_string(),
            })?;
        }

        let log = service.mood_history()?;
        match service.summarize(&log) {
            MoodSummary::Counts(counts) => {
                assert_eq!(counts.get("😊 Happy"), Some(&2));
                assert_eq!(counts.get("😢 Sad"), Some(&1));
                assert_eq!(counts.len(), 2);
            }
            other => panic!("expected counts, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn log_mood_returns_the_stored_entry() -> Result<()> {
        let (_env, service) = service();

        let result = service.log_mood(LogMoodCommand {
            date: date("2024-02-29"),
            mood: "😐 Neutral".to_string(),
        })?;

        assert_eq!(result.entry.date, date("2024-02-29"));
        assert_eq!(result.entry.mood, "😐 Neutral");
        Ok(())
    }
}
