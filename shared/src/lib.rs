use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical column names of the mood log file, in storage order.
pub const MOOD_LOG_COLUMNS: [&str; 2] = ["Date", "Mood"];

/// The fixed set of selectable moods.
///
/// The display label (emoji included) is what gets written to storage, so
/// the stored mood value is always one of these labels as long as the file
/// is only touched through the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoodOption {
    Happy,
    Sad,
    Angry,
    Neutral,
}

impl MoodOption {
    /// All selectable moods, in picker order
    pub const ALL: [MoodOption; 4] = [
        MoodOption::Happy,
        MoodOption::Sad,
        MoodOption::Angry,
        MoodOption::Neutral,
    ];

    /// Display label shown in the picker and stored in the log
    pub fn label(&self) -> &'static str {
        match self {
            MoodOption::Happy => "😊 Happy",
            MoodOption::Sad => "😢 Sad",
            MoodOption::Angry => "😡 Angry",
            MoodOption::Neutral => "😐 Neutral",
        }
    }
}

impl fmt::Display for MoodOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One record as loaded from storage.
///
/// The date stays a raw string here; parsing (and dropping of rows that
/// fail to parse) happens at aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// Date string exactly as stored, normally `YYYY-MM-DD`
    pub date: String,
    /// Mood display label, emoji included
    pub mood: String,
}

/// The loaded mood log: header columns plus records in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLog {
    /// Column names from the header row, whitespace-trimmed
    pub columns: Vec<String>,
    /// Records in the order they appear in the file
    pub records: Vec<MoodRecord>,
}

impl MoodLog {
    /// An empty log with the canonical columns and zero records
    pub fn empty() -> Self {
        Self {
            columns: MOOD_LOG_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
        }
    }

    /// Whether the header names a `Date` column
    pub fn has_date_column(&self) -> bool {
        self.columns.iter().any(|column| column == "Date")
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// One parsed mood entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: String,
}
