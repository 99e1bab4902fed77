//! # Mood Repository Module
//!
//! CSV-based repository for the mood log. Two operations:
//! - `load_log` reads the whole file into a [`MoodLog`], row order preserved
//! - `append_entry` adds exactly one `(date, mood)` line, never truncating
//!
//! Dates are kept as raw strings on load; parsing happens in the domain
//! layer so that a malformed row cannot fail a read.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Writer};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use shared::{MoodLog, MoodRecord, MOOD_LOG_COLUMNS};

use super::connection::CsvConnection;

/// CSV-based mood log repository
#[derive(Clone)]
pub struct MoodRepository {
    connection: CsvConnection,
}

impl MoodRepository {
    /// Create a new CSV mood repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the whole mood log from disk.
    ///
    /// A missing file is not an error: it yields an empty log with the
    /// canonical columns. Header names are whitespace-trimmed; records are
    /// read positionally (field 0 = date, field 1 = mood) with missing
    /// fields read as empty strings, so short rows survive to aggregation.
    pub fn load_log(&self) -> Result<MoodLog> {
        let file_path = self.connection.mood_log_path();

        if !file_path.exists() {
            debug!(
                "Mood log {} does not exist yet, returning empty log",
                file_path.display()
            );
            return Ok(MoodLog::empty());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open mood log {}", file_path.display()))?;
        let reader = BufReader::new(file);
        let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .context("Failed to read mood log header")?
            .iter()
            .map(|name| name.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let record = result.context("Failed to read mood log record")?;
            records.push(MoodRecord {
                date: record.get(0).unwrap_or("").to_string(),
                mood: record.get(1).unwrap_or("").to_string(),
            });
        }

        Ok(MoodLog { columns, records })
    }

    /// Append a single `(date, mood)` entry, creating the file if absent.
    ///
    /// The file is opened for append and never truncated. A new or empty
    /// file gets the `Date,Mood` header line before the first record.
    /// I/O failures propagate; there is no retry.
    pub fn append_entry(&self, date: NaiveDate, mood: &str) -> Result<()> {
        let file_path = self.connection.mood_log_path();

        let needs_header = match std::fs::metadata(&file_path) {
            Ok(metadata) => metadata.len() == 0,
            Err(_) => true,
        };

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&file_path)
            .with_context(|| {
                format!("Failed to open mood log {} for append", file_path.display())
            })?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        if needs_header {
            csv_writer.write_record(&MOOD_LOG_COLUMNS)?;
        }
        csv_writer.write_record(&[date.format("%Y-%m-%d").to_string(), mood.to_string()])?;
        csv_writer.flush()?;

        Ok(())
    }
}
