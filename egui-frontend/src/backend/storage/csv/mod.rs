//! # CSV Storage Module
//!
//! This module provides the CSV flat-file storage for the mood tracker.
//!
//! ## File Format
//!
//! The mood log is a single UTF-8 file with the following structure:
//! ```csv
//! Date,Mood
//! 2024-01-15,😊 Happy
//! 2024-01-16,😢 Sad
//! ```
//!
//! The file is append-only: entries are never edited or deleted by this
//! system, and every write adds exactly one line.

pub mod connection;
pub mod mood_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use mood_repository::MoodRepository;
