//! # Domain Module
//!
//! Synchronous domain logic for the mood tracker. The single service here
//! covers the whole domain: recording entries and summarizing the log.

pub mod mood_service;

pub use mood_service::{LogMoodCommand, LogMoodResult, MoodService, MoodSummary};
