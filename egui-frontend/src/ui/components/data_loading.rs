//! # Data Loading Module
//!
//! This module handles the backend calls for the mood tracker app.
//!
//! ## Key Functions:
//! - `refresh_summary()` - Re-read the mood log and recompute counts
//! - `log_selected_mood()` - Append the selected mood, then refresh
//!
//! ## Data Flow:
//! Button press → append entry → re-read log → aggregate → update state.
//! The chain is a plain synchronous call sequence on the UI thread.

use chrono::Local;
use log::{error, info};

use crate::backend::domain::LogMoodCommand;
use crate::ui::app_state::MoodTrackerApp;

impl MoodTrackerApp {
    /// Re-read the mood log and recompute the per-mood counts
    pub fn refresh_summary(&mut self) {
        match self.backend.mood_service.mood_history() {
            Ok(log) => {
                self.summary = Some(self.backend.mood_service.summarize(&log));
            }
            Err(e) => {
                error!("Failed to load mood history: {:#}", e);
                self.error_message = Some(format!("Failed to load mood history: {}", e));
                self.summary = None;
            }
        }
    }

    /// Append the currently selected mood with today's date, then reload
    pub fn log_selected_mood(&mut self) {
        self.clear_messages();

        let command = LogMoodCommand {
            date: Local::now().date_naive(),
            mood: self.selected_mood.label().to_string(),
        };

        match self.backend.mood_service.log_mood(command) {
            Ok(result) => {
                info!("Logged mood {} for {}", result.entry.mood, result.entry.date);
                self.success_message = Some("Mood logged successfully!".to_string());
            }
            Err(e) => {
                error!("Failed to log mood: {:#}", e);
                self.error_message = Some(format!("Failed to log mood: {}", e));
            }
        }

        self.refresh_summary();
    }
}
