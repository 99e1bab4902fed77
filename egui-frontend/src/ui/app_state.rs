//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the mood tracker app.
//!
//! ## Key Types:
//! - `MoodTrackerApp` - Main application state struct
//!
//! ## Purpose:
//! The MoodTrackerApp struct holds all application state in a single
//! location: the backend connection, the currently selected mood, the
//! latest aggregation of the log, and transient user-facing messages. This
//! follows the single source of truth principle for state management.

use log::info;

use shared::MoodOption;

use crate::backend::domain::MoodSummary;
use crate::backend::Backend;

/// Main application state
pub struct MoodTrackerApp {
    /// Backend connection for data access
    pub backend: Backend,

    /// Mood currently selected in the picker
    pub selected_mood: MoodOption,

    /// Latest aggregation of the mood log, refreshed after every append
    pub summary: Option<MoodSummary>,

    /// Success message shown after logging a mood
    pub success_message: Option<String>,

    /// Error message shown when a storage operation fails
    pub error_message: Option<String>,
}

impl MoodTrackerApp {
    /// Initialize the app with a backend connection and load the current log
    pub fn new() -> anyhow::Result<Self> {
        info!("Initializing mood tracker app state");

        let backend = Backend::new()?;
        let mut app = Self {
            backend,
            selected_mood: MoodOption::Happy,
            summary: None,
            success_message: None,
            error_message: None,
        };
        app.refresh_summary();
        Ok(app)
    }

    /// Clear transient success/error messages
    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }
}
