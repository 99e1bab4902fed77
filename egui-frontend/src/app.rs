//! # App Module
//!
//! This module serves as the main entry point for the mood tracker
//! application, re-exporting the application state type so `main` can stay
//! small.

pub use crate::ui::app_state::MoodTrackerApp;
