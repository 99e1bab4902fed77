//! # UI Components Module
//!
//! This module organizes the UI components for the mood tracker app.
//!
//! ## Module Organization:
//! - `data_loading` - Backend calls and summary refresh
//! - `mood_form` - Mood picker and log button
//! - `chart_renderer` - Bar chart of mood frequency, plus warning states

pub mod chart_renderer;
pub mod data_loading;
pub mod mood_form;
