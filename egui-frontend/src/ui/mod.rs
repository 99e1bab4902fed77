//! # UI Module
//!
//! egui user interface for the mood tracker: central application state plus
//! the components that render the mood form and the frequency chart.

pub mod app_implementation;
pub mod app_state;
pub mod components;

pub use app_state::*;
