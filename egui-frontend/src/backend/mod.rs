//! # Backend Module for egui Frontend
//!
//! This backend module provides direct access to the domain service and
//! storage for the egui frontend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to the domain service
//! - Has no IO/REST layer
//! - Is optimized for desktop-only, single-process operation

use anyhow::Result;
use std::path::Path;

pub mod domain;
pub mod storage;

pub use storage::csv::CsvConnection;

/// Main backend struct that wires storage to the domain service
pub struct Backend {
    pub mood_service: domain::MoodService,
}

impl Backend {
    /// Create a backend rooted at the platform data directory
    pub fn new() -> Result<Self> {
        let connection = CsvConnection::new_default()?;
        Ok(Backend {
            mood_service: domain::MoodService::new(connection),
        })
    }

    /// Create a backend rooted at an explicit base directory
    pub fn with_base_directory<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let connection = CsvConnection::new(base_directory)?;
        Ok(Backend {
            mood_service: domain::MoodService::new(connection),
        })
    }
}
