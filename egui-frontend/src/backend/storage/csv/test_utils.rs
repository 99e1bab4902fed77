//! Test utilities for the CSV storage layer.
//!
//! Provides RAII-based cleanup that guarantees test data is removed even if
//! tests panic or fail.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;
use super::mood_repository::MoodRepository;

/// Test environment with a temporary storage directory that is cleaned up
/// when the environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            base_path: connection.base_directory().to_path_buf(),
            connection,
            _temp_dir: temp_dir,
        })
    }

    /// Repository instance backed by this environment's directory
    pub fn mood_repository(&self) -> MoodRepository {
        MoodRepository::new(self.connection.clone())
    }
}
