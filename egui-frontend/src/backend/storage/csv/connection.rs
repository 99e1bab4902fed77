//! # CSV Connection Module
//!
//! Manages the storage location for the mood log: resolves the base
//! directory (platform app-data dir by default, or an explicit path for
//! tests), creates it on construction, and hands out the mood log path.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the flat file holding all mood entries
pub const MOOD_LOG_FILE: &str = "mood_log.csv";

/// Connection to the CSV storage directory
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a connection rooted at the given directory, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_directory = base_directory.as_ref().to_path_buf();
        fs::create_dir_all(&base_directory).with_context(|| {
            format!(
                "Failed to create data directory {}",
                base_directory.display()
            )
        })?;
        info!("CSV storage rooted at {}", base_directory.display());
        Ok(Self { base_directory })
    }

    /// Create a connection rooted at the platform data directory
    pub fn new_default() -> Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "mood-tracker")
            .context("Could not determine platform data directory")?;
        Self::new(project_dirs.data_dir())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Path of the mood log file inside the base directory
    pub fn mood_log_path(&self) -> PathBuf {
        self.base_directory.join(MOOD_LOG_FILE)
    }
}
