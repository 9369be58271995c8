//! Configuration for Roster
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, RosterError};

/// Main configuration for a Roster store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// File used by the path-based `save`/`restore` calls
    /// One employee per line:
    ///   {"kind":"Manager","id":3,"basic_salary":900,"department":"HR","factor":0.3}
    pub data_file: PathBuf,

    /// fsync the data file after every path-based save
    pub sync_on_save: bool,

    /// Create the data file's parent directory on save if it is missing
    pub create_parent_dirs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./roster_data/employees.jsonl"),
            sync_on_save: true,
            create_parent_dirs: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration before a store is built on it
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(RosterError::Config("data_file must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file used by `save`/`restore`
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Enable or disable fsync after save
    pub fn sync_on_save(mut self, sync: bool) -> Self {
        self.config.sync_on_save = sync;
        self
    }

    /// Enable or disable creating the parent directory on save
    pub fn create_parent_dirs(mut self, create: bool) -> Self {
        self.config.create_parent_dirs = create;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
