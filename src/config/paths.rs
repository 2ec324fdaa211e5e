//! Path management for Finboard
//!
//! ## Path Resolution Order
//!
//! 1. `FINBOARD_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories::ProjectDirs`
//!    (`~/.config/finboard` on Linux, `%APPDATA%\finboard\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinboardError;

pub const DATA_DIR_ENV: &str = "FINBOARD_DATA_DIR";

/// Manages all paths used by Finboard
#[derive(Debug, Clone)]
pub struct FinboardPaths {
    base_dir: PathBuf,
}

impl FinboardPaths {
    /// Resolve the base directory from the environment or the platform default
    pub fn new() -> Result<Self, FinboardError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "finboard")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinboardError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Key-value document holding the auth flag
    pub fn state_file(&self) -> PathBuf {
        self.data_dir().join("state.json")
    }

    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    pub fn ensure_directories(&self) -> Result<(), FinboardError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinboardError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Whether `config init` has been run
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
