//! Path management for assistant files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/prenatal-assistant/   # Config directory (platform specific)
//! └── config.toml                 # Optional assistant configuration
//!
//! ~/.local/share/prenatal-assistant/
//! └── session.toml                # Persisted session identity
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "prenatal-assistant";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolves where assistant files live.
///
/// A base override puts everything under one directory, which is what tests
/// and portable installs use.
#[derive(Debug, Clone, Default)]
pub struct AssistantPaths {
    base_override: Option<PathBuf>,
}

impl AssistantPaths {
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    /// Returns the configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    /// Returns the data directory.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_override {
            Some(base) => Ok(base.clone()),
            None => dirs::data_dir()
                .map(|d| d.join(APP_DIR))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("session.toml"))
    }
}
