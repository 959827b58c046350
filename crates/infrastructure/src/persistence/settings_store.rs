//! File-backed settings store

use std::fs;
use std::path::PathBuf;

use application::{PersistenceError, Settings};
use tracing::warn;

/// Loads and saves [`Settings`] as one JSON document
///
/// Loading is tolerant: a missing or corrupt file yields the defaults.
/// The favorites list is part of the same document and managed through
/// [`PlaceRegistry`](super::PlaceRegistry).
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load settings, falling back to defaults on any failure
    #[must_use]
    pub fn load(&self) -> Settings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Settings::default();
            },
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to read settings, using defaults");
                return Settings::default();
            },
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Settings file is corrupt, using defaults");
                Settings::default()
            },
        }
    }

    /// Persist settings
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the file cannot be written.
    pub fn save(&self, settings: &Settings) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string_pretty(settings)?;
        super::write_atomic(&self.path, &contents)
    }
}
