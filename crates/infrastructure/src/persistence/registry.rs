//! Visited-place history and favorites
//!
//! History lives in its own JSON file (a plain array, newest first) and
//! dedupes case-insensitively. Favorites live inside the settings document,
//! dedupe by exact match and keep their stored casing.

use std::fs;
use std::path::{Path, PathBuf};

use application::settings::FAVORITES_CAP;
use application::{PersistenceError, VisitHistoryPort};
use parking_lot::Mutex;
use tracing::warn;

use super::SettingsStore;

/// Maximum number of history entries kept
pub const HISTORY_CAP: usize = 20;

/// Registry of visited and starred places
#[derive(Debug)]
pub struct PlaceRegistry {
    history_path: PathBuf,
    history: Mutex<Vec<String>>,
    settings_store: SettingsStore,
    favorites_lock: Mutex<()>,
}

impl PlaceRegistry {
    /// Open a registry backed by `history_path` and the settings store
    ///
    /// A missing or unreadable history file starts the history empty.
    #[must_use]
    pub fn open(history_path: impl Into<PathBuf>, settings_store: SettingsStore) -> Self {
        let history_path = history_path.into();
        let history = Self::load_history(&history_path);
        Self {
            history_path,
            history: Mutex::new(history),
            settings_store,
            favorites_lock: Mutex::new(()),
        }
    }

    fn load_history(path: &Path) -> Vec<String> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read history, starting empty");
                return Vec::new();
            },
        };
        match serde_json::from_str(&contents) {
            Ok(history) => history,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "History file is corrupt, starting empty");
                Vec::new()
            },
        }
    }

    fn save_history(&self, history: &[String]) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string(history)?;
        super::write_atomic(&self.history_path, &contents)
    }

    /// Visited places, most recent first
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    /// Drop the whole history and persist the empty list
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the file cannot be rewritten.
    pub fn clear_history(&self) -> Result<(), PersistenceError> {
        let mut history = self.history.lock();
        history.clear();
        self.save_history(&history)
    }

    /// Starred places, in stored order
    #[must_use]
    pub fn favorites(&self) -> Vec<String> {
        self.settings_store.load().favorites
    }

    /// Star a place, deduplicating by exact match
    ///
    /// Blank input is a no-op. The list is capped at [`FAVORITES_CAP`];
    /// adding to a full list drops the oldest entry.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the settings file cannot be written.
    pub fn add_favorite(&self, place: &str) -> Result<(), PersistenceError> {
        let place = place.trim();
        if place.is_empty() {
            return Ok(());
        }
        let _guard = self.favorites_lock.lock();
        let mut settings = self.settings_store.load();
        if settings.favorites.iter().any(|f| f == place) {
            return Ok(());
        }
        settings.favorites.insert(0, place.to_string());
        settings.favorites.truncate(FAVORITES_CAP);
        self.settings_store.save(&settings)
    }

    /// Unstar a place by exact match
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the settings file cannot be written.
    pub fn remove_favorite(&self, place: &str) -> Result<(), PersistenceError> {
        let _guard = self.favorites_lock.lock();
        let mut settings = self.settings_store.load();
        let before = settings.favorites.len();
        settings.favorites.retain(|f| f != place);
        if settings.favorites.len() == before {
            return Ok(());
        }
        self.settings_store.save(&settings)
    }
}

impl VisitHistoryPort for PlaceRegistry {
    fn record_visited(&self, city: &str) -> Result<(), PersistenceError> {
        let city = city.trim();
        if city.is_empty() {
            return Ok(());
        }
        let mut history = self.history.lock();
        history.retain(|entry| !entry.eq_ignore_ascii_case(city));
        history.insert(0, city.to_string());
        history.truncate(HISTORY_CAP);
        self.save_history(&history)
    }
}
