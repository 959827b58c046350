//! File-backed snapshot cache
//!
//! One JSON file mapping cache keys to timestamped payloads:
//! `{"<key>": {"ts": <epoch seconds>, "data": <payload>}}`. The whole map
//! lives in memory and is rewritten on every store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use application::{PersistenceError, SnapshotCachePort};
use chrono::Utc;
use domain::value_objects::CacheKey;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheEntry {
    /// Store time, UTC epoch seconds
    ts: i64,
    /// Opaque payload
    data: Value,
}

/// Persistent key-value cache with per-read TTL
#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl FileCache {
    /// Open a cache backed by `path`, loading any existing entries
    ///
    /// A missing or unreadable file starts the cache empty.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn load(path: &Path) -> HashMap<String, CacheEntry> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Failed to read cache file, starting empty");
                return HashMap::new();
            },
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Cache file is corrupt, starting empty");
                HashMap::new()
            },
        }
    }

    fn save(&self, entries: &HashMap<String, CacheEntry>) -> Result<(), PersistenceError> {
        let contents = serde_json::to_string(entries)?;
        super::write_atomic(&self.path, &contents)
    }

    /// Drop all entries and persist the empty map
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the file cannot be rewritten.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock();
        entries.clear();
        self.save(&entries)
    }

    /// Number of entries currently held, regardless of age
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SnapshotCachePort for FileCache {
    fn get_value(&self, key: &CacheKey, ttl_minutes: u32) -> Option<Value> {
        let entries = self.entries.lock();
        let entry = entries.get(key.as_str())?;
        if ttl_minutes > 0 {
            let age_secs = Utc::now().timestamp() - entry.ts;
            if age_secs > i64::from(ttl_minutes) * 60 {
                debug!(key = %key, age_secs, "Cache entry expired");
                return None;
            }
        }
        Some(entry.data.clone())
    }

    fn set_value(&self, key: &CacheKey, value: Value) -> Result<(), PersistenceError> {
        let mut entries = self.entries.lock();
        entries.insert(
            key.as_str().to_string(),
            CacheEntry {
                ts: Utc::now().timestamp(),
                data: value,
            },
        );
        self.save(&entries)
    }
}
