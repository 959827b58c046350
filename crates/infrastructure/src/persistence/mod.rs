//! File-backed persistence
//!
//! All stores keep their state in JSON files under one data directory and
//! tolerate missing or corrupt files by starting fresh. Writes go through
//! a temp-file rename so a crash mid-write never corrupts existing state.

mod file_cache;
mod registry;
mod settings_store;

pub use file_cache::FileCache;
pub use registry::PlaceRegistry;
pub use settings_store::SettingsStore;

use std::fs;
use std::path::Path;

use application::PersistenceError;

/// Write `contents` to `path` atomically via a sibling temp file
fn write_atomic(path: &Path, contents: &str) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
