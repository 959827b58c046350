//! Infrastructure layer - adapters and persistence
//!
//! Implements the application layer's ports: file-backed persistence for
//! the snapshot cache, settings and place registry, and the adapter that
//! connects the weather port to the OpenWeatherMap integration.

pub mod adapters;
pub mod persistence;

pub use adapters::OpenWeatherAdapter;
pub use persistence::{FileCache, PlaceRegistry, SettingsStore};
