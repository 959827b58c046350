//! Cache key derivation
//!
//! Keys are derived deterministically so two lookups for the same logical
//! place and unit system always address the same cache entry. Coordinates
//! are formatted to four decimal places: geocode results for the same named
//! place that differ only beyond that precision intentionally alias to one
//! forecast/air-quality entry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{GeoLocation, PlaceName, UnitSystem};

/// A derived cache key for one data category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for a geocode result: `geo::<place lowercased>`
    #[must_use]
    pub fn geocode(place: &PlaceName) -> Self {
        Self(format!("geo::{}", place.normalized()))
    }

    /// Key for a forecast: `wx::<lat>,<lon>::<units>`
    #[must_use]
    pub fn forecast(location: &GeoLocation, units: UnitSystem) -> Self {
        Self(format!(
            "wx::{:.4},{:.4}::{}",
            location.latitude(),
            location.longitude(),
            units.api_value()
        ))
    }

    /// Key for an air-quality reading: `aqi::<lat>,<lon>`
    #[must_use]
    pub fn air_quality(location: &GeoLocation) -> Self {
        Self(format!(
            "aqi::{:.4},{:.4}",
            location.latitude(),
            location.longitude()
        ))
    }

    /// The key as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
