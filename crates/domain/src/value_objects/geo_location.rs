//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
pub struct InvalidCoordinates;

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
