//! Geocoding result entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::GeoLocation;

/// The first match of a geocode query; no disambiguation is attempted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoResult {
    /// Resolved place name as reported by the geocoder
    pub name: String,
    /// ISO country code, empty if the geocoder omitted it
    #[serde(default)]
    pub country_code: String,
    /// Resolved coordinates
    pub location: GeoLocation,
}

impl fmt::Display for GeoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country_code.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}, {}", self.name, self.country_code)
        }
    }
}
