//! Merged weather snapshot

use serde::{Deserialize, Serialize};

use crate::entities::{AirQualitySnapshot, ForecastSnapshot, GeoResult};

/// The merged result of geocode + forecast + optional air quality for one
/// resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Resolved place
    pub geo: GeoResult,
    /// Forecast series and place metadata
    pub forecast: ForecastSnapshot,
    /// Air quality, when requested and available
    pub air_quality: Option<AirQualitySnapshot>,
}
