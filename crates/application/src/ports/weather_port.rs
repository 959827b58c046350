//! External weather service port
//!
//! Defines the interface to the geocode / forecast / air-quality / IP-lookup
//! service the orchestrator fetches from.

use async_trait::async_trait;
use domain::entities::{AirQualitySnapshot, ForecastSnapshot, GeoResult};
use domain::value_objects::{GeoLocation, PlaceName, UnitSystem};
#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;

/// Port for the external weather service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Resolve a place name to coordinates, accepting the first match
    ///
    /// # Errors
    ///
    /// `PlaceNotFound` when the service has no match; `Service` for any
    /// other non-success response.
    async fn geocode(&self, place: &PlaceName) -> Result<GeoResult, FetchError>;

    /// Fetch the forecast for resolved coordinates
    async fn forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<ForecastSnapshot, FetchError>;

    /// Fetch the air-quality reading for resolved coordinates
    async fn air_quality(&self, location: &GeoLocation)
    -> Result<AirQualitySnapshot, FetchError>;

    /// Guess the caller's city from their IP address
    ///
    /// Returns `Ok(None)` when the lookup succeeds but carries no city.
    async fn detect_city(&self) -> Result<Option<String>, FetchError>;
}
