//! OpenWeatherMap wire models
//!
//! Deserialization targets for the API responses. Fields the lookups never
//! read are omitted; unknown fields are ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One match from the geocoding API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoEntry {
    /// Resolved place name
    pub name: String,
    /// ISO country code
    #[serde(default)]
    pub country: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// 5-day / 3-hour forecast response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    /// Forecast points in chronological order
    #[serde(default)]
    pub list: Vec<ForecastItem>,
    /// Place metadata
    pub city: CityInfo,
}

/// Place metadata attached to a forecast response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityInfo {
    /// Offset from UTC in seconds
    #[serde(default)]
    pub timezone: i32,
    /// Sunrise, UTC epoch seconds (0 if unreported)
    #[serde(default)]
    pub sunrise: i64,
    /// Sunset, UTC epoch seconds (0 if unreported)
    #[serde(default)]
    pub sunset: i64,
}

/// One 3-hour forecast step
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastItem {
    /// Point-in-time, UTC epoch seconds
    pub dt: i64,
    /// Thermodynamic readings
    pub main: MainReadings,
    /// Condition descriptors; the first entry is the primary one
    #[serde(default)]
    pub weather: Vec<ConditionInfo>,
    /// Wind readings
    #[serde(default)]
    pub wind: WindReadings,
}

/// Temperature, humidity and pressure block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    /// Temperature in the requested unit system
    pub temp: f64,
    /// Apparent temperature
    #[serde(default)]
    pub feels_like: f64,
    /// Relative humidity in percent
    #[serde(default)]
    pub humidity: u8,
    /// Surface pressure in hPa
    #[serde(default)]
    pub pressure: u32,
}

/// Weather condition descriptor
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionInfo {
    /// Provider condition code
    pub id: u16,
    /// Localized description
    #[serde(default)]
    pub description: String,
}

/// Wind block
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WindReadings {
    /// Wind speed in meters per second
    #[serde(default)]
    pub speed: f64,
    /// Meteorological direction in degrees
    #[serde(default)]
    pub deg: Option<f64>,
}

/// Air pollution response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirPollutionResponse {
    /// Readings; the first entry is the current one
    #[serde(default)]
    pub list: Vec<AirPollutionItem>,
}

/// One air pollution reading
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirPollutionItem {
    /// Overall index
    pub main: AirPollutionIndex,
    /// Pollutant concentrations in µg/m³
    #[serde(default)]
    pub components: BTreeMap<String, f64>,
}

/// Overall air quality index block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirPollutionIndex {
    /// Index on the provider's 1..=5 scale
    pub aqi: u8,
}

/// ipinfo.io lookup response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpInfo {
    /// City guessed from the caller's IP, if any
    #[serde(default)]
    pub city: Option<String>,
}

/// Error body attached to non-success responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
}
