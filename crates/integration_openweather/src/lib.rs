//! OpenWeatherMap integration
//!
//! HTTP client for the OpenWeatherMap geocoding, 5-day forecast and air
//! pollution APIs, plus the ipinfo.io IP locator. Response models mirror
//! the wire format; conversion to richer types happens in the consuming
//! layer.

pub mod client;
pub mod models;

pub use client::{OwmClient, OwmConfig, OwmError};
pub use models::{
    AirPollutionResponse, CityInfo, ForecastItem, ForecastResponse, GeoEntry, IpInfo,
};
