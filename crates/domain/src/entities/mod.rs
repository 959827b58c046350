//! Entities produced by a weather lookup

mod air_quality;
mod forecast;
mod geo_result;
mod snapshot;

pub use air_quality::{AirQualitySnapshot, AqiLevel};
pub use forecast::{DailySummary, ForecastPoint, ForecastSnapshot};
pub use geo_result::GeoResult;
pub use snapshot::WeatherSnapshot;
