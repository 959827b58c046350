//! Weather adapter - implements `WeatherPort` using `integration_openweather`

use application::error::FetchError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::entities::{AirQualitySnapshot, AqiLevel, ForecastPoint, ForecastSnapshot, GeoResult};
use domain::value_objects::{GeoLocation, PlaceName, UnitSystem};
use integration_openweather::models::ForecastItem;
use integration_openweather::{OwmClient, OwmConfig, OwmError};
use tracing::{debug, instrument};

/// Adapter for the OpenWeatherMap APIs
pub struct OpenWeatherAdapter {
    client: OwmClient,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OwmClient")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create a new adapter with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OwmConfig) -> Result<Self, FetchError> {
        let client = OwmClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration errors to application fetch errors
    fn map_error(err: OwmError) -> FetchError {
        match err {
            OwmError::NotFound => FetchError::PlaceNotFound,
            OwmError::Api { status, message } => FetchError::Service {
                status_code: status,
                message,
            },
            OwmError::Http(message) | OwmError::Parse(message) => FetchError::transport(message),
        }
    }

    fn map_point(item: &ForecastItem) -> ForecastPoint {
        let condition = item.weather.first();
        ForecastPoint {
            timestamp_utc: item.dt,
            temperature: item.main.temp,
            feels_like: item.main.feels_like,
            humidity: item.main.humidity,
            pressure: item.main.pressure,
            wind_speed: item.wind.speed,
            wind_direction_degrees: item.wind.deg,
            weather_code: condition.map_or(0, |c| c.id),
            description: condition.map_or_else(String::new, |c| c.description.clone()),
        }
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(place = place.as_str()))]
    async fn geocode(&self, place: &PlaceName) -> Result<GeoResult, FetchError> {
        let entries = self
            .client
            .geocode(place.as_str(), 1)
            .await
            .map_err(Self::map_error)?;

        let entry = entries.into_iter().next().ok_or(FetchError::PlaceNotFound)?;
        let location = GeoLocation::new(entry.lat, entry.lon)
            .map_err(|e| FetchError::transport(e.to_string()))?;

        debug!(resolved = %entry.name, country = %entry.country, "Geocoded place");
        Ok(GeoResult {
            name: entry.name,
            country_code: entry.country,
            location,
        })
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<ForecastSnapshot, FetchError> {
        let response = self
            .client
            .forecast(location.latitude(), location.longitude(), units.api_value())
            .await
            .map_err(Self::map_error)?;

        debug!(points = response.list.len(), "Retrieved forecast");
        Ok(ForecastSnapshot {
            points: response.list.iter().map(Self::map_point).collect(),
            utc_offset_seconds: response.city.timezone,
            sunrise_utc: response.city.sunrise,
            sunset_utc: response.city.sunset,
        })
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualitySnapshot, FetchError> {
        let response = self
            .client
            .air_pollution(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        let reading = response
            .list
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::transport("Air pollution response held no readings"))?;
        let level = AqiLevel::try_from(reading.main.aqi).map_err(FetchError::transport)?;

        Ok(AirQualitySnapshot {
            level,
            components: reading.components,
        })
    }

    #[instrument(skip(self))]
    async fn detect_city(&self) -> Result<Option<String>, FetchError> {
        let info = self.client.ip_lookup().await.map_err(Self::map_error)?;
        Ok(info.city.filter(|city| !city.trim().is_empty()))
    }
}
