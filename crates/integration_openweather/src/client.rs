//! OpenWeatherMap HTTP client

use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    AirPollutionResponse, ErrorBody, ForecastResponse, GeoEntry, IpInfo,
};

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OwmError {
    /// Transport-level failure (connection error, timeout)
    #[error("Request failed: {0}")]
    Http(String),

    /// The service reported no match for the query
    #[error("Not found")]
    NotFound,

    /// Non-success HTTP response from the service
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the error body, best effort
        message: String,
    },

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwmConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// IP locator base URL (default: <https://ipinfo.io>)
    #[serde(default = "default_ip_base")]
    pub ip_base: String,

    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language code for localized condition descriptions (default: en)
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_api_base() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_ip_base() -> String {
    "https://ipinfo.io".to_string()
}

const fn default_timeout() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for OwmConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            ip_base: default_ip_base(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
            language: default_language(),
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct OwmClient {
    client: Client,
    config: OwmConfig,
}

impl OwmClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OwmConfig) -> Result<Self, OwmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OwmError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Resolve a free-form place query to geocoding matches
    ///
    /// # Errors
    ///
    /// Returns [`OwmError`] on transport or API failure. An empty match
    /// list is a successful response; callers decide what absence means.
    #[instrument(skip(self))]
    pub async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeoEntry>, OwmError> {
        let url = format!("{}/geo/1.0/direct", self.config.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query),
                ("limit", &limit.to_string()),
                ("appid", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|e| OwmError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let entries: Vec<GeoEntry> = response
            .json()
            .await
            .map_err(|e| OwmError::Parse(e.to_string()))?;
        debug!(matches = entries.len(), "Geocoded place query");
        Ok(entries)
    }

    /// Fetch the 5-day / 3-hour forecast for coordinates
    ///
    /// `units` is the provider unit system identifier (`metric` or
    /// `imperial`).
    ///
    /// # Errors
    ///
    /// Returns [`OwmError`] on transport or API failure.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: &str,
    ) -> Result<ForecastResponse, OwmError> {
        let url = format!("{}/data/2.5/forecast", self.config.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
                ("units", units),
                ("lang", &self.config.language),
                ("appid", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|e| OwmError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;
        let forecast: ForecastResponse = response
            .json()
            .await
            .map_err(|e| OwmError::Parse(e.to_string()))?;
        debug!(points = forecast.list.len(), "Fetched forecast");
        Ok(forecast)
    }

    /// Fetch the current air pollution reading for coordinates
    ///
    /// # Errors
    ///
    /// Returns [`OwmError`] on transport or API failure.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn air_pollution(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirPollutionResponse, OwmError> {
        let url = format!("{}/data/2.5/air_pollution", self.config.api_base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
                ("appid", &self.config.api_key),
            ])
            .send()
            .await
            .map_err(|e| OwmError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| OwmError::Parse(e.to_string()))
    }

    /// Look up the caller's approximate location from their IP address
    ///
    /// # Errors
    ///
    /// Returns [`OwmError`] on transport or API failure.
    #[instrument(skip(self))]
    pub async fn ip_lookup(&self) -> Result<IpInfo, OwmError> {
        let url = format!("{}/json", self.config.ip_base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OwmError::Http(e.to_string()))?;

        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| OwmError::Parse(e.to_string()))
    }

    /// Turn a non-success response into an error, extracting the message
    /// from the body when one is present; the message stays empty otherwise
    async fn check_status(response: Response) -> Result<Response, OwmError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(OwmError::NotFound);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_default();
        Err(OwmError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
