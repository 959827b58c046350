//! Measurement unit system selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system for temperature and derived measurements
///
/// Matches the `units` query parameter of the forecast API, so the cache key
/// for a forecast embeds the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, meters per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitSystem {
    /// The value sent to the forecast API and embedded in cache keys
    #[must_use]
    pub const fn api_value(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature symbol for display
    #[must_use]
    pub const fn temperature_symbol(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_value())
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "celsius" => Ok(Self::Metric),
            "imperial" | "fahrenheit" => Ok(Self::Imperial),
            _ => Err(format!("Invalid unit system: {s}. Use 'metric' or 'imperial'")),
        }
    }
}
