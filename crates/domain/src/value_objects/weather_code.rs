//! Weather condition categories mapped from OpenWeatherMap condition codes
//!
//! The mapping is a sorted table of inclusive code ranges rather than
//! branching logic, so new categories are additive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather condition category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Thunderstorm group (2xx)
    Thunderstorm,
    /// Drizzle group (3xx)
    Drizzle,
    /// Rain group (5xx)
    Rain,
    /// Snow group (6xx)
    Snow,
    /// Atmosphere group: mist, fog, dust (7xx)
    Fog,
    /// Clear sky (800)
    ClearSky,
    /// Few clouds (801)
    MainlyClear,
    /// Scattered or broken clouds (802, 803)
    PartlyCloudy,
    /// Overcast clouds (804)
    Overcast,
    /// Code outside every known range
    Unknown,
}

/// Inclusive code ranges, sorted by range start
const CODE_RANGES: [(u16, u16, WeatherCondition); 9] = [
    (200, 299, WeatherCondition::Thunderstorm),
    (300, 399, WeatherCondition::Drizzle),
    (500, 599, WeatherCondition::Rain),
    (600, 699, WeatherCondition::Snow),
    (700, 799, WeatherCondition::Fog),
    (800, 800, WeatherCondition::ClearSky),
    (801, 801, WeatherCondition::MainlyClear),
    (802, 803, WeatherCondition::PartlyCloudy),
    (804, 804, WeatherCondition::Overcast),
];

impl WeatherCondition {
    /// Look up the condition for an OpenWeatherMap condition code
    ///
    /// See: <https://openweathermap.org/weather-conditions>
    #[must_use]
    pub fn from_owm_code(code: u16) -> Self {
        let idx = CODE_RANGES.partition_point(|&(start, _, _)| start <= code);
        if idx == 0 {
            return Self::Unknown;
        }
        let (_, end, condition) = CODE_RANGES[idx - 1];
        if code <= end { condition } else { Self::Unknown }
    }

    /// Get a human-readable description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Thunderstorm => "Thunderstorm",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Fog => "Fog",
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Few clouds",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Unknown => "Unknown",
        }
    }

    /// Emoji representation; clear and few-clouds conditions have a
    /// night variant
    #[must_use]
    pub const fn emoji(&self, is_night: bool) -> &'static str {
        match self {
            Self::Thunderstorm => "⛈️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Fog => "🌫️",
            Self::ClearSky => {
                if is_night { "🌙" } else { "☀️" }
            },
            Self::MainlyClear => {
                if is_night { "🌥️" } else { "🌤️" }
            },
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Unknown => "🌡️",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
