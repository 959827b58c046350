//! User settings
//!
//! An explicitly passed configuration value, threaded into the orchestrator
//! rather than read from ambient state. The serialized field names match the
//! on-disk settings file, which also embeds the favorites list.

use domain::value_objects::{Theme, UnitSystem, WindSpeedUnit};
use serde::{Deserialize, Serialize};

/// Maximum number of favorite places kept
pub const FAVORITES_CAP: usize = 20;

/// User-facing settings consumed by the fetch orchestrator and the
/// presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Unit system for fetched forecasts
    #[serde(rename = "units", default)]
    pub unit_system: UnitSystem,

    /// Display unit for wind speed
    #[serde(default)]
    pub wind_speed_unit: WindSpeedUnit,

    /// Color theme preference
    #[serde(default)]
    pub theme: Theme,

    /// Whether to fetch and show air quality
    #[serde(rename = "show_aqi", default = "default_show_aqi")]
    pub show_air_quality: bool,

    /// Forecast cache TTL in minutes
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_minutes: u32,

    /// Auto-refresh interval in minutes (0 = off)
    #[serde(default)]
    pub auto_refresh_minutes: u32,

    /// Starred places, most recently added first
    #[serde(default)]
    pub favorites: Vec<String>,
}

const fn default_show_aqi() -> bool {
    true
}

const fn default_cache_ttl() -> u32 {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::default(),
            wind_speed_unit: WindSpeedUnit::default(),
            theme: Theme::default(),
            show_air_quality: default_show_aqi(),
            cache_ttl_minutes: default_cache_ttl(),
            auto_refresh_minutes: 0,
            favorites: Vec::new(),
        }
    }
}
