//! Wind speed units and direction display

use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred unit for displaying wind speed
///
/// The forecast API reports wind in meters per second regardless of the
/// selected unit system; conversion happens at display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    /// Kilometers per hour
    #[default]
    Kmh,
    /// Miles per hour
    Mph,
}

impl WindSpeedUnit {
    /// Format a wind speed given in meters per second
    #[must_use]
    pub fn format(&self, meters_per_second: f64) -> String {
        match self {
            Self::Kmh => format!("{} km/h", (meters_per_second * 3.6).round() as i64),
            Self::Mph => format!("{} mph", (meters_per_second * 2.237).round() as i64),
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kmh => write!(f, "km/h"),
            Self::Mph => write!(f, "mph"),
        }
    }
}

const ARROWS: [&str; 8] = ["↑", "↗", "→", "↘", "↓", "↙", "←", "↖"];

/// Arrow glyph for a wind direction given in meteorological degrees
///
/// Directions are bucketed into eight 45° sectors centered on the
/// cardinal and intercardinal points.
#[must_use]
pub fn direction_arrow(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (((normalized + 22.5) / 45.0).floor() as usize) % 8;
    ARROWS[index]
}
