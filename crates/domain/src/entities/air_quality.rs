//! Air quality snapshot entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Air quality index level on the provider's 1..=5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AqiLevel {
    /// 1
    Good,
    /// 2
    Fair,
    /// 3
    Moderate,
    /// 4
    Poor,
    /// 5
    VeryPoor,
}

impl AqiLevel {
    /// Numeric index (1..=5)
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Fair => 2,
            Self::Moderate => 3,
            Self::Poor => 4,
            Self::VeryPoor => 5,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very poor",
        }
    }
}

impl From<AqiLevel> for u8 {
    fn from(level: AqiLevel) -> Self {
        level.index()
    }
}

impl TryFrom<u8> for AqiLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Good),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::Poor),
            5 => Ok(Self::VeryPoor),
            other => Err(format!("AQI level out of range: {other}")),
        }
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.label())
    }
}

/// Air quality reading for one place
///
/// Optional end to end: absent when the category is disabled or its fetch
/// failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// Overall index level
    pub level: AqiLevel,
    /// Pollutant concentrations in µg/m³, keyed by pollutant name
    #[serde(default)]
    pub components: BTreeMap<String, f64>,
}

impl AirQualitySnapshot {
    /// Concentration of a single pollutant, if reported
    #[must_use]
    pub fn component(&self, pollutant: &str) -> Option<f64> {
        self.components.get(pollutant).copied()
    }
}
