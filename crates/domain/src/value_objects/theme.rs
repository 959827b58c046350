//! UI theme selection
//!
//! The core never renders anything; the theme is carried as a recognized
//! settings field so the presentation layer can resolve `Auto` against the
//! day/night state of the current forecast.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
    /// Follow local day/night at the looked-up place
    Auto,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "auto" => Ok(Self::Auto),
            _ => Err(format!("Invalid theme: {s}. Use 'dark', 'light' or 'auto'")),
        }
    }
}
