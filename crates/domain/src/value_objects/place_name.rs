//! Place name value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-entered place name, trimmed and guaranteed non-blank.
///
/// The same logical place may be typed with different casing or surrounding
/// whitespace; [`PlaceName::normalized`] yields the canonical form used for
/// cache key derivation and history deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceName(String);

/// Error type for blank or whitespace-only place names
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Place name must not be blank")]
pub struct BlankPlaceName;

impl PlaceName {
    /// Create a place name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `BlankPlaceName` if the input is empty or whitespace-only.
    pub fn new(input: &str) -> Result<Self, BlankPlaceName> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(BlankPlaceName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The place name as entered (trimmed)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for cache keys and case-insensitive comparison
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive equality against another name
    #[must_use]
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
