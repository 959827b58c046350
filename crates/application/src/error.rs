//! Application-level errors

use thiserror::Error;

/// Errors surfaced by a weather lookup
///
/// Nothing here is fatal to the process; both variants are returned to the
/// caller and never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The geocoder produced no match for the requested place
    #[error("Place not found")]
    PlaceNotFound,

    /// Non-success response from an external service
    ///
    /// `status_code` 0 marks transport-level failures (connection errors,
    /// timeouts), which are treated identically to HTTP-level failures.
    #[error("Service error {status_code}: {message}")]
    Service {
        /// HTTP status code, or 0 for transport failures
        status_code: u16,
        /// Best-effort message extracted from the response body
        message: String,
    },
}

impl FetchError {
    /// A transport-level failure (no HTTP status available)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Service {
            status_code: 0,
            message: message.into(),
        }
    }

    /// Check whether this is a not-found outcome
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PlaceNotFound)
    }
}

/// Failure writing durable state
///
/// Surfaced to the immediate caller of the mutating cache/registry
/// operation; never invalidates an already-computed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Persistence error: {0}")]
pub struct PersistenceError(pub String);

impl PersistenceError {
    /// Create a persistence error from any displayable cause
    pub fn new(cause: impl std::fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err)
    }
}
