//! Visit history port

#[cfg(test)]
use mockall::automock;

use crate::error::PersistenceError;

/// Port for recording successfully resolved places
#[cfg_attr(test, automock)]
pub trait VisitHistoryPort: Send + Sync {
    /// Record a visited place at the front of the history
    ///
    /// Blank input is a no-op. Persisted on every call.
    fn record_visited(&self, city: &str) -> Result<(), PersistenceError>;
}
