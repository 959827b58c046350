//! Snapshot cache port
//!
//! Durable key-value mapping from cache key to timestamped opaque JSON.
//! Cache operations are synchronous and never suspend; only the network
//! fetch sequence runs async.

use domain::value_objects::CacheKey;
use serde_json::Value;

use crate::error::PersistenceError;

/// Port for the persistent per-category snapshot cache
///
/// Values are opaque JSON; callers handle typed conversion through
/// [`SnapshotCacheExt`].
pub trait SnapshotCachePort: Send + Sync + std::fmt::Debug {
    /// Get a cached value if present and fresh enough
    ///
    /// With `ttl_minutes > 0` an entry older than the TTL is absent.
    /// **`ttl_minutes == 0` disables the expiry check entirely** and returns
    /// the entry at any age; callers wanting a forced refresh must bypass
    /// the read instead of passing zero.
    fn get_value(&self, key: &CacheKey, ttl_minutes: u32) -> Option<Value>;

    /// Store a value under `key` with the current timestamp, overwriting
    /// any prior entry, and persist to durable storage
    fn set_value(&self, key: &CacheKey, value: Value) -> Result<(), PersistenceError>;
}

/// Extension trait for typed cache operations
pub trait SnapshotCacheExt: SnapshotCachePort {
    /// Get a typed value; entries that fail to deserialize count as absent
    fn get<T>(&self, key: &CacheKey, ttl_minutes: u32) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.get_value(key, ttl_minutes)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Discarding undecodable cache entry");
                None
            },
        }
    }

    /// Store a typed value
    fn set<T>(&self, key: &CacheKey, value: &T) -> Result<(), PersistenceError>
    where
        T: serde::Serialize,
    {
        let json = serde_json::to_value(value)?;
        self.set_value(key, json)
    }
}

// Blanket implementation for all SnapshotCachePort implementors
impl<T: SnapshotCachePort + ?Sized> SnapshotCacheExt for T {}
