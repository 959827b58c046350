//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the orchestrator interacts with
//! external systems. Adapters in the infrastructure layer implement them.

mod history_port;
mod snapshot_cache;
mod weather_port;

#[cfg(test)]
pub use history_port::MockVisitHistoryPort;
pub use history_port::VisitHistoryPort;
pub use snapshot_cache::{SnapshotCacheExt, SnapshotCachePort};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
