//! Application layer - fetch orchestration and port definitions
//!
//! Decides cache-hit versus network-fetch for weather lookups, drives the
//! external lookup sequence, and reconciles both paths into one consistent
//! snapshot. Ports define how the orchestrator reaches the outside world;
//! adapters in the infrastructure layer implement them.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

pub use error::{FetchError, PersistenceError};
pub use ports::*;
pub use services::*;
pub use settings::Settings;
