//! Value objects for the weather domain

mod cache_key;
mod geo_location;
mod place_name;
mod theme;
mod unit_system;
mod weather_code;
mod wind;

pub use cache_key::CacheKey;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use place_name::{BlankPlaceName, PlaceName};
pub use theme::Theme;
pub use unit_system::UnitSystem;
pub use weather_code::WeatherCondition;
pub use wind::{WindSpeedUnit, direction_arrow};
