//! Port adapters

mod weather_adapter;

pub use weather_adapter::OpenWeatherAdapter;
