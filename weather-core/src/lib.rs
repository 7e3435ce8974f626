//! Core library for the weather CLI and proxy.
//!
//! This crate defines:
//! - Configuration & HTTP client construction
//! - Location resolution (place name or coordinates)
//! - The Open-Meteo adapter behind the `WeatherProvider` trait
//! - Canonical domain models, WMO code table and unit conversion
//!
//! It is used by `weather-cli` and `weather-proxy`.

pub mod config;
pub mod error;
pub mod geocode;
pub mod model;
pub mod provider;
pub mod units;
pub mod wmo;

pub use config::{Config, ServerConfig, UnitsConfig, UpstreamConfig};
pub use error::WeatherError;
pub use geocode::LocationResolver;
pub use model::{
    Coordinate, CurrentConditions, DailyForecastEntry, LocationInput, ResolvedLocation,
    WeatherData,
};
pub use provider::{OpenMeteoProvider, WeatherProvider, provider_from_config};
pub use units::{TemperatureUnit, WindSpeedUnit};
pub use wmo::WeatherCategory;
