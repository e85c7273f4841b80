//! Core library for the `country-weather` CLI.
//!
//! This crate defines:
//! - The country to representative-city coordinate table
//! - The WMO weather code descriptions
//! - Abstraction over weather providers, with an Open-Meteo implementation
//! - Shared domain models and the on-disk configuration
//!
//! It is used by `country-weather-cli`, but can also be reused by other binaries or services.

pub mod codes;
pub mod config;
pub mod coords;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod provider;

pub use config::Config;
pub use coords::{Coordinates, CountryEntry};
pub use error::WeatherError;
pub use fetcher::{WeatherFetcher, fetch_weather};
pub use model::{CurrentConditions, ProviderResponse, WeatherResult};
pub use provider::{WeatherProvider, provider_from_config};
