use crate::{Config, Coordinates, ProviderResponse, WeatherError, provider::open_meteo::OpenMeteoProvider};
use anyhow::Context;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod open_meteo;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions at the given point.
    async fn current_conditions(&self, coords: Coordinates) -> Result<ProviderResponse, WeatherError>;
}

/// Construct the Open-Meteo provider, applying endpoint and timeout overrides from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = OpenMeteoProvider::with_endpoint(config.endpoint(), config.timeout())
        .context("Failed to build HTTP client for Open-Meteo")?;

    Ok(Box::new(provider))
}
