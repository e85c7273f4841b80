use tracing::info;

use crate::{
    WeatherError, WeatherResult, coords,
    provider::{WeatherProvider, open_meteo::OpenMeteoProvider},
};

/// Resolves a country to coordinates and asks the provider for current conditions.
#[derive(Debug)]
pub struct WeatherFetcher {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherFetcher {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_weather(&self, country: &str) -> Result<WeatherResult, WeatherError> {
        let coords = coords::resolve(country);
        info!(country, lat = coords.lat, lon = coords.lon, "Fetching current weather");

        let response = self.provider.current_conditions(coords).await?;
        Ok(WeatherResult::from_provider(response))
    }
}

/// Current weather for `country` from the public Open-Meteo API.
///
/// Unknown country codes fall back to London; unknown weather codes yield
/// the summary `"Unknown"`.
pub async fn fetch_weather(country: &str) -> Result<WeatherResult, WeatherError> {
    let provider = OpenMeteoProvider::new()?;
    WeatherFetcher::new(Box::new(provider)).fetch_weather(country).await
}
