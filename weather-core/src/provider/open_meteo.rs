use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use crate::{Coordinates, ProviderResponse, WeatherError};

use super::WeatherProvider;

pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,weather_code";

#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl OpenMeteoProvider {
    /// Public Open-Meteo endpoint with the default 10 second timeout.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_endpoint(OPEN_METEO_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint: endpoint.into(), http })
    }

    /// Forecast URL for `coords`, coordinates fixed at 4 decimals.
    pub fn request_url(&self, coords: Coordinates) -> String {
        format!(
            "{}?latitude={:.4}&longitude={:.4}&current={}",
            self.endpoint, coords.lat, coords.lon, CURRENT_FIELDS
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_conditions(&self, coords: Coordinates) -> Result<ProviderResponse, WeatherError> {
        let url = self.request_url(coords);
        debug!(%url, "Requesting Open-Meteo current conditions");

        let res = self.http.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Open-Meteo request failed");
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = res.text().await?;

        let parsed: ProviderResponse = serde_json::from_str(&body)?;
        debug!(?parsed, "Decoded Open-Meteo response");

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_for_london() {
        let provider = OpenMeteoProvider::new().unwrap();
        let url = provider.request_url(Coordinates { lat: 51.5074, lon: -0.1278 });
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=51.5074&longitude=-0.1278\
             &current=temperature_2m,apparent_temperature,weather_code"
        );
    }

    #[test]
    fn request_url_pads_and_rounds_to_four_decimals() {
        let provider = OpenMeteoProvider::with_endpoint("http://localhost/f", DEFAULT_TIMEOUT).unwrap();
        let url = provider.request_url(Coordinates { lat: 52.52, lon: 13.123456 });
        assert!(url.starts_with("http://localhost/f?latitude=52.5200&longitude=13.1235&"));
    }

    #[test]
    fn truncate_body_limits_length() {
        let long = "x".repeat(300);
        let cut = truncate_body(&long);
        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(250);
        let cut = truncate_body(&long);
        assert_eq!(cut.chars().count(), 203);
    }
}
