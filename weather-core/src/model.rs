use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codes;

/// Normalized current weather for a country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherResult {
    pub summary: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
}

impl WeatherResult {
    /// Translate the provider payload, mapping the condition code to text.
    pub fn from_provider(response: ProviderResponse) -> Self {
        let current = response.current;
        let summary = match codes::describe(current.weather_code) {
            Some(d) => d,
            None => {
                warn!(code = current.weather_code, "Unrecognized weather code");
                codes::UNKNOWN_SUMMARY
            }
        };

        Self {
            summary: summary.to_string(),
            temperature_c: current.temperature_2m,
            feels_like_c: current.apparent_temperature,
        }
    }
}

/// Open-Meteo `current` payload. Fields not listed here are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_2m: f64,
    pub apparent_temperature: f64,
    pub weather_code: i64,
}
