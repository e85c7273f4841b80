use thiserror::Error;

/// Failures of a single weather fetch. Unknown countries and unknown
/// weather codes are never errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The request could not be sent, or it timed out.
    #[error("weather API call failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("weather API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON.
    #[error("failed to parse weather response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, WeatherError::Network(e) if e.is_timeout())
    }

    /// HTTP status carried by a [`WeatherError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
