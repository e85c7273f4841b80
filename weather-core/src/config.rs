use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::provider::open_meteo::{DEFAULT_TIMEOUT, OPEN_METEO_URL};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://api.open-meteo.com/v1/forecast"
/// timeout_secs = 10
/// default_country = "FR"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Override of the Open-Meteo forecast URL.
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Country used when none is given on the command line.
    pub default_country: Option<String>,
}

impl Config {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(OPEN_METEO_URL)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn set_endpoint(&mut self, endpoint: String) {
        self.endpoint = Some(endpoint);
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout_secs = Some(timeout.as_secs());
    }

    pub fn set_default_country(&mut self, country: String) {
        self.default_country = Some(country);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "country-weather", "country-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Country to use when the caller gave none.
    pub fn default_country(&self) -> Result<&str> {
        self.default_country.as_deref().ok_or_else(|| {
            anyhow!(
                "No country given and no default country configured.\n\
                 Hint: pass a country code (e.g. `country-weather show FR`) or run `country-weather configure`."
            )
        })
    }
}
