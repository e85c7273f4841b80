use anyhow::Context;
use clap::{Parser, Subcommand};
use country_weather_core::{
    Config, WeatherFetcher, WeatherResult, coords, provider_from_config,
};
use inquire::{CustomType, Text};
use std::time::Duration;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "country-weather", version, about = "Current weather by country code")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set endpoint, timeout and default country.
    Configure,

    /// Show current weather for a country.
    Show {
        /// Two-letter country code, e.g. "FR". Unknown codes fall back to GB.
        country: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List supported countries and their representative cities.
    Countries,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure()?,
            Command::Show { country, json } => show(country, json).await?,
            Command::Countries => {
                for e in coords::countries() {
                    println!("{}  {:<12} {:>9.4} {:>9.4}", e.code, e.city, e.coords.lat, e.coords.lon);
                }
            }
        }

        Ok(())
    }
}

async fn show(country: Option<String>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let country = match country {
        Some(c) => c,
        None => config.default_country()?.to_string(),
    };

    let fetcher = WeatherFetcher::new(provider_from_config(&config)?);
    let result = fetcher
        .fetch_weather(&country)
        .await
        .with_context(|| format!("Failed to fetch weather for '{country}'"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_result(&country, &result));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let endpoint = Text::new("Open-Meteo endpoint:")
        .with_default(config.endpoint())
        .prompt()
        .context("Endpoint prompt aborted")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout().as_secs())
        .with_error_message("Please enter a whole number of seconds")
        .prompt()
        .context("Timeout prompt aborted")?;

    let country = Text::new("Default country code:")
        .with_default(config.default_country.as_deref().unwrap_or(coords::FALLBACK_COUNTRY))
        .prompt()
        .context("Country prompt aborted")?;

    if coords::lookup(&country).is_none() {
        println!("Note: '{country}' is not in the country table; weather for GB will be shown.");
    }

    config.set_endpoint(endpoint);
    config.set_timeout(Duration::from_secs(timeout_secs));
    config.set_default_country(country);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn format_result(country: &str, result: &WeatherResult) -> String {
    format!(
        "{country}: {}, {:.1}°C (feels like {:.1}°C)",
        result.summary, result.temperature_c, result.feels_like_c
    )
}
