use crate::{
    Config,
    error::WeatherError,
    model::{CurrentConditions, ForecastSeries, Location},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

/// Resolves free text to the single best matching location.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, place: &str) -> Result<Location, WeatherError>;
}

/// Current conditions and 3-hourly forecast for a resolved location.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions, WeatherError>;

    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastSeries, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
                 Hint: run `weather configure` or pass `--api-key <KEY>`."
        )
    })?;

    let provider = OpenWeatherProvider::new(api_key.to_owned())
        .with_api_base(config.api_base())
        .with_timeout(Duration::from_secs(config.timeout_secs()))?;

    Ok(provider)
}
