use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::DEFAULT_API_BASE,
    error::WeatherError,
    model::{CurrentConditions, ForecastSample, ForecastSeries, Location},
};

use super::{Geocoder, WeatherSource};

const GEOCODING_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    api_base: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, WeatherError> {
        self.http = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<(StatusCode, String), WeatherError> {
        let url = format!("{}{}", self.api_base, path);
        debug!(%url, "sending OpenWeather request");

        let res = self
            .http
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "OpenWeather response received");

        Ok((status, body))
    }

    fn coordinates_query(location: &Location) -> [(&'static str, String); 3] {
        [
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("units", UNITS.to_string()),
        ]
    }
}

#[async_trait]
impl Geocoder for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn resolve(&self, place: &str) -> Result<Location, WeatherError> {
        let (status, body) = self
            .get(GEOCODING_PATH, &[("q", place.to_string()), ("limit", "1".to_string())])
            .await?;

        if status == StatusCode::UNAUTHORIZED {
            return Err(WeatherError::Unauthorized);
        }
        if !status.is_success() {
            return Err(WeatherError::Upstream(format!(
                "Geocoding request failed with status {status}: {}",
                truncate_body(&body)
            )));
        }

        let candidates: Vec<OwGeoCandidate> = serde_json::from_str(&body)?;

        let best = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NotFound(place.to_string()))?;

        Ok(Location {
            latitude: best.lat,
            longitude: best.lon,
            name: best.name,
            country: best.country,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherProvider {
    #[instrument(skip(self, location), fields(place = %location.name))]
    async fn fetch_current(&self, location: &Location) -> Result<CurrentConditions, WeatherError> {
        let (status, body) = self.get(CURRENT_PATH, &Self::coordinates_query(location)).await?;

        check_envelope(status, &body).map_err(|failure| match failure {
            EnvelopeFailure::Unauthorized => WeatherError::Unauthorized,
            EnvelopeFailure::Rejected(message) => WeatherError::Upstream(message),
            EnvelopeFailure::Malformed(err) => WeatherError::Parse(err),
        })?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        let weather = parsed.weather.into_iter().next().unwrap_or_default();

        Ok(CurrentConditions {
            temperature: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            pressure: parsed.main.pressure,
            condition: weather.main,
            description: weather.description,
            icon_code: weather.icon,
            observed_at: parsed.dt,
            utc_offset: parsed.timezone,
        })
    }

    /// Every failure other than a rejected key is reported as
    /// `ForecastUnavailable`, whatever stage it happened in.
    #[instrument(skip(self, location), fields(place = %location.name))]
    async fn fetch_forecast(&self, location: &Location) -> Result<ForecastSeries, WeatherError> {
        self.forecast_series(location).await.map_err(|err| match err {
            WeatherError::Unauthorized | WeatherError::ForecastUnavailable(_) => err,
            other => WeatherError::ForecastUnavailable(other.to_string()),
        })
    }
}

impl OpenWeatherProvider {
    async fn forecast_series(&self, location: &Location) -> Result<ForecastSeries, WeatherError> {
        let (status, body) = self.get(FORECAST_PATH, &Self::coordinates_query(location)).await?;

        check_envelope(status, &body).map_err(|failure| match failure {
            EnvelopeFailure::Unauthorized => WeatherError::Unauthorized,
            EnvelopeFailure::Rejected(message) | EnvelopeFailure::Malformed(message) => {
                WeatherError::ForecastUnavailable(message)
            }
        })?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let samples = parsed
            .list
            .into_iter()
            .map(|entry| {
                let weather = entry.weather.into_iter().next().unwrap_or_default();
                ForecastSample {
                    timestamp: entry.dt,
                    temp_max: entry.main.temp_max,
                    temp_min: entry.main.temp_min,
                    icon_code: weather.icon,
                    description: weather.description,
                }
            })
            .collect();

        Ok(ForecastSeries {
            utc_offset: parsed.city.timezone,
            samples,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
enum EnvelopeFailure {
    Unauthorized,
    Rejected(String),
    Malformed(String),
}

/// Checks both the HTTP status and the `cod` field embedded in the body.
///
/// OpenWeather reports `cod` as a number on some endpoints and as a string on
/// others, and uses it for errors even when the HTTP status is 200.
fn check_envelope(status: StatusCode, body: &str) -> Result<(), EnvelopeFailure> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(EnvelopeFailure::Unauthorized);
    }

    let envelope: OwEnvelope = serde_json::from_str(body).map_err(|err| {
        if status.is_success() {
            EnvelopeFailure::Malformed(err.to_string())
        } else {
            EnvelopeFailure::Rejected(format!("status {status}: {}", truncate_body(body)))
        }
    })?;

    let code = envelope.cod.as_ref().and_then(status_code);
    if code == Some(401) {
        return Err(EnvelopeFailure::Unauthorized);
    }
    if !status.is_success() || code != Some(200) {
        let message = envelope
            .message
            .as_ref()
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown API error.");
        return Err(EnvelopeFailure::Rejected(message.to_string()));
    }

    Ok(())
}

fn status_code(cod: &Value) -> Option<u16> {
    match cod {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    #[serde(default)]
    cod: Option<Value>,
    #[serde(default)]
    message: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct OwGeoCandidate {
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    main: String,
    #[serde(default = "unknown_description")]
    description: String,
    #[serde(default)]
    icon: String,
}

fn unknown_description() -> String {
    "Unknown".to_string()
}

impl Default for OwWeather {
    fn default() -> Self {
        Self {
            main: String::new(),
            description: unknown_description(),
            icon: String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: i64,
    #[serde(default)]
    timezone: i64,
    main: OwMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp_max: f64,
    temp_min: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    #[serde(default)]
    timezone: i64,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
