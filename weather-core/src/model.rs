use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best geocoding match for a place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub country: String,
}

/// Snapshot of the current-weather response, metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub pressure: f64,
    /// Provider condition group, e.g. "Clear", "Rain".
    pub condition: String,
    pub description: String,
    pub icon_code: String,
    /// Observation time, seconds since the epoch (UTC).
    pub observed_at: i64,
    /// Seconds to add to UTC for local wall-clock time.
    pub utc_offset: i64,
}

/// One 3-hourly forecast point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: i64,
    pub temp_max: f64,
    pub temp_min: f64,
    pub icon_code: String,
    pub description: String,
}

/// Forecast samples together with the city's UTC offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub utc_offset: i64,
    pub samples: Vec<ForecastSample>,
}

/// Samples of one local calendar date reduced to a single card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub icon_code: String,
    pub description: String,
}

/// Everything a successful search produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
    /// `None` when the forecast request failed.
    pub forecast: Option<Vec<ForecastDay>>,
}
