use thiserror::Error;

/// Failures surfaced by the geocoder and weather clients.
///
/// The orchestrator turns each variant into a user-facing status message, so
/// the variants mirror the messages it needs to tell apart rather than the
/// transport that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// The provider rejected the API key (HTTP or embedded code 401).
    #[error("API key is unauthorized (code 401)")]
    Unauthorized,

    /// Geocoding returned no candidates for the query.
    #[error("no location found for \"{0}\"")]
    NotFound(String),

    /// The provider answered, but with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("failed to parse provider response: {0}")]
    Parse(String),

    /// Forecast endpoint failed; current conditions are still usable.
    #[error("forecast unavailable: {0}")]
    ForecastUnavailable(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::Parse(err.to_string())
    }
}
