//! Search pipeline: place name -> location -> current weather -> forecast.
//!
//! Calls are strictly sequential. The orchestrator takes `&mut self` for a
//! search, so a second search cannot start while one is in flight.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{
    background::Scene,
    error::WeatherError,
    forecast::{DEFAULT_FORECAST_DAYS, aggregate},
    model::{Location, WeatherReport},
    present::{CurrentView, forecast_cards},
    provider::{Geocoder, WeatherSource},
    render::{RenderTarget, StatusKind},
};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a city name to search.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Check the logs for details.";
pub const GEOCODER_UNAUTHORIZED_MESSAGE: &str =
    "FATAL ERROR: The API Key is unauthorized (Code 401). Please check the configured API key.";
pub const WEATHER_UNAUTHORIZED_MESSAGE: &str =
    "ERROR: API Key is invalid or inactive (Code 401). Please check your key status.";

pub fn searching_message(city: &str) -> String {
    format!("Finding location and fetching weather data for {city}...")
}

pub fn not_found_message(city: &str) -> String {
    format!("Error: City \"{city}\" not found. Please check the spelling or provide more detail.")
}

pub fn fetch_failed_message(details: &str) -> String {
    format!(
        "Failed to fetch weather data. Please try again or check your network connection. Details: {details}"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Success,
    NotFound,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank input; nothing was requested.
    EmptyQuery,
    Success(Box<WeatherReport>),
    NotFound,
    /// The API key was rejected by geocoding or current weather.
    Unauthorized,
    Failed(WeatherError),
}

impl SearchOutcome {
    fn state(&self) -> SearchState {
        match self {
            SearchOutcome::EmptyQuery => SearchState::Idle,
            SearchOutcome::Success(_) => SearchState::Success,
            SearchOutcome::NotFound => SearchState::NotFound,
            SearchOutcome::Unauthorized | SearchOutcome::Failed(_) => SearchState::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success(_))
    }
}

#[derive(Debug)]
pub struct SearchOrchestrator<R> {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherSource>,
    target: R,
    forecast_days: usize,
    state: SearchState,
}

impl<R: RenderTarget> SearchOrchestrator<R> {
    pub fn new(geocoder: Arc<dyn Geocoder>, weather: Arc<dyn WeatherSource>, target: R) -> Self {
        Self {
            geocoder,
            weather,
            target,
            forecast_days: DEFAULT_FORECAST_DAYS,
            state: SearchState::Idle,
        }
    }

    pub fn with_forecast_days(mut self, days: usize) -> Self {
        self.forecast_days = days;
        self
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    pub async fn search(&mut self, query: &str) -> SearchOutcome {
        let city = query.trim();
        if city.is_empty() {
            self.target.show_status(EMPTY_QUERY_MESSAGE, StatusKind::Info);
            self.state = SearchState::Idle;
            return SearchOutcome::EmptyQuery;
        }

        self.target.hide_current();
        self.target.hide_forecast();
        self.target.show_status(&searching_message(city), StatusKind::Info);
        self.target.set_search_enabled(false);
        self.state = SearchState::Searching;

        let outcome = self.run(city).await;

        self.state = outcome.state();
        self.target.set_search_enabled(true);
        info!(city, state = ?self.state, "search finished");
        outcome
    }

    async fn run(&mut self, city: &str) -> SearchOutcome {
        let location = match self.geocoder.resolve(city).await {
            Ok(location) => location,
            Err(WeatherError::NotFound(_)) => {
                self.target.show_status(&not_found_message(city), StatusKind::Error);
                return SearchOutcome::NotFound;
            }
            Err(WeatherError::Unauthorized) => {
                self.target.show_status(GEOCODER_UNAUTHORIZED_MESSAGE, StatusKind::Error);
                return SearchOutcome::Unauthorized;
            }
            Err(err) => {
                error!(error = %err, "geocoding failed");
                self.target.show_status(UNEXPECTED_ERROR_MESSAGE, StatusKind::Error);
                return SearchOutcome::Failed(err);
            }
        };

        self.fetch_weather(location).await
    }

    async fn fetch_weather(&mut self, location: Location) -> SearchOutcome {
        let current = match self.weather.fetch_current(&location).await {
            Ok(current) => current,
            Err(WeatherError::Unauthorized) => {
                self.target.show_status(WEATHER_UNAUTHORIZED_MESSAGE, StatusKind::Error);
                return SearchOutcome::Unauthorized;
            }
            Err(err) => {
                error!(error = %err, "weather fetching failed");
                self.target.show_status(&fetch_failed_message(&err.to_string()), StatusKind::Error);
                return SearchOutcome::Failed(err);
            }
        };

        let scene = Scene::generate(&current.condition, &current.icon_code, &mut rand::rng());
        self.target.show_current(&CurrentView::new(&location, &current));
        self.target.apply_background(&scene);

        let forecast = match self.weather.fetch_forecast(&location).await {
            Ok(series) => Some(aggregate(&series, self.forecast_days)),
            Err(err) => {
                warn!(error = %err, "forecast fetching failed");
                None
            }
        };

        if let Some(days) = forecast.as_deref().filter(|days| !days.is_empty()) {
            self.target.show_forecast(&forecast_cards(days));
        }
        self.target.hide_status();

        SearchOutcome::Success(Box::new(WeatherReport {
            location,
            current,
            forecast,
        }))
    }
}
