//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoder and weather client behind provider traits
//! - Forecast aggregation and display formatting
//! - The search orchestrator that drives a [`RenderTarget`]
//!
//! It is used by `weather-cli`, but any other front end can implement
//! [`RenderTarget`] and reuse the same pipeline.

pub mod background;
pub mod config;
pub mod error;
pub mod forecast;
pub mod icon;
pub mod model;
pub mod present;
pub mod provider;
pub mod render;
pub mod search;
pub mod time;

pub use background::Scene;
pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, ForecastDay, ForecastSample, ForecastSeries, Location, WeatherReport};
pub use present::{CurrentView, ForecastCard};
pub use provider::{Geocoder, WeatherSource, openweather::OpenWeatherProvider, provider_from_config};
pub use render::{RenderTarget, StatusKind};
pub use search::{SearchOrchestrator, SearchOutcome, SearchState};
