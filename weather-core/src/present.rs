//! Display strings for the current-conditions block and forecast cards.

use crate::{
    icon::icon_glyph,
    model::{CurrentConditions, ForecastDay, Location},
    time::{format_unix_time, short_month_day, short_weekday},
};

/// Rounds half-way values towards positive infinity (`-2.5 -> -2`).
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Labelled fields of the current-conditions section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub location: String,
    pub description: String,
    pub date: String,
    pub icon: &'static str,
    /// Rounded degrees Celsius without unit; the renderer adds it.
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

impl CurrentView {
    pub fn new(location: &Location, current: &CurrentConditions) -> Self {
        Self {
            location: format!("{}, {}", location.name, location.country),
            description: current.description.clone(),
            date: format_unix_time(current.observed_at, current.utc_offset),
            icon: icon_glyph(&current.icon_code),
            temperature: round_half_up(current.temperature).to_string(),
            feels_like: format!("{}°C", round_half_up(current.feels_like)),
            humidity: format!("{}%", current.humidity_pct),
            wind: format!("{:.1} m/s", current.wind_speed),
            pressure: format!("{} hPa", current.pressure),
        }
    }
}

/// One forecast day as shown on a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    pub day_name: String,
    pub month_day: String,
    pub icon: &'static str,
    pub description: String,
    pub max: String,
    pub min: String,
}

impl ForecastCard {
    pub fn new(day: &ForecastDay) -> Self {
        Self {
            day_name: short_weekday(day.date),
            month_day: short_month_day(day.date),
            icon: icon_glyph(&day.icon_code),
            description: day.description.clone(),
            max: format!("{}°C", round_half_up(day.max_temp)),
            min: format!("Min: {}°C", round_half_up(day.min_temp)),
        }
    }
}

pub fn forecast_cards(days: &[ForecastDay]) -> Vec<ForecastCard> {
    days.iter().map(ForecastCard::new).collect()
}
