//! Fixtures shared by the integration tests.

#![allow(dead_code)]

use weather_core::{CurrentView, ForecastCard, OpenWeatherProvider, RenderTarget, Scene, StatusKind};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const API_KEY: &str = "test-key";

// 2024-01-15T00:00:00Z, a Monday.
pub const JAN_15: i64 = 1_705_276_800;
pub const HOUR: i64 = 3600;
pub const IST_OFFSET: i64 = 19_800;

pub fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new(API_KEY.to_string()).with_api_base(&server.uri())
}

pub fn delhi_geocoding() -> serde_json::Value {
    serde_json::json!([
        {
            "name": "New Delhi",
            "local_names": { "en": "New Delhi" },
            "lat": 28.6139,
            "lon": 77.209,
            "country": "IN",
            "state": "Delhi"
        }
    ])
}

pub fn delhi_current() -> serde_json::Value {
    // 10:00 UTC, 15:30 local
    let observed_at = JAN_15 + 10 * HOUR;

    serde_json::json!({
        "coord": { "lon": 77.209, "lat": 28.6139 },
        "weather": [
            { "id": 721, "main": "Haze", "description": "haze", "icon": "50d" }
        ],
        "base": "stations",
        "main": {
            "temp": 21.56,
            "feels_like": 20.49,
            "temp_min": 21.05,
            "temp_max": 22.09,
            "pressure": 1013,
            "humidity": 45
        },
        "visibility": 1500,
        "wind": { "speed": 3.09, "deg": 290 },
        "clouds": { "all": 0 },
        "dt": observed_at,
        "sys": { "country": "IN" },
        "timezone": IST_OFFSET,
        "id": 1261481,
        "name": "New Delhi",
        "cod": 200
    })
}

/// Forecast samples every 3 hours from 12:00 UTC on the 15th for four days,
/// covering local dates 15th..=19th at UTC+5:30.
pub fn delhi_forecast() -> serde_json::Value {
    let list: Vec<_> = (0..32)
        .map(|i| {
            let dt = JAN_15 + 12 * HOUR + i * 3 * HOUR;
            let drift = i as f64 * 0.1;
            let temp_min = 10.0 + drift;
            let temp_max = 20.0 + drift;
            serde_json::json!({
                "dt": dt,
                "main": {
                    "temp": 18.0,
                    "temp_min": temp_min,
                    "temp_max": temp_max
                },
                "weather": [
                    { "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }
                ],
                "dt_txt": "unused"
            })
        })
        .collect();
    let count = list.len();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": count,
        "list": list,
        "city": {
            "id": 1261481,
            "name": "New Delhi",
            "country": "IN",
            "timezone": IST_OFFSET
        }
    })
}

pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Status(String, StatusKind),
    HideStatus,
    Enabled(bool),
    Current(CurrentView),
    HideCurrent,
    Forecast(Vec<ForecastCard>),
    HideForecast,
    Background(String, bool),
}

/// Render target that just remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub events: Vec<Event>,
}

impl RecordingTarget {
    pub fn current(&self) -> Option<&CurrentView> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Current(view) => Some(view),
            _ => None,
        })
    }

    pub fn forecast(&self) -> Option<&[ForecastCard]> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Forecast(cards) => Some(cards.as_slice()),
            _ => None,
        })
    }

    pub fn last_status(&self) -> Option<(&str, StatusKind)> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Status(msg, kind) => Some((msg.as_str(), *kind)),
            _ => None,
        })
    }

    pub fn search_enabled(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Enabled(enabled) => Some(*enabled),
            _ => None,
        })
    }
}

impl RenderTarget for RecordingTarget {
    fn show_status(&mut self, message: &str, kind: StatusKind) {
        self.events.push(Event::Status(message.to_string(), kind));
    }

    fn hide_status(&mut self) {
        self.events.push(Event::HideStatus);
    }

    fn set_search_enabled(&mut self, enabled: bool) {
        self.events.push(Event::Enabled(enabled));
    }

    fn show_current(&mut self, view: &CurrentView) {
        self.events.push(Event::Current(view.clone()));
    }

    fn hide_current(&mut self) {
        self.events.push(Event::HideCurrent);
    }

    fn show_forecast(&mut self, cards: &[ForecastCard]) {
        self.events.push(Event::Forecast(cards.to_vec()));
    }

    fn hide_forecast(&mut self) {
        self.events.push(Event::HideForecast);
    }

    fn apply_background(&mut self, scene: &Scene) {
        self.events.push(Event::Background(scene.theme.as_str().to_string(), scene.night));
    }
}
