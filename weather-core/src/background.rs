//! Decorative background scene picked from the current conditions.
//!
//! Nothing here affects the data shown; a renderer is free to ignore the
//! decorations entirely.

use rand::Rng;

/// Broad condition family derived from the provider's "main" group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Storm,
    Snow,
    Other,
}

impl ConditionCategory {
    pub fn from_main(main: &str) -> Self {
        match main {
            "Clear" => ConditionCategory::Clear,
            "Clouds" | "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" | "Squall"
            | "Tornado" => ConditionCategory::Clouds,
            "Rain" | "Drizzle" | "Shower" => ConditionCategory::Rain,
            "Thunderstorm" | "Extreme" => ConditionCategory::Storm,
            "Snow" => ConditionCategory::Snow,
            _ => ConditionCategory::Other,
        }
    }
}

/// Base colour scheme of the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Clear,
    Cloudy,
    Rain,
    Storm,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Clear => "clear",
            Theme::Cloudy => "cloudy",
            Theme::Rain => "rain",
            Theme::Storm => "storm",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    Sun,
    Star,
    Cloud,
    RainDrop,
    Snowflake,
}

/// One animated element. Positions are percentages of the backdrop.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub top_pct: f64,
    pub left_pct: f64,
    pub delay_secs: f64,
    pub duration_secs: Option<f64>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub category: ConditionCategory,
    pub theme: Theme,
    pub night: bool,
    pub decorations: Vec<Decoration>,
}

const STAR_COUNT: usize = 50;
const CLOUD_COUNT: usize = 5;
const RAIN_DROP_COUNT: usize = 150;
const SNOWFLAKE_COUNT: usize = 80;

impl Scene {
    /// Builds the scene for a provider condition group and icon code.
    /// Night is taken from the icon code's `n` suffix.
    pub fn generate<R: Rng + ?Sized>(main: &str, icon_code: &str, rng: &mut R) -> Self {
        let category = ConditionCategory::from_main(main);
        let night = icon_code.ends_with('n');

        let (theme, decorations) = match category {
            ConditionCategory::Clear if night => (Theme::Clear, stars(rng)),
            ConditionCategory::Clear => (Theme::Clear, vec![sun()]),
            ConditionCategory::Clouds => (Theme::Cloudy, clouds(rng)),
            ConditionCategory::Rain => (Theme::Rain, rain(rng)),
            ConditionCategory::Storm => (Theme::Storm, Vec::new()),
            ConditionCategory::Snow => (Theme::Cloudy, snow(rng)),
            ConditionCategory::Other => (Theme::Clear, Vec::new()),
        };

        Self {
            category,
            theme,
            night,
            decorations,
        }
    }
}

fn sun() -> Decoration {
    Decoration {
        kind: DecorationKind::Sun,
        top_pct: 10.0,
        left_pct: 80.0,
        delay_secs: 0.0,
        duration_secs: None,
        opacity: 1.0,
    }
}

fn stars<R: Rng + ?Sized>(rng: &mut R) -> Vec<Decoration> {
    (0..STAR_COUNT)
        .map(|_| Decoration {
            kind: DecorationKind::Star,
            top_pct: rng.random_range(0.0..95.0),
            left_pct: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..5.0),
            duration_secs: None,
            opacity: 1.0,
        })
        .collect()
}

fn clouds<R: Rng + ?Sized>(rng: &mut R) -> Vec<Decoration> {
    (0..CLOUD_COUNT)
        .map(|_| Decoration {
            kind: DecorationKind::Cloud,
            top_pct: rng.random_range(10.0..90.0),
            left_pct: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..10.0),
            duration_secs: Some(rng.random_range(30.0..60.0)),
            opacity: 1.0,
        })
        .collect()
}

fn rain<R: Rng + ?Sized>(rng: &mut R) -> Vec<Decoration> {
    (0..RAIN_DROP_COUNT)
        .map(|_| Decoration {
            kind: DecorationKind::RainDrop,
            top_pct: rng.random_range(0.0..100.0),
            left_pct: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..2.0),
            duration_secs: None,
            opacity: rng.random_range(0.3..0.8),
        })
        .collect()
}

fn snow<R: Rng + ?Sized>(rng: &mut R) -> Vec<Decoration> {
    (0..SNOWFLAKE_COUNT)
        .map(|_| Decoration {
            kind: DecorationKind::Snowflake,
            top_pct: rng.random_range(0.0..100.0),
            left_pct: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..5.0),
            duration_secs: Some(rng.random_range(5.0..10.0)),
            opacity: rng.random_range(0.5..1.0),
        })
        .collect()
}
