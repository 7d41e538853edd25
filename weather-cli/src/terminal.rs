//! Terminal rendering of search results.

use std::io::{self, Write};

use tracing::{trace, warn};
use weather_core::{
    CurrentView, ForecastCard, RenderTarget, Scene, StatusKind,
    background::{Decoration, DecorationKind},
};

const CARD_WIDTH: usize = 20;
const SKY_WIDTH: usize = 48;
const SKY_HEIGHT: usize = 4;

/// Writes each section as it is shown. A terminal cannot take text back, so
/// the `hide_*` calls only matter for what gets printed later.
pub struct TerminalTarget<W: Write> {
    out: W,
}

impl TerminalTarget<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalTarget<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!(error = %err, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> std::fmt::Debug for TerminalTarget<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalTarget").finish_non_exhaustive()
    }
}

impl<W: Write> RenderTarget for TerminalTarget<W> {
    fn show_status(&mut self, message: &str, kind: StatusKind) {
        let text = match kind {
            StatusKind::Info => format!("[info] {message}"),
            StatusKind::Error => format!("[error] {message}"),
        };
        self.emit(&text);
    }

    fn hide_status(&mut self) {}

    /// The prompt only reappears once `search` returns, so there is
    /// nothing to lock here.
    fn set_search_enabled(&mut self, enabled: bool) {
        trace!(enabled, "search input toggled");
    }

    fn show_current(&mut self, view: &CurrentView) {
        self.emit(&current_block(view));
    }

    fn hide_current(&mut self) {}

    fn show_forecast(&mut self, cards: &[ForecastCard]) {
        self.emit(&forecast_row(cards));
    }

    fn hide_forecast(&mut self) {}

    fn apply_background(&mut self, scene: &Scene) {
        if let Some(sky) = sky_strip(scene) {
            self.emit(&sky);
        }
    }
}

fn current_block(view: &CurrentView) -> String {
    format!(
        "\n{location}\n{date}\n{icon}  {temp}°C  {description}\n\
         Feels like {feels} | Humidity {humidity} | Wind {wind} | Pressure {pressure}\n",
        location = view.location,
        date = view.date,
        icon = view.icon,
        temp = view.temperature,
        description = view.description,
        feels = view.feels_like,
        humidity = view.humidity,
        wind = view.wind,
        pressure = view.pressure,
    )
}

fn pad(text: &str) -> String {
    let len = text.chars().count();
    if len >= CARD_WIDTH {
        text.chars().take(CARD_WIDTH - 1).chain([' ']).collect()
    } else {
        format!("{text}{}", " ".repeat(CARD_WIDTH - len))
    }
}

/// Cards side by side, one attribute per line.
fn forecast_row(cards: &[ForecastCard]) -> String {
    let rows: [fn(&ForecastCard) -> String; 4] = [
        |c: &ForecastCard| format!("{} ({})", c.day_name, c.month_day),
        |c: &ForecastCard| format!("{} {}", c.icon, c.description),
        |c: &ForecastCard| c.max.clone(),
        |c: &ForecastCard| c.min.clone(),
    ];

    let mut out = String::from("Forecast\n");
    for row in &rows {
        let line: String = cards.iter().map(|card| pad(&row(card))).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn glyph(kind: DecorationKind) -> char {
    match kind {
        DecorationKind::Sun => 'O',
        DecorationKind::Star => '.',
        DecorationKind::Cloud => '~',
        DecorationKind::RainDrop => '\'',
        DecorationKind::Snowflake => '*',
    }
}

fn cell(decoration: &Decoration) -> (usize, usize) {
    let scale = |pct: f64, cells: usize| ((pct.clamp(0.0, 99.999) / 100.0) * cells as f64) as usize;
    (scale(decoration.top_pct, SKY_HEIGHT), scale(decoration.left_pct, SKY_WIDTH))
}

/// Small character sketch of the scene; `None` when there is nothing to draw.
fn sky_strip(scene: &Scene) -> Option<String> {
    if scene.decorations.is_empty() {
        return None;
    }

    let mut grid = vec![vec![' '; SKY_WIDTH]; SKY_HEIGHT];
    for decoration in &scene.decorations {
        let (row, col) = cell(decoration);
        grid[row][col] = glyph(decoration.kind);
    }

    let mut out = format!(
        "[{}{}]\n",
        scene.theme.as_str(),
        if scene.night { " night" } else { "" }
    );
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Some(out)
}
