use crate::{
    background::Scene,
    present::{CurrentView, ForecastCard},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// Output surface the search orchestrator draws on.
///
/// Implementations own the actual display (a terminal, a window, a test
/// recorder); the orchestrator is the only writer.
pub trait RenderTarget {
    fn show_status(&mut self, message: &str, kind: StatusKind);
    fn hide_status(&mut self);

    /// Disabled while a search is running.
    fn set_search_enabled(&mut self, enabled: bool);

    fn show_current(&mut self, view: &CurrentView);
    fn hide_current(&mut self);

    fn show_forecast(&mut self, cards: &[ForecastCard]);
    fn hide_forecast(&mut self);

    fn apply_background(&mut self, scene: &Scene);
}
