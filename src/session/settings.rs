use crate::core::colour_mapping::palette_presets::PalettePreset;
use crate::core::colour_mapping::palette_reserve::DEFAULT_RESERVE_CAPACITY;
use crate::core::fractals::formula::Formula;
use crate::core::viewport::iteration_budget::DEFAULT_ITERATION_BUDGET;
use crate::core::viewport::viewport::DEFAULT_ESCAPE_RADIUS_SQUARED;

/// Tunables for an interactive exploration session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerSettings {
    pub formula: Formula,
    pub palette: PalettePreset,
    pub dynamic_iterations: bool,
    /// Starting budget; dynamic mode replaces it on the first frame.
    pub iteration_budget: u32,
    pub escape_radius_squared: f64,
    /// Scale applied per zoom step; zooming out divides by it.
    pub zoom_factor: f64,
    /// Fraction of the current span moved per pan step.
    pub move_factor: f64,
    pub zoom_into_center: bool,
    /// Scale applied per frame of a zoom-out capture.
    pub capture_zoom_factor: f64,
    /// Seconds between animation phase advances.
    pub animation_tick: f64,
    pub animation_phase_step: f64,
    pub palette_reserve_capacity: usize,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            formula: Formula::default(),
            palette: PalettePreset::default(),
            dynamic_iterations: true,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            zoom_factor: 1.25,
            move_factor: 0.05,
            zoom_into_center: true,
            capture_zoom_factor: 1.0 / 1.2,
            animation_tick: 0.025,
            animation_phase_step: 0.05,
            palette_reserve_capacity: DEFAULT_RESERVE_CAPACITY,
        }
    }
}
