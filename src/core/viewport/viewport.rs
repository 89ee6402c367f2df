use log::debug;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::formula::Formula;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::iteration_budget::{
    DEFAULT_ITERATION_BUDGET, doubled, dynamic_iteration_budget, halved,
};
use crate::core::viewport::zoom::{ZoomTarget, zoom_region};

pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// The complex-plane view being explored, plus the formula state that goes
/// with it.
///
/// Mutated between frames by the event loop; the renderer only reads it,
/// apart from refreshing the dynamic iteration budget before a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    region: ComplexRect,
    formula: Formula,
    animation_phase: f64,
    escape_radius_squared: f64,
    iteration_budget: u32,
    dynamic_iterations: bool,
}

impl Viewport {
    #[must_use]
    pub fn new(formula: Formula, dynamic_iterations: bool) -> Self {
        Self {
            region: formula.default_region(),
            formula,
            animation_phase: 0.0,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            dynamic_iterations,
        }
    }

    /// Viewport over an explicit region, in fixed-iteration mode.
    pub fn with_region(
        formula: Formula,
        region: ComplexRect,
        iteration_budget: u32,
    ) -> Result<Self, ViewportError> {
        let mut viewport = Self::new(formula, false);
        viewport.region = region;
        viewport.set_iteration_budget(iteration_budget)?;

        Ok(viewport)
    }

    pub fn with_escape_radius_squared(
        mut self,
        escape_radius_squared: f64,
    ) -> Result<Self, ViewportError> {
        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(ViewportError::InvalidEscapeRadius {
                escape_radius_squared,
            });
        }

        self.escape_radius_squared = escape_radius_squared;
        Ok(self)
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn formula(&self) -> Formula {
        self.formula
    }

    #[must_use]
    pub fn animation_phase(&self) -> f64 {
        self.animation_phase
    }

    #[must_use]
    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }

    #[must_use]
    pub fn iteration_budget(&self) -> u32 {
        self.iteration_budget
    }

    #[must_use]
    pub fn dynamic_iterations(&self) -> bool {
        self.dynamic_iterations
    }

    pub fn set_region(&mut self, region: ComplexRect) {
        self.region = region;
    }

    pub fn set_iteration_budget(&mut self, iteration_budget: u32) -> Result<(), ViewportError> {
        if iteration_budget == 0 {
            return Err(ViewportError::ZeroIterationBudget);
        }

        self.iteration_budget = iteration_budget;
        Ok(())
    }

    /// Switches formula and starts a fresh view: default bounds, default
    /// budget, phase zero.
    pub fn select_formula(&mut self, formula: Formula) {
        self.formula = formula;
        self.region = formula.default_region();
        self.iteration_budget = DEFAULT_ITERATION_BUDGET;
        self.animation_phase = 0.0;

        debug!("selected formula {}", formula);
    }

    pub fn toggle_iteration_mode(&mut self) {
        self.dynamic_iterations = !self.dynamic_iterations;
        self.iteration_budget = DEFAULT_ITERATION_BUDGET;
    }

    pub fn double_iterations(&mut self) {
        self.iteration_budget = doubled(self.iteration_budget);
    }

    pub fn halve_iterations(&mut self) {
        self.iteration_budget = halved(self.iteration_budget);
    }

    pub fn advance_animation(&mut self, step: f64) {
        self.animation_phase += step;
    }

    /// Recomputes the budget from the zoom level when dynamic mode is on.
    /// Must run before any pixel of the frame is computed.
    pub fn apply_iteration_policy(&mut self, image_width: u32) {
        if self.dynamic_iterations {
            self.iteration_budget = dynamic_iteration_budget(image_width, &self.region);
        }
    }

    /// Rescales the region by `1 / factor` about `target`. On error the
    /// viewport is left unchanged.
    pub fn zoom(
        &mut self,
        target: ZoomTarget,
        factor: f64,
        pixel_rect: PixelRect,
    ) -> Result<(), ViewportError> {
        let point = target.resolve(self.region, pixel_rect)?;
        self.region = zoom_region(self.region, point, factor)?;

        Ok(())
    }

    /// Shifts the region by `move_factor` of its span along one axis.
    ///
    /// Up and left move towards smaller imaginary and real values.
    pub fn pan(&mut self, direction: PanDirection, move_factor: f64) -> Result<(), ViewportError> {
        if !move_factor.is_finite() {
            return Err(ViewportError::InvalidMoveFactor {
                factor: move_factor,
            });
        }

        let width_step = self.region.width() * move_factor;
        let height_step = self.region.height() * move_factor;

        let delta = match direction {
            PanDirection::Up => Complex::new(0.0, -height_step),
            PanDirection::Down => Complex::new(0.0, height_step),
            PanDirection::Left => Complex::new(-width_step, 0.0),
            PanDirection::Right => Complex::new(width_step, 0.0),
        };

        self.region = self.region.translated(delta)?;
        Ok(())
    }

    /// Moves the view so the content under `from` ends up under `to`.
    ///
    /// Both axes use the real span per pixel, so drags stay isotropic for
    /// frames whose aspect ratio matches the region's.
    pub fn drag(&mut self, from: Point, to: Point, pixel_rect: PixelRect) -> Result<(), ViewportError> {
        let step = self.region.width() / f64::from(pixel_rect.width());
        let delta = Complex::new(
            (f64::from(from.x) - f64::from(to.x)) * step,
            (f64::from(from.y) - f64::from(to.y)) * step,
        );

        self.region = self.region.translated(delta)?;
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Formula::default(), true)
    }
}
