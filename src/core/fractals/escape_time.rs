use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::formula::Formula;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use crate::core::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeError {
    ZeroMaxIterations,
    InvalidEscapeRadius { escape_radius_squared: f64 },
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadius {
                escape_radius_squared,
            } => {
                write!(
                    f,
                    "escape radius squared must be positive and finite, got {}",
                    escape_radius_squared
                )
            }
        }
    }
}

impl Error for EscapeTimeError {}

/// Read-only snapshot of everything a pixel worker needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    pixel_rect: PixelRect,
    region: ComplexRect,
    formula: Formula,
    max_iterations: u32,
    escape_radius_squared: f64,
    animation_phase: f64,
}

impl EscapeTimeAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        region: ComplexRect,
        formula: Formula,
        max_iterations: u32,
        escape_radius_squared: f64,
        animation_phase: f64,
    ) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if !escape_radius_squared.is_finite() || escape_radius_squared <= 0.0 {
            return Err(EscapeTimeError::InvalidEscapeRadius {
                escape_radius_squared,
            });
        }

        Ok(Self {
            pixel_rect,
            region,
            formula,
            max_iterations,
            escape_radius_squared,
            animation_phase,
        })
    }

    /// Snapshot of `viewport` for rendering into `pixel_rect`.
    #[must_use]
    pub fn for_viewport(viewport: &Viewport, pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            region: viewport.region(),
            formula: viewport.formula(),
            max_iterations: viewport.iteration_budget(),
            escape_radius_squared: viewport.escape_radius_squared(),
            animation_phase: viewport.animation_phase(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iteration index at which the orbit of `c` escaped, or
    /// `max_iterations` if it never did.
    ///
    /// The divergence test runs after each step, so an orbit that leaves the
    /// escape radius on the very first step reports 0.
    #[must_use]
    pub fn escape_iterations(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            z = self.formula.step(z, c, self.animation_phase);

            if z.magnitude_squared() > self.escape_radius_squared {
                return iteration;
            }
        }

        self.max_iterations
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.region)?;

        Ok(self.escape_iterations(c))
    }
}
