use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
    NonFinite { top_left: Complex, bottom_right: Complex },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFinite {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "complex rect corners must be finite: ({}, {}) to ({}, {})",
                    top_left.real, top_left.imag, bottom_right.real, bottom_right.imag
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real and imaginary bounds, `bottom_right` the
/// maximums, so both spans are always strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        if !top_left.is_finite() || !bottom_right.is_finite() {
            return Err(ComplexRectError::NonFinite {
                top_left,
                bottom_right,
            });
        }

        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        if width <= 0.0 || height <= 0.0 {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        min_real: f64,
        max_real: f64,
        min_imag: f64,
        max_imag: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(min_real, min_imag),
            Complex::new(max_real, max_imag),
        )
    }

    pub fn centered_at(center: Complex, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        let half_width = width * 0.5;
        let half_height = height * 0.5;

        Self::new(
            Complex::new(center.real - half_width, center.imag - half_height),
            Complex::new(center.real + half_width, center.imag + half_height),
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.top_left.real + self.bottom_right.real) * 0.5,
            (self.top_left.imag + self.bottom_right.imag) * 0.5,
        )
    }

    pub fn translated(&self, delta: Complex) -> Result<Self, ComplexRectError> {
        Self::new(self.top_left + delta, self.bottom_right + delta)
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}
