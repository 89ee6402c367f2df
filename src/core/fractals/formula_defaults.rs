use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};

/// Starting view for a formula: base bounds scaled about the origin, then
/// shifted by the offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FormulaDefaults {
    pub min_real: f64,
    pub max_real: f64,
    pub min_imag: f64,
    pub max_imag: f64,
    pub offset_real: f64,
    pub offset_imag: f64,
    pub scale: f64,
}

impl FormulaDefaults {
    pub const MANDELBROT: Self = Self {
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.0,
        max_imag: 1.0,
        offset_real: 0.5,
        offset_imag: 0.0,
        scale: 1.5,
    };

    pub const TRICORN: Self = Self {
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.0,
        max_imag: 1.0,
        offset_real: 1.5,
        offset_imag: 0.0,
        scale: 2.0,
    };

    pub const MANDELBROT_TRICORN_ANIMATION: Self = Self {
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.0,
        max_imag: 0.75,
        offset_real: 1.0,
        offset_imag: 0.0,
        scale: 2.0,
    };

    pub const BURNING_SHIP: Self = Self {
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.0,
        max_imag: 1.0,
        offset_real: 1.0,
        offset_imag: -0.75,
        scale: 1.5,
    };

    pub const EXPERIMENTAL: Self = Self {
        min_real: -2.5,
        max_real: 1.0,
        min_imag: -1.0,
        max_imag: 1.0,
        offset_real: 0.0,
        offset_imag: 0.0,
        scale: 1.5,
    };

    pub fn region(&self) -> Result<ComplexRect, ComplexRectError> {
        ComplexRect::from_bounds(
            self.min_real * self.scale + self.offset_real,
            self.max_real * self.scale + self.offset_real,
            self.min_imag * self.scale + self.offset_imag,
            self.max_imag * self.scale + self.offset_imag,
        )
    }
}
