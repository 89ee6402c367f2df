use std::{error::Error, fmt};

use crate::core::data::complex_rect::ComplexRectError;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    ZeroIterationBudget,
    InvalidEscapeRadius { escape_radius_squared: f64 },
    InvalidZoomFactor { factor: f64 },
    InvalidMoveFactor { factor: f64 },
    Region(ComplexRectError),
    Cursor(PixelToComplexCoordsError),
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationBudget => {
                write!(f, "iteration budget must be greater than zero")
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
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::InvalidMoveFactor { factor } => {
                write!(f, "move factor must be finite, got {}", factor)
            }
            Self::Region(err) => write!(f, "viewport region error: {}", err),
            Self::Cursor(err) => write!(f, "cursor error: {}", err),
        }
    }
}

impl Error for ViewportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Region(err) => Some(err),
            Self::Cursor(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ComplexRectError> for ViewportError {
    fn from(err: ComplexRectError) -> Self {
        Self::Region(err)
    }
}

impl From<PixelToComplexCoordsError> for ViewportError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Cursor(err)
    }
}
