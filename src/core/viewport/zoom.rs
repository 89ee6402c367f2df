use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::viewport::errors::ViewportError;

/// Plane point a zoom is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomTarget {
    /// Centre of the current region.
    Center,
    /// The point under this pixel of the frame.
    Pixel(Point),
}

impl ZoomTarget {
    pub fn resolve(
        self,
        region: ComplexRect,
        pixel_rect: PixelRect,
    ) -> Result<Complex, ViewportError> {
        match self {
            Self::Center => Ok(region.center()),
            Self::Pixel(pixel) => Ok(pixel_to_complex_coords(pixel, pixel_rect, region)?),
        }
    }
}

/// Region of `1 / factor` the size of `region`, centred on `target`.
///
/// `factor > 1` zooms in, `0 < factor < 1` zooms out.
pub fn zoom_region(
    region: ComplexRect,
    target: Complex,
    factor: f64,
) -> Result<ComplexRect, ViewportError> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ViewportError::InvalidZoomFactor { factor });
    }

    Ok(ComplexRect::centered_at(
        target,
        region.width() / factor,
        region.height() / factor,
    )?)
}
