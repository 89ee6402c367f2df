use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the rectangle with coords top-left: (x: {}, y: {}) bottom-right: (x: {}, y: {})",
                    point.x,
                    point.y,
                    pixel_rect.top_left().x,
                    pixel_rect.top_left().y,
                    pixel_rect.bottom_right().x,
                    pixel_rect.bottom_right().y
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the plane point at its top-left corner.
///
/// Pixel `x` lands on `min_real + span * x / width`, so the last column sits
/// one pixel-width short of `max_real`.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let relative_pixel_x = f64::from(pixel_position.x - pixel_rect.top_left().x);
    let relative_pixel_y = f64::from(pixel_position.y - pixel_rect.top_left().y);
    let real = complex_rect.top_left().real
        + complex_rect.width() * relative_pixel_x / f64::from(pixel_rect.width());
    let imag = complex_rect.top_left().imag
        + complex_rect.height() * relative_pixel_y / f64::from(pixel_rect.height());

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_region() -> ComplexRect {
        ComplexRect::from_bounds(-2.5, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let pixel_rect = PixelRect::from_size(4, 3).unwrap();

        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, classic_region());

        assert_eq!(result, Ok(Complex::new(-2.5, -1.0)));
    }

    #[test]
    fn test_pixel_to_complex_last_pixel_is_one_step_short_of_max() {
        let pixel_rect = PixelRect::from_size(4, 3).unwrap();
        let region = classic_region();

        let result =
            pixel_to_complex_coords(Point { x: 3, y: 2 }, pixel_rect, region).unwrap();

        assert_eq!(result.real, -2.5 + 3.5 * 3.0 / 4.0);
        assert_eq!(result.imag, -1.0 + 2.0 * 2.0 / 3.0);
        assert!(region.bottom_right().real - result.real <= region.width() / 4.0 + 1e-12);
        assert!(region.bottom_right().imag - result.imag <= region.height() / 3.0 + 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let pixel_rect = PixelRect::from_size(100, 100).unwrap();
        let complex_rect = ComplexRect::from_bounds(-1.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 50, y: 50 }, pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::new(0.0, 0.0)));
    }

    #[test]
    fn test_offset_pixel_rect_is_relative() {
        let pixel_rect = PixelRect::new(Point { x: 10, y: 10 }, Point { x: 109, y: 109 }).unwrap();
        let complex_rect = ComplexRect::from_bounds(-1.0, 1.0, -1.0, 1.0).unwrap();

        let result = pixel_to_complex_coords(Point { x: 10, y: 10 }, pixel_rect, complex_rect);

        assert_eq!(result, Ok(Complex::new(-1.0, -1.0)));
    }

    #[test]
    fn test_pixel_outside_complex_fails() {
        let point1 = Point { x: 150, y: 150 };
        let point2 = Point { x: -10, y: -10 };
        let pixel_rect = PixelRect::from_size(101, 101).unwrap();

        let result1 = pixel_to_complex_coords(point1, pixel_rect, classic_region());
        let result2 = pixel_to_complex_coords(point2, pixel_rect, classic_region());

        assert_eq!(
            result1,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point1,
                pixel_rect
            })
        );
        assert_eq!(
            result2,
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point: point2,
                pixel_rect
            })
        );
    }
}
