use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Dense RGB frame in row-major order, three bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.buffer.len() / BYTES_PER_PIXEL
    }

    /// Colour at `pixel`, or `None` when it lies outside the buffer's rect.
    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.pixel_rect.contains_point(pixel) {
            return None;
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;
        let index =
            (relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL;

        Some(Colour::new(
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
        ))
    }

    pub fn colours(&self) -> impl Iterator<Item = Colour> + '_ {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour::new(rgb[0], rgb[1], rgb[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::from_size(width, height).unwrap()
    }

    fn create_offset_pixel_rect(x: i32, y: i32, width: i32, height: i32) -> PixelRect {
        PixelRect::new(
            Point { x, y },
            Point {
                x: x + width - 1,
                y: y + height - 1,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel_count(), 4);
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = create_pixel_rect(2, 2);
        let result = PixelBuffer::from_data(pixel_rect, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let pixel_rect = create_pixel_rect(2, 2);
        let result = PixelBuffer::from_data(pixel_rect, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 24
            }
        );
    }

    #[test]
    fn test_buffer_size_getter() {
        let pixel_rect = create_pixel_rect(5, 7);
        let buffer = PixelBuffer::from_data(pixel_rect, vec![0; 105]).unwrap();

        assert_eq!(buffer.buffer_size(), 105); // 5 * 7 * 3
    }

    #[test]
    fn test_pixel_reads_row_major_layout() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buffer = PixelBuffer::from_data(pixel_rect, data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::new(1, 2, 3)));
        assert_eq!(buffer.pixel(Point { x: 1, y: 0 }), Some(Colour::new(4, 5, 6)));
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }), Some(Colour::new(7, 8, 9)));
        assert_eq!(buffer.pixel(Point { x: 1, y: 1 }), Some(Colour::new(10, 11, 12)));
    }

    #[test]
    fn test_pixel_with_offset_rect() {
        let pixel_rect = create_offset_pixel_rect(10, 20, 3, 3);
        let mut data = vec![0; 27];
        data[12..15].copy_from_slice(&[255, 255, 255]);
        let buffer = PixelBuffer::from_data(pixel_rect, data).unwrap();

        assert_eq!(buffer.pixel(Point { x: 11, y: 21 }), Some(Colour::WHITE));
        assert_eq!(buffer.pixel(Point { x: 10, y: 20 }), Some(Colour::BLACK));
    }

    #[test]
    fn test_pixel_outside_bounds_is_none() {
        let buffer = PixelBuffer::from_data(create_pixel_rect(3, 3), vec![0; 27]).unwrap();

        assert_eq!(buffer.pixel(Point { x: 5, y: 1 }), None);
        assert_eq!(buffer.pixel(Point { x: 1, y: 5 }), None);
        assert_eq!(buffer.pixel(Point { x: -1, y: -1 }), None);
    }

    #[test]
    fn test_colours_iterates_every_pixel() {
        let data: Vec<u8> = vec![1, 1, 1, 2, 2, 2, 3, 3, 3];
        let buffer = PixelBuffer::from_data(create_pixel_rect(3, 1), data).unwrap();
        let colours: Vec<Colour> = buffer.colours().collect();

        assert_eq!(
            colours,
            vec![Colour::new(1, 1, 1), Colour::new(2, 2, 2), Colour::new(3, 3, 3)]
        );
    }
}
