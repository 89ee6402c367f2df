use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours row-major per-pixel values into an RGB buffer.
///
/// Scanlines are coloured in parallel; each task owns a disjoint slice of
/// the output. The input length must match the pixel rect.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T>,
{
    let row_width = pixel_rect.width() as usize;
    let mut buffer: PixelBufferData = vec![0; input.len() * BYTES_PER_PIXEL];

    buffer
        .par_chunks_mut(row_width * BYTES_PER_PIXEL)
        .zip(input.par_chunks(row_width))
        .for_each(|(row_bytes, row_values)| {
            for (rgb, &value) in row_bytes
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(row_values)
            {
                let colour = mapper.map(value);
                rgb[0] = colour.r;
                rgb[1] = colour.g;
                rgb[2] = colour.b;
            }
        });

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
