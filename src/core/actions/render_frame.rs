use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::colour_mapping::palette_interpolation::PaletteColourMap;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::escape_time::EscapeTimeAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use crate::core::viewport::Viewport;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderFrameError {
    Escape(PixelToComplexCoordsError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape(err) => write!(f, "escape iteration failed: {}", err),
            Self::PixelBuffer(err) => write!(f, "colouring failed: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Escape(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for RenderFrameError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Escape(err)
    }
}

impl From<GeneratePixelBufferError> for RenderFrameError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Diagnostics gathered while rendering one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub iteration_budget: u32,
    pub total_iterations: u64,
    pub escaped_pixels: u64,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub buffer: PixelBuffer,
    pub stats: FrameStats,
}

/// Renders one frame of `viewport` into `pixel_rect`.
///
/// The iteration policy runs first, so in dynamic mode the viewport's
/// budget is updated for this frame before any pixel is computed. Escape
/// counts are computed one row per rayon task and then coloured through the
/// palette.
pub fn render_frame(
    viewport: &mut Viewport,
    palette: &Palette,
    pixel_rect: PixelRect,
) -> Result<RenderedFrame, RenderFrameError> {
    let start = Instant::now();

    viewport.apply_iteration_policy(pixel_rect.width());

    let algorithm = EscapeTimeAlgorithm::for_viewport(viewport, pixel_rect);
    let budget = algorithm.max_iterations();
    let iterations = generate_fractal_parallel_rayon(pixel_rect, &algorithm)?;

    let colour_map = PaletteColourMap::new(palette, budget);
    let buffer = generate_pixel_buffer(&iterations, &colour_map, pixel_rect)?;

    let stats = FrameStats {
        iteration_budget: budget,
        total_iterations: iterations.iter().map(|&count| u64::from(count)).sum(),
        escaped_pixels: iterations.iter().filter(|&&count| count < budget).count() as u64,
        elapsed: start.elapsed(),
    };

    debug!(
        "rendered {}x{} {} frame: budget {}, {} escaped, {} iterations in {:?}",
        pixel_rect.width(),
        pixel_rect.height(),
        viewport.formula(),
        stats.iteration_budget,
        stats.escaped_pixels,
        stats.total_iterations,
        stats.elapsed
    );

    Ok(RenderedFrame { buffer, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::palette_interpolation::colour_for;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
    use crate::core::data::point::Point;
    use crate::core::fractals::formula::Formula;
    use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
    use crate::core::viewport::iteration_budget::dynamic_iteration_budget;

    fn classic_viewport(budget: u32) -> Viewport {
        let region = ComplexRect::from_bounds(-2.5, 1.0, -1.0, 1.0).unwrap();
        Viewport::with_region(Formula::Mandelbrot, region, budget).unwrap()
    }

    fn grey_ramp() -> Palette {
        Palette::new(vec![Colour::BLACK, Colour::new(255, 0, 0), Colour::WHITE]).unwrap()
    }

    #[test]
    fn buffer_has_three_bytes_per_pixel() {
        let mut viewport = classic_viewport(32);
        let pixel_rect = PixelRect::from_size(7, 5).unwrap();

        let frame = render_frame(&mut viewport, &grey_ramp(), pixel_rect).unwrap();

        assert_eq!(frame.buffer.buffer_size(), 7 * 5 * BYTES_PER_PIXEL);
        assert_eq!(frame.buffer.pixel_rect(), pixel_rect);
    }

    #[test]
    fn every_pixel_matches_the_per_pixel_pipeline() {
        let mut viewport = classic_viewport(24);
        let palette = grey_ramp();
        let pixel_rect = PixelRect::from_size(9, 6).unwrap();
        let algorithm = EscapeTimeAlgorithm::for_viewport(&viewport, pixel_rect);

        let frame = render_frame(&mut viewport, &palette, pixel_rect).unwrap();

        for y in 0..6 {
            for x in 0..9 {
                let pixel = Point { x, y };
                let c = pixel_to_complex_coords(pixel, pixel_rect, viewport.region()).unwrap();
                let expected = colour_for(algorithm.escape_iterations(c), 24, &palette);

                assert_eq!(frame.buffer.pixel(pixel), Some(expected), "pixel {:?}", pixel);
            }
        }
    }

    #[test]
    fn single_colour_palette_fills_the_frame() {
        let mut viewport = classic_viewport(32);
        let colour = Colour::new(9, 8, 7);
        let pixel_rect = PixelRect::from_size(5, 4).unwrap();

        let frame = render_frame(&mut viewport, &Palette::single(colour), pixel_rect).unwrap();

        assert!(frame.buffer.colours().all(|c| c == colour));
    }

    #[test]
    fn dynamic_budget_is_applied_before_rendering() {
        let mut viewport = Viewport::new(Formula::Mandelbrot, true);
        let pixel_rect = PixelRect::from_size(64, 36).unwrap();
        let expected = dynamic_iteration_budget(64, &viewport.region());

        let frame = render_frame(&mut viewport, &grey_ramp(), pixel_rect).unwrap();

        assert_eq!(viewport.iteration_budget(), expected);
        assert_eq!(frame.stats.iteration_budget, expected);
    }

    #[test]
    fn stats_count_escapes_and_iterations() {
        let mut viewport = classic_viewport(32);
        let pixel_rect = PixelRect::from_size(4, 3).unwrap();

        let frame = render_frame(&mut viewport, &grey_ramp(), pixel_rect).unwrap();

        // pixel (0, 0) sits on (-2.5, -1) and escapes on the first step
        assert!(frame.stats.escaped_pixels >= 1);
        assert!(frame.stats.escaped_pixels <= 12);
        assert!(frame.stats.total_iterations <= 12 * 32);
        assert_eq!(frame.buffer.pixel(Point { x: 0, y: 0 }), Some(Colour::BLACK));
    }
}
