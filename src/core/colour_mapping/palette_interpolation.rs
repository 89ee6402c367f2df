use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

/// Colour for an escape-iteration count, blended between adjacent palette
/// stops.
///
/// Counts that reached the budget (or a zero budget) are treated as 0 and
/// land exactly on the first stop. Channels are truncated, so a half-way
/// blend of black and white is 127.
#[must_use]
pub fn colour_for(iterations: u32, budget: u32, palette: &Palette) -> Colour {
    if budget == 0 || iterations >= budget {
        return palette.first();
    }

    let last = palette.len() - 1;
    let position = f64::from(iterations) / f64::from(budget) * last as f64;
    let index = (position.floor() as usize).min(last);
    let fraction = position - index as f64;

    let from = palette.colours()[index];
    let to = palette.colours()[(index + 1).min(last)];

    from.lerp(to, fraction)
}

/// [`colour_for`] bound to one frame's palette and budget.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColourMap<'a> {
    palette: &'a Palette,
    budget: u32,
}

impl<'a> PaletteColourMap<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, budget: u32) -> Self {
        Self { palette, budget }
    }
}

impl ColourMap<u32> for PaletteColourMap<'_> {
    fn map(&self, iterations: u32) -> Colour {
        colour_for(iterations, self.budget, self.palette)
    }

    fn display_name(&self) -> &str {
        "Palette interpolation"
    }
}
