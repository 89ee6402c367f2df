use log::debug;
use rand::Rng;

use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;

/// Reserve size used by interactive sessions.
pub const DEFAULT_RESERVE_CAPACITY: usize = 2000;

/// Fixed superset of a palette that growing draws from.
///
/// The reserve starts with the palette's own stops, so growing after a
/// shrink brings back the same colours rather than new random ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteReserve {
    colours: Vec<Colour>,
}

impl PaletteReserve {
    /// `palette` followed by a fresh random run (black first) up to
    /// `capacity` stops. A palette already at or past `capacity` gets no
    /// extra stops.
    pub fn new<R: Rng + ?Sized>(palette: &Palette, capacity: usize, rng: &mut R) -> Self {
        let mut colours = palette.colours().to_vec();

        if let Ok(extra) = Palette::random(capacity.saturating_sub(colours.len()), rng) {
            colours.extend_from_slice(extra.colours());
        }

        Self { colours }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Appends the reserve stop at the palette's current length, if any.
    /// Returns whether the palette grew.
    pub fn grow(&self, palette: &mut Palette) -> bool {
        match self.colours.get(palette.len()) {
            Some(&colour) => {
                palette.push(colour);
                debug!("palette grown to {} colours", palette.len());
                true
            }
            None => false,
        }
    }

    /// Drops the last stop. A one-stop palette grows instead.
    pub fn shrink(&self, palette: &mut Palette) {
        if palette.pop().is_none() {
            self.grow(palette);
            return;
        }

        debug!("palette shrunk to {} colours", palette.len());
    }
}
