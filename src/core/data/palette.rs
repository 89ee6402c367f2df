use crate::core::data::colour::Colour;
use rand::Rng;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "palette must contain at least one colour"),
        }
    }
}

impl Error for PaletteError {}

/// Ordered, non-empty list of colour stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    pub fn new(colours: Vec<Colour>) -> Result<Self, PaletteError> {
        if colours.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn single(colour: Colour) -> Self {
        Self {
            colours: vec![colour],
        }
    }

    /// Black followed by `len - 1` random colours, each channel in `0..255`.
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Self, PaletteError> {
        if len == 0 {
            return Err(PaletteError::Empty);
        }

        let mut colours = Vec::with_capacity(len);
        colours.push(Colour::BLACK);
        colours.extend((1..len).map(|_| random_colour(rng)));

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Always false.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    #[must_use]
    pub fn first(&self) -> Colour {
        self.colours[0]
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    pub(crate) fn push(&mut self, colour: Colour) {
        self.colours.push(colour);
    }

    /// Removes the last stop unless it is the only one left.
    pub(crate) fn pop(&mut self) -> Option<Colour> {
        if self.colours.len() > 1 {
            self.colours.pop()
        } else {
            None
        }
    }
}

pub(crate) fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    Colour::new(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    )
}
