use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

const ULTRA_FRACTAL: &[Colour] = &[
    Colour::new(0, 0, 0),
    Colour::new(0, 7, 100),
    Colour::new(32, 107, 203),
    Colour::new(237, 255, 255),
    Colour::new(255, 170, 0),
    Colour::new(0, 2, 0),
];

const SIMPLE: &[Colour] = &[
    Colour::new(0, 7, 100),
    Colour::new(32, 107, 203),
    Colour::new(237, 255, 255),
    Colour::new(255, 170, 0),
    Colour::new(0, 2, 0),
];

const PRIMARY: &[Colour] = &[
    Colour::new(0, 0, 0),
    Colour::new(255, 0, 0),
    Colour::new(0, 255, 0),
    Colour::new(0, 0, 255),
    Colour::new(255, 255, 255),
];

/// Built-in palettes a session can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PalettePreset {
    #[default]
    UltraFractal,
    Simple,
    Primary,
}

impl PalettePreset {
    pub const ALL: &'static [Self] = &[Self::UltraFractal, Self::Simple, Self::Primary];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::UltraFractal => "Ultra Fractal",
            Self::Simple => "Simple",
            Self::Primary => "Primary",
        }
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::UltraFractal => "ultra-fractal",
            Self::Simple => "simple",
            Self::Primary => "primary",
        }
    }

    #[must_use]
    pub const fn colours(self) -> &'static [Colour] {
        match self {
            Self::UltraFractal => ULTRA_FRACTAL,
            Self::Simple => SIMPLE,
            Self::Primary => PRIMARY,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        let mut colours = self.colours().iter().copied();
        // presets are non-empty
        let mut palette = Palette::single(colours.next().unwrap_or(Colour::BLACK));
        colours.for_each(|colour| palette.push(colour));

        palette
    }
}

impl From<PalettePreset> for Palette {
    fn from(preset: PalettePreset) -> Self {
        preset.palette()
    }
}

impl fmt::Display for PalettePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePalettePresetError {
    input: String,
}

impl fmt::Display for ParsePalettePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = PalettePreset::ALL.iter().map(|p| p.slug()).collect();
        write!(
            f,
            "unknown palette '{}', expected one of: {}",
            self.input,
            known.join(", ")
        )
    }
}

impl Error for ParsePalettePresetError {}

impl FromStr for PalettePreset {
    type Err = ParsePalettePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.slug() == wanted)
            .ok_or(ParsePalettePresetError {
                input: s.to_string(),
            })
    }
}
