use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::formula_defaults::FormulaDefaults;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Escape-time recurrences the renderer can iterate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Formula {
    #[default]
    Mandelbrot,
    Tricorn,
    MandelbrotTricornAnimation,
    BurningShip,
    Experimental,
}

impl Formula {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Tricorn,
        Self::MandelbrotTricornAnimation,
        Self::BurningShip,
        Self::Experimental,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::MandelbrotTricornAnimation => "Ma-Tri Animation",
            Self::BurningShip => "Burning Ship",
            Self::Experimental => "Experimental",
        }
    }

    /// Name accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Tricorn => "tricorn",
            Self::MandelbrotTricornAnimation => "animation",
            Self::BurningShip => "burning-ship",
            Self::Experimental => "experimental",
        }
    }

    #[must_use]
    pub const fn defaults(self) -> FormulaDefaults {
        match self {
            Self::Mandelbrot => FormulaDefaults::MANDELBROT,
            Self::Tricorn => FormulaDefaults::TRICORN,
            Self::MandelbrotTricornAnimation => FormulaDefaults::MANDELBROT_TRICORN_ANIMATION,
            Self::BurningShip => FormulaDefaults::BURNING_SHIP,
            Self::Experimental => FormulaDefaults::EXPERIMENTAL,
        }
    }

    #[must_use]
    pub fn default_region(self) -> ComplexRect {
        self.defaults()
            .region()
            .expect("formula default regions are valid")
    }

    #[must_use]
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::MandelbrotTricornAnimation)
    }

    /// One application of the recurrence to `z` for plane point `c`.
    ///
    /// `phase` is only read by the animated formula. The new real part is
    /// computed first and the imaginary part is derived from the old `z`.
    #[inline]
    #[must_use]
    pub fn step(self, z: Complex, c: Complex, phase: f64) -> Complex {
        let Complex { real: re, imag: im } = z;

        match self {
            Self::Mandelbrot => {
                let next_re = re * re - im * im + c.real;
                Complex::new(next_re, 2.0 * re * im + c.imag)
            }
            Self::Tricorn => {
                let next_re = re * re - im * im + c.real;
                Complex::new(next_re, -2.0 * re * im + c.imag)
            }
            Self::MandelbrotTricornAnimation => {
                let next_re = re * re - im * im + c.real;
                Complex::new(next_re, 2.0 * phase.sin() * re * im + c.imag)
            }
            Self::BurningShip => {
                let next_re = re * re - im * im + c.real;
                Complex::new(next_re, 2.0 * (re * im).abs() + c.imag)
            }
            Self::Experimental => {
                let tmp = re * re - im * im + c.real.cos();
                let next_im = (tmp * im) % 2.0 + c.imag.cos();
                let next_re = ((tmp * re).cos() * 4.0) % 2.0;
                Complex::new(next_re, next_im)
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormulaError {
    input: String,
}

impl fmt::Display for ParseFormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Formula::ALL.iter().map(|formula| formula.slug()).collect();
        write!(
            f,
            "unknown formula '{}', expected one of: {}",
            self.input,
            known.join(", ")
        )
    }
}

impl Error for ParseFormulaError {}

impl FromStr for Formula {
    type Err = ParseFormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();

        Self::ALL
            .iter()
            .copied()
            .find(|formula| formula.slug() == wanted)
            .ok_or(ParseFormulaError {
                input: s.to_string(),
            })
    }
}
