use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::palettes::kinds::PaletteKinds;
use std::{error::Error, fmt};

pub const DEFAULT_MAX_ITERATIONS: u32 = 256;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for FractalParamsError {}

/// Which quadratic map family to iterate.
///
/// In Mandelbrot mode the pixel coordinate is the map's constant and the orbit
/// starts at zero. In Julia mode the constant is fixed for the whole image and
/// the pixel coordinate seeds the orbit.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia {
        constant: Complex,
    },
}

impl FractalMode {
    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    mode: FractalMode,
    max_iterations: u32,
    smooth: bool,
    palette: PaletteKinds,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            mode: FractalMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            smooth: false,
            palette: PaletteKinds::default(),
        }
    }
}

impl FractalParams {
    pub fn new(
        mode: FractalMode,
        max_iterations: u32,
        smooth: bool,
        palette: PaletteKinds,
    ) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            mode,
            max_iterations,
            smooth,
            palette,
        })
    }

    #[must_use]
    pub fn mode(&self) -> FractalMode {
        self.mode
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn smooth(&self) -> bool {
        self.smooth
    }

    #[must_use]
    pub fn palette(&self) -> PaletteKinds {
        self.palette
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    /// Switches to Julia mode around a preset seed constant.
    pub fn apply_preset(&mut self, constant: Complex) {
        self.mode = FractalMode::Julia { constant };
    }
}
