use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::EscapeResult;
use crate::core::palettes::kinds::PaletteKinds;
use crate::core::palettes::palette::colour_for;
use std::f64::consts::LN_2;
use std::{error::Error, fmt};

/// Floor applied to logarithm arguments during smoothing.
const LOG_FLOOR: f64 = 1e-16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeColourMapError {
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for EscapeColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for EscapeColourMapError {}

/// Continuous escape value: `n + 1 - log2(log2(|z|))` over the limit.
///
/// Not clamped, so it can land slightly outside [0, 1].
#[must_use]
pub fn smoothed_escape_value(result: EscapeResult, max_iterations: u32) -> f64 {
    let magnitude = result.z.magnitude_squared().sqrt();
    let log_zn = magnitude.max(LOG_FLOOR).ln();
    let nu = (log_zn / LN_2).max(LOG_FLOOR).ln() / LN_2;

    (result.iterations as f64 + 1.0 - nu) / max_iterations as f64
}

/// Banded escape value: plain iteration count over the limit.
#[must_use]
pub fn banded_escape_value(result: EscapeResult, max_iterations: u32) -> f64 {
    result.iterations as f64 / max_iterations as f64
}

/// Colours escape-time results with a palette. Points that never escaped are
/// black whatever the palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeColourMap {
    palette: PaletteKinds,
    max_iterations: u32,
    smooth: bool,
}

impl EscapeColourMap {
    #[must_use]
    pub fn new(palette: PaletteKinds, max_iterations: u32, smooth: bool) -> Self {
        Self {
            palette,
            max_iterations,
            smooth,
        }
    }

    /// The value handed to the palette, or `None` for points in the set.
    #[must_use]
    pub fn escape_value(&self, result: EscapeResult) -> Option<f64> {
        if !result.escaped(self.max_iterations) {
            return None;
        }

        Some(if self.smooth {
            smoothed_escape_value(result, self.max_iterations)
        } else {
            banded_escape_value(result, self.max_iterations)
        })
    }
}

impl ColourMap for EscapeColourMap {
    type T = EscapeResult;
    type Failure = EscapeColourMapError;

    fn map(&self, result: EscapeResult) -> Result<Colour, Self::Failure> {
        if result.iterations > self.max_iterations {
            return Err(EscapeColourMapError::IterationsExceedMax {
                iterations: result.iterations,
                max_iterations: self.max_iterations,
            });
        }

        Ok(match self.escape_value(result) {
            Some(t) => colour_for(t, self.palette),
            None => Colour::BLACK,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::escape_time::escape_time;

    fn escaped_at(iterations: u32, z: Complex) -> EscapeResult {
        EscapeResult { iterations, z }
    }

    #[test]
    fn test_map_returns_black_at_max_iterations() {
        for &palette in PaletteKinds::ALL {
            for smooth in [false, true] {
                let mapper = EscapeColourMap::new(palette, 100, smooth);
                let colour = mapper.map(escaped_at(100, Complex::ZERO)).unwrap();

                assert_eq!(colour, Colour::BLACK);
            }
        }
    }

    #[test]
    fn test_map_returns_error_when_iterations_exceed_max() {
        let mapper = EscapeColourMap::new(PaletteKinds::Mono, 100, false);
        let result = mapper.map(escaped_at(101, Complex::ZERO));

        assert_eq!(
            result,
            Err(EscapeColourMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }

    #[test]
    fn test_banded_value_is_iteration_ratio() {
        let mapper = EscapeColourMap::new(PaletteKinds::Mono, 100, false);

        assert_eq!(
            mapper.escape_value(escaped_at(25, Complex::new(3.0, 0.0))),
            Some(0.25)
        );
        assert_eq!(
            mapper.map(escaped_at(50, Complex::new(3.0, 0.0))),
            Ok(Colour::grey(127))
        );
    }

    #[test]
    fn test_smoothed_value_at_radius_four() {
        // |z| = 4: log2(4) = 2, log2(2) = 1, so t = (n + 1 - 1) / max.
        let t = smoothed_escape_value(escaped_at(10, Complex::new(4.0, 0.0)), 100);

        assert!((t - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_smoothed_value_can_overshoot_below_zero() {
        // A huge escaping seed drives nu above n + 1.
        let t = smoothed_escape_value(escaped_at(0, Complex::new(1e10, 0.0)), 50);

        assert!(t < 0.0);
        assert!(t.is_finite());
    }

    #[test]
    fn test_smoothed_value_is_finite_for_degenerate_magnitude() {
        let t = smoothed_escape_value(escaped_at(3, Complex::ZERO), 10);

        assert!(t.is_finite());
    }

    #[test]
    fn test_smoothing_does_not_change_membership() {
        let max_iterations = 64;
        let banded = EscapeColourMap::new(PaletteKinds::Classic, max_iterations, false);
        let smooth = EscapeColourMap::new(PaletteKinds::Classic, max_iterations, true);

        for step in 0..40 {
            let c = Complex::new(-2.0 + step as f64 * 0.07, 0.3);
            let result = escape_time(Complex::ZERO, c, max_iterations);

            assert_eq!(
                banded.escape_value(result).is_some(),
                smooth.escape_value(result).is_some()
            );
        }
    }

    #[test]
    fn test_smooth_differs_from_banded_for_escaped_point() {
        let result = escape_time(Complex::ZERO, Complex::new(0.4, 0.4), 100);
        assert!(result.escaped(100));

        let banded = EscapeColourMap::new(PaletteKinds::Fire, 100, false);
        let smooth = EscapeColourMap::new(PaletteKinds::Fire, 100, true);

        assert_ne!(banded.escape_value(result), smooth.escape_value(result));
    }
}
