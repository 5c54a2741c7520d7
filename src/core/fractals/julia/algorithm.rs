use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::fractal_params::FractalParamsError;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::{EscapeResult, escape_time};
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

#[derive(Debug, PartialEq)]
pub struct JuliaAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    constant: Complex,
    max_iterations: u32,
}

impl FractalAlgorithm for JuliaAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let z = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape_time(z, self.constant, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        constant: Complex,
        max_iterations: u32,
    ) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            constant,
            max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centred_on_origin() -> (PixelRect, ComplexRect) {
        (
            PixelRect::new(10, 10).unwrap(),
            ComplexRect::new(Complex::new(-2.0, -2.0), 4.0, 4.0).unwrap(),
        )
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let (pixel_rect, complex_rect) = centred_on_origin();

        assert_eq!(
            JuliaAlgorithm::new(pixel_rect, complex_rect, Complex::ZERO, 0),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_zero_seed_with_zero_constant_never_escapes() {
        let (pixel_rect, complex_rect) = centred_on_origin();
        let algorithm = JuliaAlgorithm::new(pixel_rect, complex_rect, Complex::ZERO, 300).unwrap();

        let result = algorithm.compute(Point { x: 5, y: 5 }).unwrap();

        assert_eq!(result.iterations, 300);
    }

    #[test]
    fn test_pixel_seeds_the_orbit() {
        let (pixel_rect, complex_rect) = centred_on_origin();
        let algorithm = JuliaAlgorithm::new(pixel_rect, complex_rect, Complex::ZERO, 300).unwrap();

        // Seed 1.2 + 0i under z²: 1.2, 1.44, 2.0736, the last already past radius 2.
        let result = algorithm.compute(Point { x: 8, y: 5 }).unwrap();

        assert_eq!(result.iterations, 2);
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let (pixel_rect, complex_rect) = centred_on_origin();
        let algorithm =
            JuliaAlgorithm::new(pixel_rect, complex_rect, Complex::new(-0.8, 0.156), 10).unwrap();
        let point = Point { x: 0, y: 11 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
