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
pub struct MandelbrotAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(escape_time(Complex::ZERO, c, self.max_iterations))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
    ) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            pixel_rect,
            complex_rect,
            max_iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centred_on_origin(size: u32) -> (PixelRect, ComplexRect) {
        (
            PixelRect::new(size, size).unwrap(),
            ComplexRect::new(Complex::new(-2.0, -2.0), 4.0, 4.0).unwrap(),
        )
    }

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        let (pixel_rect, complex_rect) = centred_on_origin(10);

        assert_eq!(
            MandelbrotAlgorithm::new(pixel_rect, complex_rect, 0),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_origin_is_in_the_set() {
        let (pixel_rect, complex_rect) = centred_on_origin(10);
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, complex_rect, 500).unwrap();

        // Pixel (5, 5) of a 10px grid over [-2, 2) maps to exactly 0 + 0i.
        let result = algorithm.compute(Point { x: 5, y: 5 }).unwrap();

        assert_eq!(result.iterations, 500);
    }

    #[test]
    fn test_far_corner_escapes_quickly() {
        let (pixel_rect, complex_rect) = centred_on_origin(10);
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, complex_rect, 500).unwrap();

        // -2 - 2i: |c|² = 8, escapes on the second check.
        let result = algorithm.compute(Point { x: 0, y: 0 }).unwrap();

        assert_eq!(result.iterations, 1);
        assert_eq!(result.z, Complex::new(-2.0, -2.0));
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let (pixel_rect, complex_rect) = centred_on_origin(10);
        let algorithm = MandelbrotAlgorithm::new(pixel_rect, complex_rect, 10).unwrap();
        let point = Point { x: 10, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
