use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::fractal_params::{FractalMode, FractalParams, FractalParamsError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_colour_map::{EscapeColourMap, EscapeColourMapError};
use crate::core::fractals::escape_time::EscapeResult;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
use log::debug;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    PixelRect(PixelRectError),
    ComplexRect(ComplexRectError),
    Params(FractalParamsError),
    Coordinates(PixelToComplexCoordsError),
    ColourMap(EscapeColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid output size: {}", err),
            Self::ComplexRect(err) => write!(f, "invalid viewport region: {}", err),
            Self::Params(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::Coordinates(err) => write!(f, "coordinate mapping error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::ComplexRect(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::Coordinates(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for RenderError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ComplexRectError> for RenderError {
    fn from(err: ComplexRectError) -> Self {
        Self::ComplexRect(err)
    }
}

impl From<FractalParamsError> for RenderError {
    fn from(err: FractalParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Coordinates(err)
    }
}

impl From<GeneratePixelBufferError<EscapeColourMapError>> for RenderError {
    fn from(err: GeneratePixelBufferError<EscapeColourMapError>) -> Self {
        match err {
            GeneratePixelBufferError::ColourMap(err) => Self::ColourMap(err),
            GeneratePixelBufferError::PixelBuffer(err) => Self::PixelBuffer(err),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Sequential,
    RowParallel,
}

fn run_algorithm<Alg>(
    algorithm: &Alg,
    strategy: Strategy,
) -> Result<Vec<EscapeResult>, PixelToComplexCoordsError>
where
    Alg: FractalAlgorithm<Success = EscapeResult, Failure = PixelToComplexCoordsError> + Sync,
{
    match strategy {
        Strategy::Sequential => generate_fractal(algorithm),
        Strategy::RowParallel => generate_fractal_rayon(algorithm),
    }
}

fn render_with(
    viewport: Viewport,
    params: FractalParams,
    pixel_width: u32,
    pixel_height: u32,
    strategy: Strategy,
) -> Result<PixelBuffer, RenderError> {
    let pixel_rect = PixelRect::new(pixel_width, pixel_height)?;
    let complex_rect = viewport.complex_rect(pixel_rect)?;
    let max_iterations = params.max_iterations();

    debug!(
        "rendering {} {}x{} ({:?}), max iterations {}, smooth {}, palette {}",
        params.mode().kind(),
        pixel_width,
        pixel_height,
        strategy,
        max_iterations,
        params.smooth(),
        params.palette()
    );

    let escapes = match params.mode() {
        FractalMode::Mandelbrot => {
            let algorithm = MandelbrotAlgorithm::new(pixel_rect, complex_rect, max_iterations)?;
            run_algorithm(&algorithm, strategy)?
        }
        FractalMode::Julia { constant } => {
            let algorithm =
                JuliaAlgorithm::new(pixel_rect, complex_rect, constant, max_iterations)?;
            run_algorithm(&algorithm, strategy)?
        }
    };

    let colour_map = EscapeColourMap::new(params.palette(), max_iterations, params.smooth());

    Ok(generate_pixel_buffer(escapes, &colour_map, pixel_rect)?)
}

/// Renders one frame on the calling thread.
///
/// The result is a pure function of the arguments: an opaque RGBA buffer,
/// row-major, row 0 at the minimum imaginary coordinate. Points that never
/// escape are black. Zero pixel dimensions are rejected before any work.
pub fn render(
    viewport: Viewport,
    params: FractalParams,
    pixel_width: u32,
    pixel_height: u32,
) -> Result<PixelBuffer, RenderError> {
    render_with(
        viewport,
        params,
        pixel_width,
        pixel_height,
        Strategy::Sequential,
    )
}

/// Same as [`render`], with rows spread across the rayon thread pool. The
/// output is byte-identical.
pub fn render_parallel(
    viewport: Viewport,
    params: FractalParams,
    pixel_width: u32,
    pixel_height: u32,
) -> Result<PixelBuffer, RenderError> {
    render_with(
        viewport,
        params,
        pixel_width,
        pixel_height,
        Strategy::RowParallel,
    )
}
