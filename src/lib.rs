mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::Args;
pub use crate::controllers::cli::cli_controller::{CliController, run};
pub use crate::controllers::cli::render_config::{ConfigError, OutputFormat, RenderConfig};
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::actions::render::{RenderError, render, render_parallel};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::ComplexRectError;
pub use crate::core::data::fractal_params::{FractalMode, FractalParams, FractalParamsError};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::escape_colour_map::EscapeColourMapError;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::presets::{JULIA_PRESETS, random_preset};
pub use crate::core::palettes::hsl::hsl_to_rgb;
pub use crate::core::palettes::kinds::PaletteKinds;
pub use crate::core::palettes::palette::colour_for;
pub use crate::core::util::parse_component::parse_component;
pub use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
