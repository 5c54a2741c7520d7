use crate::controllers::cli::render_config::{
    ConfigError, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_WIDTH, RenderConfig,
};
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::{DEFAULT_MAX_ITERATIONS, FractalMode, FractalParams};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::{DEFAULT_CENTER, DEFAULT_SCALE, Viewport};
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::presets::random_preset;
use crate::core::palettes::kinds::PaletteKinds;
use crate::core::util::parse_component::parse_component;
use clap::Parser;
use rand::Rng;
use std::path::PathBuf;

/// Render Mandelbrot and Julia escape-time fractals to an image file.
#[derive(Debug, Parser)]
#[command(name = "escape-time", version)]
pub struct Args {
    /// Fractal family: mandelbrot or julia
    #[arg(long, default_value = "mandelbrot")]
    pub mode: FractalKinds,

    /// Real part of the Julia constant; unparseable input counts as 0
    #[arg(long, default_value = "-0.8", allow_hyphen_values = true)]
    pub c_real: String,

    /// Imaginary part of the Julia constant; unparseable input counts as 0
    #[arg(long, default_value = "0.156", allow_hyphen_values = true)]
    pub c_imag: String,

    /// Render a randomly chosen Julia preset, overriding mode and constant
    #[arg(long)]
    pub preset: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub iterations: u32,

    /// Continuous colouring instead of iteration bands
    #[arg(long)]
    pub smooth: bool,

    /// classic, fire, ice, psychedelic or mono
    #[arg(long, default_value = "classic")]
    pub palette: PaletteKinds,

    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_hyphen_values = true)]
    pub center_real: f64,

    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_hyphen_values = true)]
    pub center_imag: f64,

    /// Width of the visible region in complex-plane units
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Spread rows over all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output path; a .ppm extension writes PPM, anything else PNG
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    /// Validates the arguments into a render configuration. `rng` is only
    /// consulted when `--preset` is set.
    pub fn into_config<R: Rng + ?Sized>(self, rng: &mut R) -> Result<RenderConfig, ConfigError> {
        let mode = match self.mode {
            FractalKinds::Mandelbrot => FractalMode::Mandelbrot,
            FractalKinds::Julia => FractalMode::Julia {
                constant: Complex::new(
                    parse_component(&self.c_real),
                    parse_component(&self.c_imag),
                ),
            },
        };

        let mut params = FractalParams::new(mode, self.iterations, self.smooth, self.palette)?;
        if self.preset {
            params.apply_preset(random_preset(rng));
        }

        PixelRect::new(self.width, self.height)?;

        Ok(RenderConfig {
            viewport: Viewport::new(Complex::new(self.center_real, self.center_imag), self.scale)?,
            params,
            width: self.width,
            height: self.height,
            parallel: self.parallel,
            output: self.output,
        })
    }
}
