use crate::core::data::fractal_params::{FractalParams, FractalParamsError};
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_OUTPUT: &str = "output/fractal.png";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    Viewport(ViewportError),
    Params(FractalParamsError),
    PixelRect(PixelRectError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Viewport(err) => write!(f, "invalid viewport: {}", err),
            Self::Params(err) => write!(f, "invalid fractal parameters: {}", err),
            Self::PixelRect(err) => write!(f, "invalid output size: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Viewport(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::PixelRect(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ConfigError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<FractalParamsError> for ConfigError {
    fn from(err: FractalParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Ppm,
}

impl OutputFormat {
    /// `.ppm` selects PPM, anything else is written as PNG.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ppm") => Self::Ppm,
            _ => Self::Png,
        }
    }
}

/// Everything one CLI invocation needs to render and save a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub viewport: Viewport,
    pub params: FractalParams,
    pub width: u32,
    pub height: u32,
    pub parallel: bool,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            params: FractalParams::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            parallel: false,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_path(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/b.ppm")), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path(Path::new("a/b.PPM")), OutputFormat::Ppm);
        assert_eq!(OutputFormat::from_path(Path::new("a/b.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("noext")), OutputFormat::Png);
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.output_format(), OutputFormat::Png);
        assert_eq!(config.viewport, Viewport::default());
    }
}
