use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.5,
    imag: 0.0,
};
pub const DEFAULT_SCALE: f64 = 3.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidScale { scale: f64 },
    InvalidCenter { center: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "viewport scale must be positive and finite: {}", scale)
            }
            Self::InvalidCenter { center } => {
                write!(
                    f,
                    "viewport center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The caller-owned view onto the complex plane.
///
/// `scale` is the width of the visible region in complex units. The height
/// follows from the aspect ratio of whatever pixel grid it is rendered into.
/// Pan and zoom produce a new state that the caller feeds into the next
/// render; the renderer itself never holds on to a viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
        }
    }
}

fn validate_scale(scale: f64) -> Result<f64, ViewportError> {
    if scale > 0.0 && scale.is_finite() {
        Ok(scale)
    } else {
        Err(ViewportError::InvalidScale { scale })
    }
}

fn validate_center(center: Complex) -> Result<Complex, ViewportError> {
    if center.real.is_finite() && center.imag.is_finite() {
        Ok(center)
    } else {
        Err(ViewportError::InvalidCenter { center })
    }
}

impl Viewport {
    pub fn new(center: Complex, scale: f64) -> Result<Self, ViewportError> {
        Ok(Self {
            center: validate_center(center)?,
            scale: validate_scale(scale)?,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The region of the plane visible through a `pixel_rect` sized window.
    pub fn complex_rect(&self, pixel_rect: PixelRect) -> Result<ComplexRect, ComplexRectError> {
        let width = self.scale;
        let height = self.scale / pixel_rect.aspect_ratio();
        let top_left = Complex {
            real: self.center.real - width / 2.0,
            imag: self.center.imag - height / 2.0,
        };

        ComplexRect::new(top_left, width, height)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drags the view by a pixel delta. Both axes are scaled by `scale`
    /// relative to their own pixel extent. The view is left untouched when
    /// the moved center would not be finite.
    pub fn pan(&mut self, dx: f64, dy: f64, pixel_rect: PixelRect) -> Result<(), ViewportError> {
        let center = Complex {
            real: self.center.real - dx / pixel_rect.width() as f64 * self.scale,
            imag: self.center.imag - dy / pixel_rect.height() as f64 * self.scale,
        };
        self.center = validate_center(center)?;
        Ok(())
    }

    /// Pinch zoom: the scale shrinks as the distance between the two touch
    /// points grows relative to where the gesture started.
    pub fn zoom(
        &mut self,
        start_scale: f64,
        start_distance: f64,
        distance: f64,
    ) -> Result<(), ViewportError> {
        self.scale = validate_scale(start_scale * (start_distance / distance))?;
        Ok(())
    }
}
