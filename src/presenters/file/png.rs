use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ImageError, ImageFormat, RgbaImage};
use std::io;
use std::path::Path;

/// RGBA PNG via the `image` crate.
#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let pixel_rect = buffer.pixel_rect();
        let image = RgbaImage::from_raw(
            pixel_rect.width(),
            pixel_rect.height(),
            buffer.buffer().clone(),
        )
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "pixel buffer does not match its dimensions",
            )
        })?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(|err| match err {
                ImageError::IoError(err) => err,
                other => io::Error::other(other),
            })
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
