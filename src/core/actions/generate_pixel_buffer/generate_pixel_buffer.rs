use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, OPAQUE, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for GeneratePixelBufferError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for GeneratePixelBufferError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl<E> From<PixelBufferError> for GeneratePixelBufferError<E> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours `input` (one value per pixel, row-major) into an opaque RGBA
/// buffer covering `pixel_rect`.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>> {
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for value in input {
        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b, OPAQUE]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct StubColourMapError {}

    impl fmt::Display for StubColourMapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubColourMapError")
        }
    }

    impl Error for StubColourMapError {}

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, value: u8) -> Result<Colour, Self::Failure> {
            Ok(Colour::grey(value))
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        type T = u8;
        type Failure = StubColourMapError;

        fn map(&self, _: u8) -> Result<Colour, Self::Failure> {
            Err(StubColourMapError {})
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData = vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ];

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, pixel_rect).unwrap();

        assert_eq!(results.buffer(), &expected_buffer);
        assert_eq!(results.pixel_rect(), pixel_rect);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(3, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubColourMapFailure {}, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::ColourMap(StubColourMapError {}))
        );
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let pixel_rect = PixelRect::new(2, 2).unwrap();

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 16,
                    buffer_size: 24
                }
            ))
        );
    }

    #[test]
    fn test_error_display_and_source() {
        let err: GeneratePixelBufferError<StubColourMapError> =
            GeneratePixelBufferError::ColourMap(StubColourMapError {});

        assert_eq!(err.to_string(), "colour map error: StubColourMapError");
        assert!(err.source().is_some());
    }
}
