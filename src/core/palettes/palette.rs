use crate::core::data::colour::Colour;
use crate::core::palettes::hsl::hsl_to_rgb;
use crate::core::palettes::kinds::PaletteKinds;

/// Maps a normalised escape value to a colour.
///
/// `t` is nominally in [0, 1] but smoothed escape values overshoot on both
/// sides; every palette accepts any finite `t` and clamps its output.
#[must_use]
pub fn colour_for(t: f64, palette: PaletteKinds) -> Colour {
    match palette {
        PaletteKinds::Classic => hsl_to_rgb((360.0 * (0.95 + 10.0 * t)) % 360.0, 0.7, 0.5),
        PaletteKinds::Fire => hsl_to_rgb(40.0 * (1.0 - t), 0.95, 0.15 + 0.65 * t),
        PaletteKinds::Ice => hsl_to_rgb(200.0 + 120.0 * t, 0.75 - 0.3 * t, 0.12 + 0.6 * t),
        PaletteKinds::Psychedelic => {
            hsl_to_rgb((1200.0 * t) % 360.0, 0.85, 0.5 - 0.25 * (30.0 * t).sin())
        }
        PaletteKinds::Mono => Colour::grey((255.0 * t).floor().clamp(0.0, 255.0) as u8),
    }
}
