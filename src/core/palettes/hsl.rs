use crate::core::data::colour::Colour;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Wraps any finite hue into [0, 360).
#[must_use]
pub fn normalise_hue(hue: f64) -> f64 {
    ((hue % 360.0) + 360.0) % 360.0
}

fn hue_to_channel(p: f64, q: f64, tc: f64) -> f64 {
    let tc = if tc < 0.0 {
        tc + 1.0
    } else if tc > 1.0 {
        tc - 1.0
    } else {
        tc
    };

    if tc < ONE_SIXTH {
        p + (q - p) * 6.0 * tc
    } else if tc < 0.5 {
        q
    } else if tc < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - tc) * 6.0
    } else {
        p
    }
}

/// Scales a unit channel to a byte, rounding to nearest. Values outside
/// [0, 1] saturate instead of wrapping.
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Standard HSL to RGB. `hue` is in degrees and may be any value,
/// `saturation` and `lightness` are nominally in [0, 1].
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let h = normalise_hue(hue) / 360.0;

    if saturation == 0.0 {
        return Colour::grey(to_byte(lightness));
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Colour {
        r: to_byte(hue_to_channel(p, q, h + ONE_THIRD)),
        g: to_byte(hue_to_channel(p, q, h)),
        b: to_byte(hue_to_channel(p, q, h - ONE_THIRD)),
    }
}
