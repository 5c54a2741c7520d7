use crate::core::data::complex::Complex;
use rand::Rng;
use rand::seq::SliceRandom;

/// Julia constants with well-known connected, detailed sets.
pub const JULIA_PRESETS: [Complex; 4] = [
    Complex::new(-0.8, 0.156),
    Complex::new(-0.70176, -0.3842),
    Complex::new(-0.4, 0.6),
    Complex::new(0.285, 0.01),
];

/// Picks one of [`JULIA_PRESETS`] uniformly.
pub fn random_preset<R: Rng + ?Sized>(rng: &mut R) -> Complex {
    JULIA_PRESETS
        .choose(rng)
        .copied()
        .unwrap_or(JULIA_PRESETS[0])
}
