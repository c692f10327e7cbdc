//! Small random helpers over an explicit generator so scenes can be seeded.

use crate::color::Rgb;
use fastrand::Rng;

/// Uniform float in `[min, max)`.
pub fn random_float_from_range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Uniform integer in `[min, max]`.
pub fn random_int_from_range(rng: &mut Rng, min: i32, max: i32) -> i32 {
    rng.i32(min..=max)
}

pub fn random_color(rng: &mut Rng, palette: &[Rgb]) -> Rgb {
    palette[rng.usize(0..palette.len())]
}
