//! Click-to-launch fireworks over a twinkling starfield, drawn in the
//! terminal with half-block pixels.

pub mod canvas;
pub mod color;
pub mod config;
pub mod driver;
pub mod effects;
pub mod error;
pub mod overlay;
pub mod random;
pub mod scene;
pub mod sound;
