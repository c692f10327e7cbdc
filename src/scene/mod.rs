//! Starfield and firework particles, advanced one frame at a time.

mod particle;
mod star;

pub use particle::{Particle, Velocity, FRICTION, GRAVITY};
pub use star::Star;

use crate::canvas::Surface;
use crate::color::{Rgb, FIREWORK_COLORS, WHITE};
use crate::random::{random_color, random_float_from_range};
use fastrand::Rng;
use std::f32::consts::TAU;

pub const BURST_PARTICLES: usize = 800;
pub const BURST_POWER: f32 = 15.0;
pub const TRAIL_ALPHA: f32 = 0.25;

/// Viewports narrower than this get the smaller starfield.
pub const NARROW_VIEWPORT: f32 = 768.0;
const STARS_NARROW: usize = 100;
const STARS_WIDE: usize = 200;

pub struct Scene {
    width: f32,
    height: f32,
    trail_color: Rgb,
    stars: Vec<Star>,
    particles: Vec<Particle>,
    rng: Rng,
}

impl Scene {
    /// `width`/`height` are in logical pixels. Stars are seeded immediately.
    pub fn new(width: f32, height: f32, trail_color: Rgb, rng: Rng) -> Self {
        let mut scene = Self {
            width,
            height,
            trail_color,
            stars: Vec::new(),
            particles: Vec::new(),
            rng,
        };
        scene.create_stars();
        scene
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Adopts the new viewport and replaces the whole starfield. Live
    /// particles keep flying.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.create_stars();
        tracing::debug!(width, height, stars = self.stars.len(), "viewport resized");
    }

    fn create_stars(&mut self) {
        let count = if self.width < NARROW_VIEWPORT {
            STARS_NARROW
        } else {
            STARS_WIDE
        };

        let mut stars = Vec::with_capacity(count);
        for _ in 0..count {
            let x = self.rng.f32() * self.width;
            let y = self.rng.f32() * self.height;
            let radius = random_float_from_range(&mut self.rng, 0.1, 1.0);
            stars.push(Star::new(&mut self.rng, x, y, radius, WHITE));
        }
        self.stars = stars;
    }

    /// Radial burst centred on `(x, y)`. Each particle takes one speed
    /// sample shared by both axes, so the burst fills a disc rather than a
    /// ring.
    pub fn spawn_burst(&mut self, x: f32, y: f32) {
        let angle_increment = TAU / BURST_PARTICLES as f32;

        self.particles.reserve(BURST_PARTICLES);
        for i in 0..BURST_PARTICLES {
            let color = random_color(&mut self.rng, &FIREWORK_COLORS);
            let radius = random_float_from_range(&mut self.rng, 1.0, 2.0);
            let angle = angle_increment * i as f32;
            let speed = self.rng.f32() * BURST_POWER;
            let velocity = Velocity {
                x: angle.cos() * speed,
                y: angle.sin() * speed,
            };
            self.particles
                .push(Particle::new(&mut self.rng, x, y, radius, color, velocity));
        }

        tracing::debug!(x, y, live = self.particles.len(), "burst spawned");
    }

    /// One frame: dim the previous frame, twinkle the stars, then advance
    /// the particles and drop the ones that burned out.
    pub fn animate<S: Surface>(&mut self, surface: &mut S) {
        surface.fill_rect(0.0, 0.0, self.width, self.height, self.trail_color, TRAIL_ALPHA);

        for star in &mut self.stars {
            star.update(surface);
        }

        self.particles.retain_mut(|particle| {
            if particle.is_expired() {
                return false;
            }
            particle.update(surface);
            !particle.is_expired()
        });
    }
}
