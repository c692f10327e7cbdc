use crate::canvas::Surface;
use crate::color::Rgb;
use crate::random::random_float_from_range;
use fastrand::Rng;

pub const GRAVITY: f32 = 0.01;
pub const FRICTION: f32 = 0.99;

const ALPHA_DECREMENT_MIN: f32 = 0.003;
const ALPHA_DECREMENT_MAX: f32 = 0.004;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// A single firework spark. Lives until its alpha runs out.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub velocity: Velocity,
    pub alpha: f32,
    alpha_decrement: f32,
}

impl Particle {
    pub fn new(rng: &mut Rng, x: f32, y: f32, radius: f32, color: Rgb, velocity: Velocity) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            velocity,
            alpha: 1.0,
            alpha_decrement: random_float_from_range(rng, ALPHA_DECREMENT_MIN, ALPHA_DECREMENT_MAX),
        }
    }

    pub fn alpha_decrement(&self) -> f32 {
        self.alpha_decrement
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Draws at the current alpha, then advances one frame.
    pub fn update<S: Surface>(&mut self, surface: &mut S) {
        self.draw(surface);

        self.velocity.x *= FRICTION;
        self.velocity.y *= FRICTION;

        self.velocity.y += GRAVITY;
        self.x += self.velocity.x;
        self.y += self.velocity.y;
        self.alpha -= self.alpha_decrement;
    }

    fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.x, self.y, self.radius, self.color, self.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{Draw, Recorder};

    fn particle(vx: f32, vy: f32) -> Particle {
        let mut rng = Rng::with_seed(42);
        Particle::new(&mut rng, 10.0, 20.0, 1.5, (1, 2, 3), Velocity { x: vx, y: vy })
    }

    #[test]
    fn starts_opaque_with_bounded_decrement() {
        let p = particle(0.0, 0.0);
        assert_eq!(p.alpha, 1.0);
        assert!((ALPHA_DECREMENT_MIN..ALPHA_DECREMENT_MAX).contains(&p.alpha_decrement()));
    }

    #[test]
    fn alpha_drops_by_fixed_step_until_expired() {
        let mut p = particle(1.0, -1.0);
        let mut surface = Recorder::default();
        let step = p.alpha_decrement();
        let mut frames = 0;
        while !p.is_expired() {
            let before = p.alpha;
            p.update(&mut surface);
            assert!(p.alpha < before);
            assert!((before - p.alpha - step).abs() < 1e-5);
            frames += 1;
        }
        let expected = (1.0 / step).ceil() as i64;
        assert!((frames as i64 - expected).abs() <= 1);
    }

    #[test]
    fn draws_before_moving() {
        let mut p = particle(3.0, 4.0);
        let mut surface = Recorder::default();
        p.update(&mut surface);
        assert_eq!(
            surface.draws,
            vec![Draw::Circle { x: 10.0, y: 20.0, radius: 1.5, color: (1, 2, 3), alpha: 1.0 }]
        );
        assert!((p.x - (10.0 + 3.0 * FRICTION)).abs() < 1e-5);
        assert!((p.y - (20.0 + 4.0 * FRICTION + GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn velocity_matches_closed_form() {
        let (vx0, vy0) = (7.5, -12.0);
        let mut p = particle(vx0, vy0);
        let mut surface = Recorder::default();
        let mut vy = vy0;

        for n in 1..=200 {
            p.update(&mut surface);
            vy = vy * FRICTION + GRAVITY;

            let expected_vx = vx0 * FRICTION.powi(n);
            assert!((p.velocity.x - expected_vx).abs() < 1e-3);
            assert!((p.velocity.y - vy).abs() < 1e-3);

            // v_n = v0 * f^n + g * (1 - f^n) / (1 - f)
            let f_n = FRICTION.powi(n);
            let closed = vy0 * f_n + GRAVITY * (1.0 - f_n) / (1.0 - FRICTION);
            assert!((p.velocity.y - closed).abs() < 1e-3);
        }
    }
}
