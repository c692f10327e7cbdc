use crate::canvas::Surface;
use crate::color::Rgb;
use crate::random::random_float_from_range;
use fastrand::Rng;

const ALPHA_DECREMENT_MIN: f32 = 0.001;
const ALPHA_DECREMENT_MAX: f32 = 0.005;

/// Background star twinkling between fully transparent and opaque forever.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
    pub fading_out: bool,
    alpha_decrement: f32,
}

impl Star {
    pub fn new(rng: &mut Rng, x: f32, y: f32, radius: f32, color: Rgb) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            alpha: 1.0,
            fading_out: true,
            alpha_decrement: random_float_from_range(rng, ALPHA_DECREMENT_MIN, ALPHA_DECREMENT_MAX),
        }
    }

    pub fn alpha_decrement(&self) -> f32 {
        self.alpha_decrement
    }

    pub fn update<S: Surface>(&mut self, surface: &mut S) {
        surface.fill_circle(self.x, self.y, self.radius, self.color, self.alpha);

        if self.fading_out {
            self.alpha -= self.alpha_decrement;
            if self.alpha <= 0.0 {
                self.alpha = 0.0;
                self.fading_out = false;
            }
        } else {
            self.alpha += self.alpha_decrement;
            if self.alpha >= 1.0 {
                self.alpha = 1.0;
                self.fading_out = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::Recorder;
    use crate::color::WHITE;

    #[test]
    fn starts_opaque_and_fading_out() {
        let mut rng = Rng::with_seed(1);
        let star = Star::new(&mut rng, 0.0, 0.0, 0.5, WHITE);
        assert_eq!(star.alpha, 1.0);
        assert!(star.fading_out);
        assert!((ALPHA_DECREMENT_MIN..ALPHA_DECREMENT_MAX).contains(&star.alpha_decrement()));
    }

    #[test]
    fn oscillates_within_bounds_and_flips_at_them() {
        let mut rng = Rng::with_seed(99);
        let mut star = Star::new(&mut rng, 5.0, 5.0, 0.5, WHITE);
        let mut surface = Recorder::default();
        let mut flips_at_zero = 0;
        let mut flips_at_one = 0;

        for _ in 0..5000 {
            let was_fading_out = star.fading_out;
            star.update(&mut surface);
            assert!((0.0..=1.0).contains(&star.alpha));

            if was_fading_out != star.fading_out {
                if star.fading_out {
                    assert_eq!(star.alpha, 1.0);
                    flips_at_one += 1;
                } else {
                    assert_eq!(star.alpha, 0.0);
                    flips_at_zero += 1;
                }
            } else {
                assert!(star.alpha > 0.0 && star.alpha < 1.0);
            }
        }

        assert!(flips_at_zero > 0);
        assert!(flips_at_one > 0);
        assert_eq!(surface.circles(), 5000);
    }
}
