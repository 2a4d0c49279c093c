// src/models/star.rs
//
// A single lattice star. Position chases `home` whenever the pointer
// displaces it; alpha runs a free oscillation that bounces at 0 and 1.

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Star {
    pub position: Point2,
    pub home: Point2,
    pub alpha: f32,
    pub speed: f32,
}

impl Star {
    pub fn new(x: f32, y: f32, alpha: f32, speed: f32) -> Self {
        Self {
            position: pt2(x, y),
            home: pt2(x, y),
            alpha,
            speed,
        }
    }

    /// Advance the twinkle oscillator one frame. The accumulator may
    /// overshoot [0, 1] by one step before the direction flips, so
    /// rendering goes through `render_alpha`.
    pub fn twinkle(&mut self) {
        self.alpha += self.speed;
        if self.alpha > 1.0 || self.alpha < 0.0 {
            self.speed = -self.speed;
        }
    }

    pub fn render_alpha(&self) -> f32 {
        self.alpha.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twinkle_reverses_at_upper_bound() {
        let mut star = Star::new(0.0, 0.0, 0.999, 0.005);

        star.twinkle();
        assert!(star.alpha > 1.0); // overshoot is kept, not clamped
        assert!(star.speed < 0.0);

        star.twinkle();
        assert!(star.alpha < 1.0);
        assert!(star.speed < 0.0);
    }

    #[test]
    fn test_twinkle_reverses_at_lower_bound() {
        let mut star = Star::new(0.0, 0.0, 0.001, -0.005);

        star.twinkle();
        assert!(star.alpha < 0.0);
        assert!(star.speed > 0.0);
    }

    #[test]
    fn test_render_alpha_is_never_negative() {
        let mut star = Star::new(0.0, 0.0, 0.002, -0.005);

        for _ in 0..1000 {
            star.twinkle();
            assert!(star.render_alpha() >= 0.0);
        }
    }

    #[test]
    fn test_twinkle_holds_direction_inside_bounds() {
        let mut star = Star::new(0.0, 0.0, 0.5, 0.004);

        star.twinkle();
        assert!(star.speed > 0.0);
        assert!((star.alpha - 0.504).abs() < 1e-6);
    }
}
