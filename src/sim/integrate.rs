//! Per-tick motion
//!
//! Unit-step Euler: one step per rendered frame, position first, then the
//! velocity update. Putt mode damps, kick mode falls; never both.

use super::state::{Ball, GameMode};
use crate::settings::Settings;

/// Advance the ball by one tick
pub fn integrate(ball: &mut Ball, mode: GameMode, settings: &Settings) {
    ball.pos += ball.vel;
    match mode {
        GameMode::Putt => ball.vel *= settings.damping,
        GameMode::Kick => ball.vel.y -= settings.gravity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn test_putt_moves_then_damps() {
        let settings = Settings::default();
        let mut ball = Ball::new(Vec3::new(0.0, 0.3, 0.0), 0.3);
        ball.vel = Vec3::new(0.0, 0.0, 1.0);

        integrate(&mut ball, GameMode::Putt, &settings);
        assert_eq!(ball.pos, Vec3::new(0.0, 0.3, 1.0));
        assert_eq!(ball.vel, Vec3::new(0.0, 0.0, 0.95));
    }

    #[test]
    fn test_kick_applies_gravity_without_damping() {
        let settings = Settings::default();
        let mut ball = Ball::new(Vec3::new(0.0, 0.3, 0.0), 0.3);
        ball.vel = Vec3::new(0.4, 0.3, 0.0);

        integrate(&mut ball, GameMode::Kick, &settings);
        assert!(ball.pos.abs_diff_eq(Vec3::new(0.4, 0.6, 0.0), 1e-6));
        assert_eq!(ball.vel.x, 0.4);
        assert!((ball.vel.y - 0.29).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_putt_damping_is_exact(
            x in -5.0f32..5.0,
            z in -5.0f32..5.0,
            ticks in 1usize..50,
        ) {
            let settings = Settings::default();
            let mut ball = Ball::new(Vec3::new(0.0, 0.3, 0.0), 0.3);
            ball.vel = Vec3::new(x, 0.0, z);
            for _ in 0..ticks {
                let before = ball.vel;
                integrate(&mut ball, GameMode::Putt, &settings);
                prop_assert_eq!(ball.vel, before * 0.95);
            }
        }
    }
}
