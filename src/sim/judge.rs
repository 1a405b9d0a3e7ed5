//! Rest detection and goal capture
//!
//! Putt mode only sinks a ball that is on the cup and nearly still in the same
//! tick. Kick mode captures the moment the ball is over the target and low
//! enough, even mid-flight.

use super::state::{Ball, Goal};
use crate::horizontal_distance;
use crate::settings::Settings;

/// Ball is still enough to drop into the cup
#[inline]
pub fn is_at_rest(ball: &Ball, rest_speed: f32) -> bool {
    ball.speed() < rest_speed
}

/// Putt mode win: over the cup AND slow
pub fn putt_captured(ball: &Ball, goal: &Goal, settings: &Settings) -> bool {
    horizontal_distance(ball.pos, goal.pos) < goal.capture_radius
        && is_at_rest(ball, settings.rest_speed)
}

/// Kick mode win: over the target AND at or below the capture ceiling
pub fn kick_captured(ball: &Ball, goal: &Goal, settings: &Settings) -> bool {
    horizontal_distance(ball.pos, goal.pos) < goal.capture_radius
        && ball.pos.y <= settings.capture_ceiling
}

/// A putt that missed has run out of speed
#[inline]
pub fn putt_settled(ball: &Ball, settings: &Settings) -> bool {
    ball.speed() < settings.settle_speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn cup() -> Goal {
        Goal {
            pos: Vec3::new(0.0, 0.05, 15.0),
            capture_radius: 0.5,
        }
    }

    fn ball_at(pos: Vec3, vel: Vec3) -> Ball {
        let mut ball = Ball::new(pos, 0.3);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_putt_needs_both_position_and_rest() {
        let settings = Settings::default();
        let goal = cup();

        // On the cup but too fast
        let fast = ball_at(Vec3::new(0.0, 0.3, 15.0), Vec3::new(0.0, 0.0, 0.2));
        assert!(!putt_captured(&fast, &goal, &settings));

        // Slow but off the cup
        let far = ball_at(Vec3::new(0.0, 0.3, 14.0), Vec3::new(0.0, 0.0, 0.05));
        assert!(!putt_captured(&far, &goal, &settings));

        // Both
        let sunk = ball_at(Vec3::new(0.1, 0.3, 14.8), Vec3::new(0.0, 0.0, 0.05));
        assert!(putt_captured(&sunk, &goal, &settings));
    }

    #[test]
    fn test_kick_needs_both_position_and_height() {
        let settings = Settings::default();
        let target = Goal {
            pos: Vec3::new(10.0, 0.05, 0.0),
            capture_radius: 0.5,
        };

        // Over the target but too high
        let high = ball_at(Vec3::new(10.0, 1.5, 0.0), Vec3::new(0.3, -0.2, 0.0));
        assert!(!kick_captured(&high, &target, &settings));

        // Low but short of the target
        let short = ball_at(Vec3::new(8.0, 0.3, 0.0), Vec3::ZERO);
        assert!(!kick_captured(&short, &target, &settings));

        // Both, and still moving fast
        let hit = ball_at(Vec3::new(10.2, 0.55, 0.0), Vec3::new(0.3, -0.2, 0.0));
        assert!(kick_captured(&hit, &target, &settings));
    }

    #[test]
    fn test_putt_settled() {
        let settings = Settings::default();
        assert!(putt_settled(&ball_at(Vec3::ZERO, Vec3::ZERO), &settings));
        assert!(!putt_settled(
            &ball_at(Vec3::ZERO, Vec3::new(0.05, 0.0, 0.0)),
            &settings
        ));
    }
}
