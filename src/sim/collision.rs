//! Contact detection and response against static course geometry
//!
//! Obstacles are point proxies: a wall block collides as if it were a circle
//! around its centre. Glancing hits near a block's corner can therefore bounce
//! in a direction a real box would not produce.

use glam::Vec3;

use super::state::{Ball, Obstacle};
use crate::settings::Settings;

/// Result of an obstacle check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Horizontal normal from obstacle centre toward the ball
    pub normal: Vec3,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            normal: Vec3::ZERO,
        }
    }
}

/// Check the ball against one obstacle on the horizontal plane
pub fn ball_obstacle_collision(ball_pos: Vec3, obstacle: &Obstacle) -> CollisionResult {
    let mut offset = ball_pos - obstacle.pos;
    offset.y = 0.0;

    if offset.length() < obstacle.collision_radius {
        return CollisionResult {
            hit: true,
            normal: offset.normalize_or_zero(),
        };
    }

    CollisionResult::miss()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec3, normal: Vec3) -> Vec3 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Bounce the ball off every obstacle it is touching (putt mode)
///
/// Obstacles are handled in course order; returns how many were hit.
pub fn resolve_obstacles(ball: &mut Ball, obstacles: &[Obstacle], restitution: f32) -> usize {
    let mut hits = 0;
    for obstacle in obstacles {
        let result = ball_obstacle_collision(ball.pos, obstacle);
        if result.hit {
            ball.vel = reflect_velocity(ball.vel, result.normal) * restitution;
            hits += 1;
        }
    }
    hits
}

/// Outcome of the ground rule for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroundContact {
    /// Ball touched the ground this tick
    pub touched: bool,
    /// Horizontal speed has decayed away; the shot is over
    pub stopped: bool,
}

/// Bounce the ball off the ground plane (kick mode)
pub fn resolve_ground(ball: &mut Ball, settings: &Settings) -> GroundContact {
    if ball.pos.y > settings.ball_rest_height {
        return GroundContact::default();
    }

    ball.pos.y = settings.ball_rest_height;
    ball.vel.y *= -settings.ground_bounce;
    ball.vel.x *= settings.ground_friction;

    if ball.vel.y.abs() < settings.stop_speed {
        ball.vel.y = 0.0;
    }

    let stopped = ball.vel.x.abs() < settings.stop_speed;
    if stopped {
        ball.vel = Vec3::ZERO;
    }

    GroundContact {
        touched: true,
        stopped,
    }
}
