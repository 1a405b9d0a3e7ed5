//! Mini Putt - physics and progression core for a casual mini-golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (impulses, integration, collisions, scoring, levels)
//! - `settings`: Data-driven tuning, serialized as JSON
//! - `autoplay`: Seeded demo player driving a session headlessly
//! - `platform`: Browser boundary (wasm32 only)
//!
//! Rendering, DOM widgets and audio live outside this crate; the session
//! reports to them through [`sim::SessionHooks`].

pub mod autoplay;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Per-tick velocity retention while rolling (putt mode)
    pub const DAMPING: f32 = 0.95;
    /// Velocity retention after bouncing off an obstacle
    pub const RESTITUTION: f32 = 0.7;
    /// Ball-to-obstacle centre distance that counts as contact
    pub const COLLISION_THRESHOLD: f32 = 1.0;

    /// Goal capture radius (both modes)
    pub const CAPTURE_RADIUS: f32 = 0.5;
    /// Ball must be slower than this to drop into the cup (putt mode)
    pub const REST_SPEED: f32 = 0.1;
    /// Below this speed a putt that missed is over
    pub const SETTLE_SPEED: f32 = 1.0e-3;

    /// Drag length to impulse multiplier
    pub const DRAG_SCALE: f32 = 1.5;

    /// Power-to-velocity multiplier for kicks
    pub const LAUNCH_SCALE: f32 = 0.5;
    /// Extra vertical lift applied to every kick
    pub const VERTICAL_BIAS: f32 = 0.2;
    /// Downward acceleration per tick (kick mode)
    pub const GRAVITY: f32 = 0.01;
    /// Ball centre height when resting on the ground
    pub const BALL_REST_HEIGHT: f32 = 0.3;
    /// Vertical velocity retention (sign-flipped) on ground contact
    pub const GROUND_BOUNCE: f32 = 0.5;
    /// Horizontal velocity retention on ground contact
    pub const GROUND_FRICTION: f32 = 0.7;
    /// Velocity components smaller than this are treated as stopped
    pub const STOP_SPEED: f32 = 0.01;
    /// A kick is captured mid-flight only at or below this height
    pub const CAPTURE_CEILING: f32 = 0.6;

    /// Power and angle adjust in steps of this size
    pub const AIM_STEP: f32 = 5.0;
    pub const POWER_MIN: f32 = 0.0;
    pub const POWER_MAX: f32 = 100.0;
    pub const ANGLE_MIN_DEG: f32 = -90.0;
    pub const ANGLE_MAX_DEG: f32 = 90.0;
    pub const DEFAULT_POWER: f32 = 50.0;
    pub const DEFAULT_ANGLE_DEG: f32 = 45.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.3;
    /// Pointer-down within this horizontal distance of the ball grabs it
    pub const PICK_RADIUS: f32 = 0.6;

    /// Delay before the win presentation hook fires (seconds)
    pub const WIN_PRESENTATION_DELAY: f32 = 1.0;
}

/// Project onto the horizontal (x, z) plane
#[inline]
pub fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

/// Distance between two points measured on the horizontal plane
#[inline]
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f32 {
    horizontal(a).distance(horizontal(b))
}

/// Unit direction for an elevation angle in degrees (x forward, y up)
#[inline]
pub fn elevation_to_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_distance_ignores_height() {
        let a = Vec3::new(0.0, 0.3, 0.0);
        let b = Vec3::new(3.0, 5.0, 4.0);
        assert!((horizontal_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_elevation_to_direction() {
        let up = elevation_to_direction(90.0);
        assert!(up.x.abs() < 1e-6);
        assert!((up.y - 1.0).abs() < 1e-6);

        let flat = elevation_to_direction(0.0);
        assert!((flat.x - 1.0).abs() < 1e-6);
    }
}
