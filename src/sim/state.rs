//! Course entities and session-level enums
//!
//! Everything the render collaborator draws lives here.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which input mechanic and physics model a session runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Drag-vector putt; rolling friction, obstacle reflection
    Putt,
    /// Power/angle kick; gravity and ground bounce
    Kick,
}

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ball at rest, waiting for a shot
    AwaitingInput,
    /// Pointer went down on the ball and has not been released (putt mode)
    Dragging,
    /// Shot in progress; physics runs every tick
    Moving,
    /// Ball captured; input locked until the next level loads
    Won,
    /// Course being torn down and rebuilt
    LevelTransition,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
}

impl Ball {
    pub fn new(spawn: Vec3, radius: f32) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// A static wall block; collides as a point proxy at its centre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec3,
    /// Width (x) and depth (z) of the block, for drawing
    pub footprint: Vec2,
    /// Centre distance at which the ball bounces off
    pub collision_radius: f32,
}

/// The cup (putt mode) or target (kick mode)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec3,
    pub capture_radius: f32,
}

/// Geometry of the loaded level: one ball, its obstacles, at most one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub ball: Ball,
    pub obstacles: Vec<Obstacle>,
    pub goal: Option<Goal>,
}
