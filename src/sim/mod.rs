//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One unit step per frame, no wall-clock reads
//! - Stable iteration order (course order for obstacles)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod impulse;
pub mod integrate;
pub mod judge;
pub mod level;
pub mod score;
pub mod session;
pub mod state;

pub use collision::{CollisionResult, GroundContact, ball_obstacle_collision, reflect_velocity};
pub use impulse::{AimCommand, DragAim, ImpulseSource, PowerAngleAim};
pub use level::{
    LevelAdvance, LevelDefinition, LevelDirector, Placement, course_from_json, default_course,
};
pub use score::{ScoreKeeper, star_rating};
pub use session::{GameSession, InputCommand, NoopHooks, SessionHooks, SessionSnapshot};
pub use state::{Ball, Course, GameMode, Goal, Obstacle, SessionPhase};
