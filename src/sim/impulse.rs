//! Shot input strategies
//!
//! Turns raw input into the launch velocity for the ball. A session picks one
//! strategy at construction:
//! - Drag: pull back from the ball and release, like a putter
//! - Power/angle: dial in power and elevation, then fire

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::GameMode;
use crate::consts::*;
use crate::elevation_to_direction;
use crate::horizontal_distance;
use crate::settings::Settings;

/// Drag-vector aim state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DragAim {
    /// World point under the pointer when the drag began
    pub start: Option<Vec3>,
    /// Latest pointer position while dragging (preview only)
    pub current: Option<Vec3>,
}

impl DragAim {
    /// Pointer down: start a drag if the point lands on the ball
    pub fn begin(&mut self, point: Vec3, ball_pos: Vec3, pick_radius: f32) -> bool {
        if horizontal_distance(point, ball_pos) > pick_radius {
            return false;
        }
        self.start = Some(point);
        self.current = Some(point);
        true
    }

    /// Pointer move: track the pointer; no physics happens here
    pub fn track(&mut self, point: Vec3) {
        if self.start.is_some() {
            self.current = Some(point);
        }
    }

    /// Pointer up: finish the drag and produce the impulse
    pub fn release(&mut self, end: Vec3, drag_scale: f32) -> Option<Vec3> {
        let start = self.start.take()?;
        self.current = None;
        Some(drag_impulse(start, end, drag_scale))
    }

    /// Impulse the current drag would produce if released now
    pub fn preview(&self, drag_scale: f32) -> Option<Vec3> {
        Some(drag_impulse(self.start?, self.current?, drag_scale))
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
    }
}

/// `(start - end) * scale` with the vertical component removed
pub fn drag_impulse(start: Vec3, end: Vec3, drag_scale: f32) -> Vec3 {
    let mut force = start - end;
    force.y = 0.0;
    force * drag_scale
}

/// Power/angle aim state; persists across shots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerAngleAim {
    /// 0..=100
    pub power: f32,
    /// Elevation in degrees, -90..=90
    pub angle_deg: f32,
}

impl Default for PowerAngleAim {
    fn default() -> Self {
        Self {
            power: DEFAULT_POWER,
            angle_deg: DEFAULT_ANGLE_DEG,
        }
    }
}

impl PowerAngleAim {
    pub fn adjust_power(&mut self, delta: f32) {
        self.power = (self.power + delta).clamp(POWER_MIN, POWER_MAX);
    }

    pub fn adjust_angle(&mut self, delta: f32) {
        self.angle_deg = (self.angle_deg + delta).clamp(ANGLE_MIN_DEG, ANGLE_MAX_DEG);
    }

    /// Launch velocity for the current power and angle
    pub fn impulse(&self, launch_scale: f32, vertical_bias: f32) -> Vec3 {
        let ratio = self.power.abs() / 100.0;
        let dir = elevation_to_direction(self.angle_deg);
        Vec3::new(
            dir.x * ratio * launch_scale,
            dir.y * ratio * launch_scale + vertical_bias,
            0.0,
        )
    }
}

/// Discrete aim commands for the power/angle strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AimCommand {
    IncreasePower,
    DecreasePower,
    /// Counter-clockwise: raises the elevation
    RotateLeft,
    /// Clockwise: lowers the elevation
    RotateRight,
}

/// The shot strategy a session was built with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ImpulseSource {
    Drag(DragAim),
    PowerAngle(PowerAngleAim),
}

impl ImpulseSource {
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::Putt => ImpulseSource::Drag(DragAim::default()),
            GameMode::Kick => ImpulseSource::PowerAngle(PowerAngleAim::default()),
        }
    }

    /// Apply an aim command; ignored by the drag strategy
    pub fn aim(&mut self, command: AimCommand, step: f32) {
        if let ImpulseSource::PowerAngle(aim) = self {
            match command {
                AimCommand::IncreasePower => aim.adjust_power(step),
                AimCommand::DecreasePower => aim.adjust_power(-step),
                AimCommand::RotateLeft => aim.adjust_angle(step),
                AimCommand::RotateRight => aim.adjust_angle(-step),
            }
        }
    }

    /// Impulse the player is currently lining up, for guide rendering
    pub fn preview(&self, settings: &Settings) -> Option<Vec3> {
        match self {
            ImpulseSource::Drag(drag) => drag.preview(settings.drag_scale),
            ImpulseSource::PowerAngle(aim) => {
                Some(aim.impulse(settings.launch_scale, settings.vertical_bias))
            }
        }
    }

    /// Forget any half-finished input (power/angle are kept)
    pub fn reset_transient(&mut self) {
        if let ImpulseSource::Drag(drag) = self {
            drag.cancel();
        }
    }
}
