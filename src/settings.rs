//! Physics tuning and session preferences
//!
//! Every field defaults to the matching value in [`crate::consts`], so a
//! partial JSON document only overrides what it names.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Putt (drag) mode ===
    pub damping: f32,
    pub restitution: f32,
    pub collision_threshold: f32,
    pub rest_speed: f32,
    pub settle_speed: f32,
    pub drag_scale: f32,

    // === Kick (power/angle) mode ===
    pub launch_scale: f32,
    pub vertical_bias: f32,
    pub gravity: f32,
    pub ball_rest_height: f32,
    pub ground_bounce: f32,
    pub ground_friction: f32,
    pub stop_speed: f32,
    pub capture_ceiling: f32,
    pub aim_step: f32,

    // === Shared ===
    pub capture_radius: f32,
    pub ball_radius: f32,
    pub pick_radius: f32,
    /// Fixed tee position the ball spawns at on every level load
    pub spawn: Vec3,

    // === Presentation ===
    /// Seconds between win detection and the win presentation hook
    pub win_delay: f32,
    /// Advance to the next level automatically once the win has been presented
    pub auto_advance: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            restitution: RESTITUTION,
            collision_threshold: COLLISION_THRESHOLD,
            rest_speed: REST_SPEED,
            settle_speed: SETTLE_SPEED,
            drag_scale: DRAG_SCALE,

            launch_scale: LAUNCH_SCALE,
            vertical_bias: VERTICAL_BIAS,
            gravity: GRAVITY,
            ball_rest_height: BALL_REST_HEIGHT,
            ground_bounce: GROUND_BOUNCE,
            ground_friction: GROUND_FRICTION,
            stop_speed: STOP_SPEED,
            capture_ceiling: CAPTURE_CEILING,
            aim_step: AIM_STEP,

            capture_radius: CAPTURE_RADIUS,
            ball_radius: BALL_RADIUS,
            pick_radius: PICK_RADIUS,
            spawn: Vec3::new(0.0, BALL_REST_HEIGHT, 0.0),

            win_delay: WIN_PRESENTATION_DELAY,
            auto_advance: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields keep their defaults)
    ///
    /// The aim step must be positive, otherwise the power/angle dial cannot move.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        if !(settings.aim_step.is_finite() && settings.aim_step > 0.0) {
            return Err(serde::de::Error::custom(format!(
                "aim_step must be a positive number, got {}",
                settings.aim_step
            )));
        }
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "mini_putt_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "damping": 0.9, "auto_advance": true }"#).unwrap();
        assert_eq!(settings.damping, 0.9);
        assert!(settings.auto_advance);
        assert_eq!(settings.restitution, RESTITUTION);
        assert_eq!(settings.spawn, Vec3::new(0.0, BALL_REST_HEIGHT, 0.0));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ damping: }").is_err());
    }

    #[test]
    fn test_non_positive_aim_step_is_rejected() {
        assert!(Settings::from_json(r#"{ "aim_step": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "aim_step": -5 }"#).is_err());
        assert_eq!(Settings::from_json(r#"{ "aim_step": 2.5 }"#).unwrap().aim_step, 2.5);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            gravity: 0.02,
            win_delay: 0.5,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
