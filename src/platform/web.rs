//! Browser bindings
//!
//! Exposes a `WebSession` class to JavaScript. The page owns the canvas,
//! camera, DOM widgets and audio; it forwards pointer events already projected
//! onto the ground plane, forwards key commands, calls `tick` from
//! `requestAnimationFrame`, and reads positions back for drawing.

use glam::Vec3;
use js_sys::{Float32Array, Function};
use wasm_bindgen::prelude::*;

use crate::settings::Settings;
use crate::sim::{GameMode, GameSession, InputCommand, SessionHooks, default_course};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Mini Putt core loaded");
}

/// JavaScript callbacks registered by the page
#[derive(Default)]
pub struct JsHooks {
    shot_fired: Option<Function>,
    ball_captured: Option<Function>,
    win: Option<Function>,
    all_levels_complete: Option<Function>,
    level_loaded: Option<Function>,
}

fn report(result: Result<JsValue, JsValue>) {
    if let Err(e) = result {
        log::warn!("Hook callback threw: {:?}", e);
    }
}

impl SessionHooks for JsHooks {
    fn on_shot_fired(&mut self) {
        if let Some(f) = &self.shot_fired {
            report(f.call0(&JsValue::NULL));
        }
    }

    fn on_ball_captured(&mut self) {
        if let Some(f) = &self.ball_captured {
            report(f.call0(&JsValue::NULL));
        }
    }

    fn on_win(&mut self, attempts: u32, stars: u8) {
        if let Some(f) = &self.win {
            report(f.call2(&JsValue::NULL, &attempts.into(), &stars.into()));
        }
    }

    fn on_all_levels_complete(&mut self) {
        if let Some(f) = &self.all_levels_complete {
            report(f.call0(&JsValue::NULL));
        }
    }

    fn on_level_loaded(&mut self, index: usize) {
        if let Some(f) = &self.level_loaded {
            report(f.call1(&JsValue::NULL, &(index as u32).into()));
        }
    }
}

fn parse_mode(mode: &str) -> Option<GameMode> {
    match mode.to_lowercase().as_str() {
        "putt" | "drag" => Some(GameMode::Putt),
        "kick" | "projectile" => Some(GameMode::Kick),
        _ => None,
    }
}

fn parse_command(command: &str) -> Option<InputCommand> {
    match command {
        "increase_power" | "ArrowUp" => Some(InputCommand::IncreasePower),
        "decrease_power" | "ArrowDown" => Some(InputCommand::DecreasePower),
        "rotate_left" | "ArrowLeft" => Some(InputCommand::RotateLeft),
        "rotate_right" | "ArrowRight" => Some(InputCommand::RotateRight),
        "fire" | " " | "Space" | "Enter" => Some(InputCommand::Fire),
        "reset" | "r" | "R" => Some(InputCommand::Reset),
        _ => None,
    }
}

/// A game session driven from JavaScript
#[wasm_bindgen]
pub struct WebSession {
    inner: GameSession<JsHooks>,
}

#[wasm_bindgen]
impl WebSession {
    /// `mode` is "putt" or "kick"; settings come from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new(mode: &str) -> Result<WebSession, JsValue> {
        let mode = parse_mode(mode)
            .ok_or_else(|| JsValue::from_str(&format!("unknown game mode: {}", mode)))?;
        let inner = GameSession::new(
            mode,
            Settings::load(),
            default_course(mode),
            JsHooks::default(),
        );
        Ok(WebSession { inner })
    }

    pub fn set_on_shot_fired(&mut self, f: Function) {
        self.inner.hooks_mut().shot_fired = Some(f);
    }

    pub fn set_on_ball_captured(&mut self, f: Function) {
        self.inner.hooks_mut().ball_captured = Some(f);
    }

    /// `f(attempts, stars)`
    pub fn set_on_win(&mut self, f: Function) {
        self.inner.hooks_mut().win = Some(f);
    }

    pub fn set_on_all_levels_complete(&mut self, f: Function) {
        self.inner.hooks_mut().all_levels_complete = Some(f);
    }

    /// `f(levelIndex)`
    pub fn set_on_level_loaded(&mut self, f: Function) {
        self.inner.hooks_mut().level_loaded = Some(f);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, z: f32) {
        self.inner.pointer_down(Vec3::new(x, y, z));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, z: f32) {
        self.inner.pointer_move(Vec3::new(x, y, z));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, z: f32) {
        self.inner.pointer_up(Vec3::new(x, y, z));
    }

    /// Returns false for keys that map to no command
    pub fn key(&mut self, command: &str) -> bool {
        match parse_command(command) {
            Some(command) => {
                self.inner.command(command);
                true
            }
            None => false,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.inner.tick(dt);
    }

    pub fn advance(&mut self) {
        self.inner.advance_to_next_level();
    }

    pub fn reset(&mut self) {
        self.inner.reset_current_level();
    }

    pub fn level(&self) -> u32 {
        self.inner.current_level() as u32
    }

    pub fn attempts(&self) -> u32 {
        self.inner.attempts()
    }

    pub fn ball_position(&self) -> Float32Array {
        let p = self.inner.ball().pos;
        Float32Array::from(&[p.x, p.y, p.z][..])
    }

    /// Flattened `[x, y, z, width, depth]` per obstacle
    pub fn obstacles(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .inner
            .obstacles()
            .iter()
            .flat_map(|o| [o.pos.x, o.pos.y, o.pos.z, o.footprint.x, o.footprint.y])
            .collect();
        Float32Array::from(&flat[..])
    }

    pub fn goal_position(&self) -> Option<Float32Array> {
        self.inner
            .goal()
            .map(|g| Float32Array::from(&[g.pos.x, g.pos.y, g.pos.z][..]))
    }

    /// Full frame state as JSON
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.snapshot()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
