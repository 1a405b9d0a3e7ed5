//! Game session state machine
//!
//! Owns the course, the shot strategy, the stroke counter and the level
//! director, and advances them one frame at a time. Input handlers only stage
//! state (drag start, aim, pending impulse); the ball moves inside `tick`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{resolve_ground, resolve_obstacles};
use super::impulse::{AimCommand, ImpulseSource, PowerAngleAim};
use super::integrate::integrate;
use super::judge::{kick_captured, putt_captured, putt_settled};
use super::level::{LevelDefinition, LevelDirector, default_course};
use super::score::ScoreKeeper;
use super::state::{Ball, Course, GameMode, Goal, Obstacle, SessionPhase};
use crate::settings::Settings;

/// Notifications for the presentation and audio collaborators
///
/// All methods default to no-ops.
pub trait SessionHooks {
    /// A shot was generated (audio)
    fn on_shot_fired(&mut self) {}
    /// The ball dropped into the cup or hit the target (audio)
    fn on_ball_captured(&mut self) {}
    /// Win presentation, fired once per win after the configured delay
    fn on_win(&mut self, _attempts: u32, _stars: u8) {}
    /// The last level was finished and play is wrapping to the first
    fn on_all_levels_complete(&mut self) {}
    /// A level finished loading
    fn on_level_loaded(&mut self, _index: usize) {}
}

/// Hooks that ignore everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl SessionHooks for NoopHooks {}

/// Discrete key commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputCommand {
    IncreasePower,
    DecreasePower,
    RotateLeft,
    RotateRight,
    Fire,
    Reset,
}

/// Deferred win presentation, bound to the level load that scheduled it
#[derive(Debug, Clone)]
struct WinPresentation {
    epoch: u64,
    remaining: f32,
    attempts: u32,
    stars: u8,
}

/// Everything the render collaborator needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub phase: SessionPhase,
    pub level_index: usize,
    pub level_count: usize,
    pub attempts: u32,
    pub ball: Ball,
    pub obstacles: Vec<Obstacle>,
    pub goal: Option<Goal>,
    /// Impulse currently being lined up, for a guide line
    pub aim_preview: Option<Vec3>,
    /// Power/angle dial (kick mode)
    pub power_angle: Option<PowerAngleAim>,
    /// Simulation ticks since the session started
    pub ticks: u64,
}

/// The top-level game state machine
pub struct GameSession<H: SessionHooks = NoopHooks> {
    mode: GameMode,
    settings: Settings,
    director: LevelDirector,
    course: Course,
    phase: SessionPhase,
    score: ScoreKeeper,
    source: ImpulseSource,
    /// Impulse staged by input, applied on the next tick
    pending_impulse: Option<Vec3>,
    presentation: Option<WinPresentation>,
    /// Bumped on every level load
    level_epoch: u64,
    time_ticks: u64,
    hooks: H,
}

impl<H: SessionHooks> GameSession<H> {
    /// Create a session and load the first level
    pub fn new(
        mode: GameMode,
        settings: Settings,
        levels: Vec<LevelDefinition>,
        hooks: H,
    ) -> Self {
        let director = LevelDirector::new(levels);
        let course = director.build_current(&settings);
        let mut session = Self {
            mode,
            settings,
            director,
            course,
            phase: SessionPhase::LevelTransition,
            score: ScoreKeeper::new(),
            source: ImpulseSource::for_mode(mode),
            pending_impulse: None,
            presentation: None,
            level_epoch: 0,
            time_ticks: 0,
            hooks,
        };
        session.load_level(0);
        session
    }

    /// Session on the built-in course for `mode` with default settings
    pub fn with_default_course(mode: GameMode, hooks: H) -> Self {
        Self::new(mode, Settings::default(), default_course(mode), hooks)
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn current_level(&self) -> usize {
        self.director.current_index()
    }

    pub fn level_count(&self) -> usize {
        self.director.len()
    }

    pub fn attempts(&self) -> u32 {
        self.score.attempts()
    }

    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn ball(&self) -> &Ball {
        &self.course.ball
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.course.obstacles
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.course.goal.as_ref()
    }

    pub fn impulse_source(&self) -> &ImpulseSource {
        &self.source
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// A win presentation for the current level is still waiting to fire
    pub fn presentation_pending(&self) -> bool {
        self.presentation
            .as_ref()
            .is_some_and(|task| task.epoch == self.level_epoch)
    }

    /// Impulse the player is lining up, if any
    pub fn aim_preview(&self) -> Option<Vec3> {
        match self.phase {
            SessionPhase::AwaitingInput | SessionPhase::Dragging => {
                self.source.preview(&self.settings)
            }
            _ => None,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            phase: self.phase,
            level_index: self.current_level(),
            level_count: self.level_count(),
            attempts: self.attempts(),
            ball: self.course.ball.clone(),
            obstacles: self.course.obstacles.clone(),
            goal: self.course.goal.clone(),
            aim_preview: self.aim_preview(),
            power_angle: match &self.source {
                ImpulseSource::PowerAngle(aim) => Some(aim.clone()),
                ImpulseSource::Drag(_) => None,
            },
            ticks: self.time_ticks,
        }
    }

    // === Input ===

    /// Pointer pressed at a world point on the ground plane
    pub fn pointer_down(&mut self, point: Vec3) {
        if self.phase != SessionPhase::AwaitingInput {
            return;
        }
        let ImpulseSource::Drag(drag) = &mut self.source else {
            return;
        };
        if drag.begin(point, self.course.ball.pos, self.settings.pick_radius) {
            self.phase = SessionPhase::Dragging;
        }
    }

    /// Pointer moved; only updates the aim preview
    pub fn pointer_move(&mut self, point: Vec3) {
        if self.phase != SessionPhase::Dragging {
            return;
        }
        if let ImpulseSource::Drag(drag) = &mut self.source {
            drag.track(point);
        }
    }

    /// Pointer released; a drag that started on the ball becomes a shot
    pub fn pointer_up(&mut self, point: Vec3) {
        if self.phase != SessionPhase::Dragging {
            return;
        }
        let ImpulseSource::Drag(drag) = &mut self.source else {
            return;
        };
        if let Some(impulse) = drag.release(point, self.settings.drag_scale) {
            self.launch(impulse);
        }
    }

    /// Handle a key command
    pub fn command(&mut self, command: InputCommand) {
        match command {
            InputCommand::IncreasePower => self.aim(AimCommand::IncreasePower),
            InputCommand::DecreasePower => self.aim(AimCommand::DecreasePower),
            InputCommand::RotateLeft => self.aim(AimCommand::RotateLeft),
            InputCommand::RotateRight => self.aim(AimCommand::RotateRight),
            InputCommand::Fire => self.fire(),
            InputCommand::Reset => self.reset_current_level(),
        }
    }

    fn aim(&mut self, command: AimCommand) {
        if matches!(self.phase, SessionPhase::Won | SessionPhase::LevelTransition) {
            return;
        }
        self.source.aim(command, self.settings.aim_step);
    }

    /// Kick with the current power and angle
    pub fn fire(&mut self) {
        if self.phase != SessionPhase::AwaitingInput {
            return;
        }
        let ImpulseSource::PowerAngle(aim) = &self.source else {
            return;
        };
        let impulse = aim.impulse(self.settings.launch_scale, self.settings.vertical_bias);
        self.launch(impulse);
    }

    fn launch(&mut self, impulse: Vec3) {
        self.score.record_attempt();
        self.pending_impulse = Some(impulse);
        self.phase = SessionPhase::Moving;
        log::debug!(
            "Shot {} on level {}: impulse {:?}",
            self.score.attempts(),
            self.current_level(),
            impulse
        );
        self.hooks.on_shot_fired();
    }

    // === Simulation ===

    /// Advance one frame; `dt` (seconds) only drives the win presentation delay
    pub fn tick(&mut self, dt: f32) {
        self.time_ticks += 1;
        self.update_presentation(dt);

        if self.phase != SessionPhase::Moving {
            return;
        }

        if let Some(impulse) = self.pending_impulse.take() {
            self.course.ball.vel += impulse;
        }

        integrate(&mut self.course.ball, self.mode, &self.settings);

        match self.mode {
            GameMode::Putt => {
                let hits = resolve_obstacles(
                    &mut self.course.ball,
                    &self.course.obstacles,
                    self.settings.restitution,
                );
                if hits > 0 {
                    log::debug!("Ball hit {} obstacle(s) at {:?}", hits, self.course.ball.pos);
                }

                let captured = self
                    .course
                    .goal
                    .as_ref()
                    .is_some_and(|goal| putt_captured(&self.course.ball, goal, &self.settings));
                if captured {
                    self.win();
                } else if putt_settled(&self.course.ball, &self.settings) {
                    self.course.ball.vel = Vec3::ZERO;
                    self.end_shot();
                }
            }
            GameMode::Kick => {
                let contact = resolve_ground(&mut self.course.ball, &self.settings);
                if contact.touched {
                    log::debug!("Ground contact at {:?}", self.course.ball.pos);
                }

                let captured = self
                    .course
                    .goal
                    .as_ref()
                    .is_some_and(|goal| kick_captured(&self.course.ball, goal, &self.settings));
                if captured {
                    self.win();
                } else if contact.stopped {
                    // Missed kicks are retaken from the tee
                    self.course.ball = Ball::new(self.settings.spawn, self.settings.ball_radius);
                    self.end_shot();
                }
            }
        }
    }

    fn end_shot(&mut self) {
        log::debug!("Shot over at {:?}", self.course.ball.pos);
        self.phase = SessionPhase::AwaitingInput;
    }

    fn win(&mut self) {
        self.course.ball.vel = Vec3::ZERO;
        self.phase = SessionPhase::Won;

        let attempts = self.score.attempts();
        let stars = self.score.stars(self.mode);
        log::info!(
            "Level {} complete in {} shot(s): {} star(s)",
            self.current_level() + 1,
            attempts,
            stars
        );
        self.hooks.on_ball_captured();

        self.presentation = Some(WinPresentation {
            epoch: self.level_epoch,
            remaining: self.settings.win_delay,
            attempts,
            stars,
        });
        // A zero delay presents right away
        self.update_presentation(0.0);
    }

    fn update_presentation(&mut self, dt: f32) {
        let Some(task) = self.presentation.as_mut() else {
            return;
        };
        if task.epoch != self.level_epoch {
            log::warn!("Dropping win presentation scheduled for a previous level load");
            self.presentation = None;
            return;
        }

        task.remaining -= dt;
        if task.remaining > 0.0 {
            return;
        }

        if let Some(task) = self.presentation.take() {
            log::info!("Presenting win ({} shots, {} stars)", task.attempts, task.stars);
            self.hooks.on_win(task.attempts, task.stars);
            if self.settings.auto_advance {
                self.advance_to_next_level();
            }
        }
    }

    // === Level flow ===

    /// Tear down the course and load `index`; panics if out of range
    pub fn load_level(&mut self, index: usize) {
        self.phase = SessionPhase::LevelTransition;
        self.director.select(index);
        self.level_epoch += 1;
        self.pending_impulse = None;
        self.source.reset_transient();
        self.score.reset();
        self.course = self.director.build_current(&self.settings);
        self.phase = SessionPhase::AwaitingInput;

        log::info!(
            "Loaded level {}/{} ({} obstacles)",
            index + 1,
            self.director.len(),
            self.course.obstacles.len()
        );
        self.hooks.on_level_loaded(index);
    }

    /// Move to the next level, wrapping to the first after the last
    pub fn advance_to_next_level(&mut self) {
        self.phase = SessionPhase::LevelTransition;
        let step = self.director.advance();
        if step.wrapped {
            log::info!("All {} levels complete, wrapping to the first", self.director.len());
            self.hooks.on_all_levels_complete();
        }
        self.load_level(step.index);
    }

    /// Reload the current level from scratch; valid in any phase
    pub fn reset_current_level(&mut self) {
        self.source = ImpulseSource::for_mode(self.mode);
        self.load_level(self.director.current_index());
    }
}
