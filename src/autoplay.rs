//! Seeded demo player
//!
//! Plays a session through its public input surface, the same way a person
//! would: drag from the ball in putt mode, dial power/angle and fire in kick
//! mode. Putts aim straight at the cup with some seeded wobble; kicks pick
//! among the dial settings whose predicted flight ends on the target.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{ANGLE_MAX_DEG, POWER_MAX};
use crate::horizontal;
use crate::sim::collision::resolve_ground;
use crate::sim::integrate::integrate;
use crate::sim::judge::kick_captured;
use crate::sim::{
    Ball, GameMode, GameSession, Goal, ImpulseSource, InputCommand, PowerAngleAim, SessionHooks,
    SessionPhase,
};
use crate::settings::Settings;

/// Longest flight the kick predictor will simulate
const MAX_PREDICT_TICKS: usize = 2000;

pub struct Autoplayer {
    rng: Pcg32,
    /// Max aim error in radians (putt mode)
    wobble: f32,
}

impl Autoplayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            wobble: 0.08,
        }
    }

    /// Take a shot if the session is waiting for one; returns whether it did
    pub fn take_shot<H: SessionHooks>(&mut self, session: &mut GameSession<H>) -> bool {
        if session.phase() != SessionPhase::AwaitingInput {
            return false;
        }
        let Some(goal) = session.goal().cloned() else {
            return false;
        };

        match session.mode() {
            GameMode::Putt => self.putt(session, &goal),
            GameMode::Kick => self.kick(session, &goal),
        }
        session.phase() == SessionPhase::Moving
    }

    fn putt<H: SessionHooks>(&mut self, session: &mut GameSession<H>, goal: &Goal) {
        let settings = session.settings();
        let ball = session.ball().pos;
        let to_goal = horizontal(goal.pos) - horizontal(ball);
        let distance = to_goal.length();
        if distance < f32::EPSILON {
            return;
        }

        // Geometric series: total roll = v0 / (1 - damping)
        let speed = distance * (1.0 - settings.damping) * self.rng.random_range(0.92..1.08);
        let wobble = self.rng.random_range(-self.wobble..=self.wobble);
        let heading = to_goal.y.atan2(to_goal.x) + wobble;
        let pull = speed / settings.drag_scale;

        let grab = Vec3::new(ball.x, 0.0, ball.z);
        let release = grab - Vec3::new(heading.cos(), 0.0, heading.sin()) * pull;
        log::debug!("Autoplay putt: heading {:.3} rad, pull {:.3}", heading, pull);

        session.pointer_down(grab);
        session.pointer_move(release);
        session.pointer_up(release);
    }

    fn kick<H: SessionHooks>(&mut self, session: &mut GameSession<H>, goal: &Goal) {
        let ImpulseSource::PowerAngle(current) = session.impulse_source().clone() else {
            return;
        };

        let settings = session.settings();
        let step = settings.aim_step;
        if step <= 0.0 {
            log::warn!("Autoplay kick: aim step {} cannot move the dial", step);
            return;
        }

        let mut hits = Vec::new();
        for p in 0..=(POWER_MAX / step) as u32 {
            for a in 0..=(ANGLE_MAX_DEG / step) as u32 {
                let aim = PowerAngleAim {
                    power: p as f32 * step,
                    angle_deg: a as f32 * step,
                };
                if predict_kick_capture(&aim, goal, settings) {
                    hits.push(aim);
                }
            }
        }

        let candidates = hits.len();
        let target = if hits.is_empty() {
            log::debug!("Autoplay kick: no capturing aim found, guessing");
            PowerAngleAim {
                power: snap(self.rng.random_range(20.0..100.0), step),
                angle_deg: snap(self.rng.random_range(10.0..80.0), step),
            }
        } else {
            hits.swap_remove(self.rng.random_range(0..hits.len()))
        };
        log::debug!(
            "Autoplay kick: power {} angle {} ({} capturing aims)",
            target.power,
            target.angle_deg,
            candidates
        );

        dial(
            session,
            current.power,
            target.power,
            step,
            InputCommand::IncreasePower,
            InputCommand::DecreasePower,
        );
        dial(
            session,
            current.angle_deg,
            target.angle_deg,
            step,
            InputCommand::RotateLeft,
            InputCommand::RotateRight,
        );
        session.command(InputCommand::Fire);
    }
}

fn snap(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Send enough up/down commands to move a dial from `from` to `to`
fn dial<H: SessionHooks>(
    session: &mut GameSession<H>,
    from: f32,
    to: f32,
    step: f32,
    up: InputCommand,
    down: InputCommand,
) {
    let steps = ((to - from) / step).round() as i32;
    let command = if steps > 0 { up } else { down };
    for _ in 0..steps.unsigned_abs() {
        session.command(command);
    }
}

/// Fly a kick from the tee and report whether it would be captured
pub fn predict_kick_capture(aim: &PowerAngleAim, goal: &Goal, settings: &Settings) -> bool {
    let mut ball = Ball::new(settings.spawn, settings.ball_radius);
    ball.vel = aim.impulse(settings.launch_scale, settings.vertical_bias);

    for _ in 0..MAX_PREDICT_TICKS {
        integrate(&mut ball, GameMode::Kick, settings);
        let contact = resolve_ground(&mut ball, settings);
        if kick_captured(&ball, goal, settings) {
            return true;
        }
        if contact.stopped {
            return false;
        }
    }
    false
}
