//! Level definitions and sequencing
//!
//! A level is a list of placement commands replayed onto an empty course each
//! time it loads. The director walks the list in order and wraps to the first
//! level after the last one.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::state::{Ball, Course, GameMode, Goal, Obstacle};
use crate::settings::Settings;

/// Height of a wall block's centre (blocks are one unit tall)
pub const WALL_CENTER_Y: f32 = 0.5;
/// Height of the cup / target disc
pub const GOAL_CENTER_Y: f32 = 0.05;

/// A single course-building command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Wall block centred at (x, z) with the given width (x) and depth (z)
    Wall {
        x: f32,
        z: f32,
        width: f32,
        depth: f32,
    },
    /// Cup or target at (x, z)
    Goal { x: f32, z: f32 },
}

/// Immutable description of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub placements: Vec<Placement>,
}

impl LevelDefinition {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    /// Replay the placements onto a fresh course with the ball on the tee
    pub fn build(&self, settings: &Settings) -> Course {
        let mut course = Course {
            ball: Ball::new(settings.spawn, settings.ball_radius),
            obstacles: Vec::new(),
            goal: None,
        };

        for placement in &self.placements {
            match *placement {
                Placement::Wall { x, z, width, depth } => course.obstacles.push(Obstacle {
                    pos: Vec3::new(x, WALL_CENTER_Y, z),
                    footprint: Vec2::new(width, depth),
                    collision_radius: settings.collision_threshold,
                }),
                Placement::Goal { x, z } => {
                    if course.goal.is_some() {
                        log::warn!("Level places more than one goal; keeping the last");
                    }
                    course.goal = Some(Goal {
                        pos: Vec3::new(x, GOAL_CENTER_Y, z),
                        capture_radius: settings.capture_radius,
                    });
                }
            }
        }

        course
    }
}

/// Parse a course (ordered level list) from JSON
pub fn course_from_json(json: &str) -> Result<Vec<LevelDefinition>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Built-in levels for a game mode
pub fn default_course(mode: GameMode) -> Vec<LevelDefinition> {
    match mode {
        GameMode::Putt => putt_course(),
        GameMode::Kick => kick_course(),
    }
}

fn wall(x: f32, z: f32, width: f32, depth: f32) -> Placement {
    Placement::Wall {
        x,
        z,
        width,
        depth,
    }
}

fn putt_course() -> Vec<LevelDefinition> {
    vec![
        // Corridor between two long walls
        LevelDefinition::new(vec![
            wall(-4.0, 5.0, 2.0, 8.0),
            wall(4.0, 5.0, 2.0, 8.0),
            Placement::Goal { x: 0.0, z: 15.0 },
        ]),
        // Bar across the fairway, then a gate
        LevelDefinition::new(vec![
            wall(0.0, 7.0, 6.0, 1.0),
            wall(-3.0, 12.0, 1.0, 6.0),
            wall(3.0, 12.0, 1.0, 6.0),
            Placement::Goal { x: 0.0, z: 18.0 },
        ]),
    ]
}

fn kick_course() -> Vec<LevelDefinition> {
    [8.0, 14.0, 22.0]
        .into_iter()
        .map(|x| LevelDefinition::new(vec![Placement::Goal { x, z: 0.0 }]))
        .collect()
}

/// Outcome of moving to the next level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelAdvance {
    /// Index now current
    pub index: usize,
    /// The last level was just finished and play wrapped to the first
    pub wrapped: bool,
}

/// Owns the ordered level list and the current position in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDirector {
    levels: Vec<LevelDefinition>,
    current: usize,
}

impl LevelDirector {
    /// Panics on an empty level list; a session always needs a level to play
    pub fn new(levels: Vec<LevelDefinition>) -> Self {
        assert!(!levels.is_empty(), "level list must not be empty");
        Self { levels, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.levels.len()
    }

    /// Build the course for the current level
    pub fn build_current(&self, settings: &Settings) -> Course {
        self.levels[self.current].build(settings)
    }

    /// Jump to a specific level; panics if the index is out of range
    pub fn select(&mut self, index: usize) {
        assert!(
            index < self.levels.len(),
            "level index {} out of range (have {})",
            index,
            self.levels.len()
        );
        self.current = index;
    }

    /// Step to the next level, wrapping after the last
    pub fn advance(&mut self) -> LevelAdvance {
        let next = self.current + 1;
        let wrapped = next >= self.levels.len();
        self.current = if wrapped { 0 } else { next };
        LevelAdvance {
            index: self.current,
            wrapped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_first_putt_level() {
        let settings = Settings::default();
        let course = default_course(GameMode::Putt)[0].build(&settings);

        assert_eq!(course.ball.pos, settings.spawn);
        assert_eq!(course.ball.vel, Vec3::ZERO);
        assert_eq!(course.obstacles.len(), 2);
        assert_eq!(course.obstacles[0].pos, Vec3::new(-4.0, WALL_CENTER_Y, 5.0));
        assert_eq!(course.obstacles[1].footprint, Vec2::new(2.0, 8.0));
        assert_eq!(course.obstacles[0].collision_radius, 1.0);

        let goal = course.goal.expect("level 0 has a goal");
        assert_eq!(goal.pos, Vec3::new(0.0, GOAL_CENTER_Y, 15.0));
        assert_eq!(goal.capture_radius, 0.5);
    }

    #[test]
    fn test_advance_wraps_once() {
        let mut director = LevelDirector::new(default_course(GameMode::Putt));
        assert_eq!(director.len(), 2);

        let step = director.advance();
        assert_eq!(
            step,
            LevelAdvance {
                index: 1,
                wrapped: false,
            }
        );
        assert!(director.is_last());

        let step = director.advance();
        assert_eq!(
            step,
            LevelAdvance {
                index: 0,
                wrapped: true,
            }
        );
        assert_eq!(director.current_index(), 0);
    }

    #[test]
    fn test_single_level_always_wraps() {
        let mut director = LevelDirector::new(vec![LevelDefinition::new(vec![])]);
        assert!(director.advance().wrapped);
        assert!(director.advance().wrapped);
        assert_eq!(director.current_index(), 0);
    }

    #[test]
    #[should_panic(expected = "level list must not be empty")]
    fn test_empty_level_list_panics() {
        let _ = LevelDirector::new(Vec::new());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics() {
        let mut director = LevelDirector::new(default_course(GameMode::Kick));
        director.select(3);
    }

    #[test]
    fn test_course_from_json() {
        let json = r#"[
            { "placements": [
                { "kind": "wall", "x": 1.0, "z": 2.0, "width": 1.0, "depth": 1.0 },
                { "kind": "goal", "x": 0.0, "z": 9.0 }
            ] },
            { "placements": [] }
        ]"#;
        let levels = course_from_json(json).unwrap();
        assert_eq!(levels.len(), 2);

        let course = levels[1].build(&Settings::default());
        assert!(course.obstacles.is_empty());
        assert!(course.goal.is_none());
    }
}
