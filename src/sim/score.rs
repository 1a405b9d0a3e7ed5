//! Stroke counting and star ratings

use serde::{Deserialize, Serialize};

use super::state::GameMode;

/// Counts attempts on the current level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    attempts: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// One call per generated impulse
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Level (re)load
    pub fn reset(&mut self) {
        self.attempts = 0;
    }

    pub fn stars(&self, mode: GameMode) -> u8 {
        star_rating(mode, self.attempts)
    }
}

/// Stars earned for finishing a level in `attempts` shots
pub fn star_rating(mode: GameMode, attempts: u32) -> u8 {
    match mode {
        GameMode::Putt => match attempts {
            0..=2 => 3,
            3..=4 => 2,
            _ => 1,
        },
        // Four kicks rate one star, not the two some course notes quote
        GameMode::Kick => match attempts {
            0..=1 => 3,
            2..=3 => 2,
            4..=5 => 1,
            _ => 0,
        },
    }
}
