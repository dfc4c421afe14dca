//! Runtime configuration for a game.

use std::time::Duration;

use crate::constants::{DEFAULT_SIZE, DEFAULT_THINK_MS, MAX_SIZE, MIN_SIZE};
use crate::error::ConfigError;
use crate::heuristic::Difficulty;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board size (NxN)
    pub size: usize,
    /// Computer strength
    pub difficulty: Difficulty,
    /// Seed for the computer's random choices; entropy when `None`
    pub seed: Option<u64>,
    /// Pause the front end takes before a computer move
    pub think_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            difficulty: Difficulty::default(),
            seed: None,
            think_delay: Duration::from_millis(DEFAULT_THINK_MS),
        }
    }
}

impl GameConfig {
    /// Check that the board size can hold a win and be addressed by vertices.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)
    }
}

pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_SIZE {
        return Err(ConfigError::BoardTooSmall { size });
    }
    if size > MAX_SIZE {
        return Err(ConfigError::BoardTooLarge { size });
    }
    Ok(())
}
