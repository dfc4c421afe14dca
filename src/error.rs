//! Error types for placements, configuration, and game sessions.

use std::fmt;

/// Why a stone cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    /// Coordinates fall outside the board
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The cell already holds a stone
    Occupied { row: usize, col: usize },
}

impl std::error::Error for PlaceError {}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds { row, col, size } => {
                write!(f, "illegal move: ({row}, {col}) is off the {size}x{size} board")
            }
            PlaceError::Occupied { row, col } => {
                write!(f, "illegal move: ({row}, {col}) is not empty")
            }
        }
    }
}

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall { size: usize },
    BoardTooLarge { size: usize },
    UnknownDifficulty(String),
}

impl std::error::Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::constants::{MAX_SIZE, MIN_SIZE};
        match self {
            ConfigError::BoardTooSmall { size } => write!(
                f,
                "board size {size} is too small, a win needs at least {MIN_SIZE}x{MIN_SIZE}"
            ),
            ConfigError::BoardTooLarge { size } => {
                write!(f, "board size {size} is too large, at most {MAX_SIZE} is supported")
            }
            ConfigError::UnknownDifficulty(s) => {
                write!(f, "unknown difficulty '{s}', expected easy, medium or hard")
            }
        }
    }
}

/// The error type for one action in a [`Game`](crate::game::Game).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Place(PlaceError),
    /// The game already ended; restart first
    GameOver,
    /// A computer move was requested while it is not the computer's turn
    NotComputerTurn,
    /// The board has no empty cell left
    NoLegalMove,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Place(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Place(_) => write!(f, "stone could not be placed"),
            GameError::GameOver => write!(f, "the game is over"),
            GameError::NotComputerTurn => write!(f, "it is not the computer's turn"),
            GameError::NoLegalMove => write!(f, "no legal move left"),
        }
    }
}

impl From<PlaceError> for GameError {
    fn from(err: PlaceError) -> Self {
        GameError::Place(err)
    }
}
