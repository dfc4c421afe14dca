//! A game session: turn order, game mode, and outcome tracking.
//!
//! [`Game`] drives a [`Board`] the way a front end would: Black moves
//! first, turns alternate while the game is ongoing, and in
//! [`GameMode::VsComputer`] the computer plays White.

use tracing::{debug, info};

use crate::board::{Board, Color, Outcome, Point};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::heuristic::{Difficulty, select_move_with_difficulty};
use crate::random::{FastRng, RandomSource};

/// Color the computer plays in [`GameMode::VsComputer`].
pub const COMPUTER_COLOR: Color = Color::White;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayer,
    VsComputer(Difficulty),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver(Outcome),
}

pub struct Game<R: RandomSource = FastRng> {
    board: Board,
    mode: GameMode,
    state: GameState,
    current: Color,
    history: Vec<(Point, Color)>,
    rng: R,
}

impl Game<FastRng> {
    /// Start a game from `config`, seeding the computer from `config.seed`.
    pub fn new(config: &GameConfig, mode: GameMode) -> Result<Self, ConfigError> {
        Self::with_rng(config, mode, FastRng::from_seed(config.seed))
    }
}

impl<R: RandomSource> Game<R> {
    pub fn with_rng(config: &GameConfig, mode: GameMode, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size),
            mode,
            state: GameState::Playing,
            current: Color::Black,
            history: Vec::new(),
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<(Point, Color)> {
        self.history.last().copied()
    }

    pub fn is_computer_turn(&self) -> bool {
        matches!(self.mode, GameMode::VsComputer(_))
            && self.state == GameState::Playing
            && self.current == COMPUTER_COLOR
    }

    /// Place the current player's stone at `(row, col)`.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        self.board.check_placement(row, col)?;
        let color = self.current;
        self.board.place(row, col, color);
        self.history.push(((row, col), color));

        let outcome = self.board.outcome_after(row, col, color);
        debug!(?color, row, col, ?outcome, "stone placed");
        match outcome {
            Outcome::Ongoing => self.current = color.opponent(),
            _ => {
                info!(?outcome, moves = self.history.len(), "game over");
                self.state = GameState::GameOver(outcome);
            }
        }
        Ok(outcome)
    }

    /// Let the computer pick and play its move.
    pub fn computer_move(&mut self) -> Result<(Point, Outcome), GameError> {
        let GameMode::VsComputer(difficulty) = self.mode else {
            return Err(GameError::NotComputerTurn);
        };
        if self.state != GameState::Playing {
            return Err(GameError::GameOver);
        }
        if self.current != COMPUTER_COLOR {
            return Err(GameError::NotComputerTurn);
        }
        let pt = select_move_with_difficulty(
            &self.board,
            self.current,
            self.current.opponent(),
            difficulty,
            &mut self.rng,
        )
        .ok_or(GameError::NoLegalMove)?;
        let outcome = self.play(pt.0, pt.1)?;
        Ok((pt, outcome))
    }

    /// Clear the board and hand the first move back to Black.
    pub fn restart(&mut self) {
        self.board.reset();
        self.state = GameState::Playing;
        self.current = Color::Black;
        self.history.clear();
    }

    /// Switch mode and start over.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }
}
