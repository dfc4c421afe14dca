//! Gomoku-Rust: a five-in-a-row engine with a heuristic computer opponent.
//!
//! The computer looks one move ahead only: every candidate cell is scored
//! by the runs it would create for either side, and the best blend of
//! attack and defense wins, ties broken at random.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults, score table, and selection parameters
//! - [`board`] - Grid state, placement legality, win and draw detection
//! - [`heuristic`] - Candidate scoring and move selection by difficulty
//! - [`random`] - Injectable random source
//! - [`game`] - Game session with turn order and game modes
//! - [`protocol`] - Text protocol for external front ends
//! - [`coord`] - Vertex notation (`H8`)
//! - [`config`] - Runtime configuration
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use gomoku_rust::board::{Board, Color};
//! use gomoku_rust::heuristic::{Difficulty, choose_move_with_difficulty};
//! use gomoku_rust::random::FastRng;
//!
//! let mut board = Board::new(15);
//! board.place(7, 7, Color::Black);
//!
//! let mut rng = FastRng::with_seed(1);
//! let (row, col) =
//!     choose_move_with_difficulty(&board, Color::White, Color::Black, Difficulty::Hard, &mut rng);
//! assert!(board.place(row, col, Color::White));
//! assert!(!board.check_winner(row, col, Color::White));
//! ```

pub mod board;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod protocol;
pub mod random;
