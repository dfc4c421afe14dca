//! Constants for board dimensions, scoring, and move selection.
//!
//! The score table and weights are tuning values; changing them changes
//! how each difficulty plays.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). 15 is the standard Gomoku board.
pub const DEFAULT_SIZE: usize = 15;

/// Number of contiguous stones needed to win. Overlines also win.
pub const WIN_LENGTH: usize = 5;

/// Smallest board on which a win is possible.
pub const MIN_SIZE: usize = WIN_LENGTH;

/// Largest board addressable with single-letter column names.
pub const MAX_SIZE: usize = 26;

/// The four axes checked for runs: (row delta, col delta).
/// Order: horizontal, vertical, diagonal down-right, diagonal down-left.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

// =============================================================================
// Score Table
// =============================================================================

/// Axis contribution for a run of five or more, open or not.
pub const SCORE_FIVE: i32 = 10_000;

/// Axis contribution for a run of four with both ends open.
pub const SCORE_OPEN_FOUR: i32 = 1_000;

/// Axis contribution for a run of three with both ends open.
pub const SCORE_OPEN_THREE: i32 = 100;

/// Axis contribution for a run of two with both ends open.
pub const SCORE_OPEN_TWO: i32 = 10;

/// Score returned for an occupied cell, so it is never selected.
pub const OCCUPIED_SCORE: i32 = -1_000;

// =============================================================================
// Move Selection
// =============================================================================

/// Weight of the opponent's score at a cell relative to our own.
pub const DEFENSE_WEIGHT: f64 = 0.8;

/// Boards with fewer cells than this consider every empty cell.
pub const DENSE_BOARD_CELLS: usize = 50;

/// Probability that Medium difficulty plays the heuristic move.
pub const MEDIUM_HEURISTIC_PROB: f64 = 0.7;

/// Returned by the selector when there is nothing to play.
pub const NO_MOVE: (usize, usize) = (0, 0);

// =============================================================================
// Front End
// =============================================================================

/// Default artificial delay before a computer move, in milliseconds.
pub const DEFAULT_THINK_MS: u64 = 500;
