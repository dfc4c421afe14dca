//! One-ply heuristic move selection.
//!
//! Every candidate cell is scored twice, once as if the mover played there
//! (attack) and once as if the opponent did (defense). The mover picks the
//! cell with the best blend, breaking ties at random. There is no lookahead.
//!
//! Scoring never touches the board: the candidate cell is treated as holding
//! the scoring player's stone, and the runs are read outward from it.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::board::{Board, Color, Point};
use crate::constants::{
    AXES, DEFENSE_WEIGHT, DENSE_BOARD_CELLS, MEDIUM_HEURISTIC_PROB, NO_MOVE, OCCUPIED_SCORE,
    SCORE_FIVE, SCORE_OPEN_FOUR, SCORE_OPEN_THREE, SCORE_OPEN_TWO, WIN_LENGTH,
};
use crate::error::ConfigError;
use crate::random::{RandomSource, choose};

/// How strongly the computer plays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Uniformly random among candidates
    Easy,
    /// Heuristic move most of the time, random otherwise
    #[default]
    Medium,
    /// Always the heuristic move
    Hard,
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Walk from `from` along `dir` over `color` stones.
///
/// Returns the run length (excluding `from`) and whether the cell right
/// after the run is off the board or holds a stone.
fn scan(board: &Board, from: Point, dir: (isize, isize), color: Color) -> (usize, bool) {
    let mut count = 0;
    let mut cur = board.step(from, dir);
    while let Some((r, c)) = cur {
        match board.get(r, c) {
            Some(s) if s == color => {
                count += 1;
                cur = board.step((r, c), dir);
            }
            Some(_) => return (count, true),
            None => return (count, false),
        }
    }
    (count, true)
}

/// Contribution of one axis given its run length and blocked ends.
fn axis_score(count: usize, blocked_ends: usize) -> i32 {
    if count >= WIN_LENGTH {
        return SCORE_FIVE;
    }
    if blocked_ends > 0 {
        return 0;
    }
    match count {
        4 => SCORE_OPEN_FOUR,
        3 => SCORE_OPEN_THREE,
        2 => SCORE_OPEN_TWO,
        _ => 0,
    }
}

/// Strategic worth of `color` playing at `(row, col)`.
///
/// Returns [`OCCUPIED_SCORE`] for an occupied or off-board cell. Otherwise
/// sums one table entry per axis, based on the run the new stone would be
/// part of and how many of its ends are blocked.
pub fn score_candidate(board: &Board, (row, col): Point, color: Color) -> i32 {
    if !board.is_empty_at(row, col) {
        return OCCUPIED_SCORE;
    }
    AXES.iter()
        .map(|&(dr, dc)| {
            let (forward, fwd_blocked) = scan(board, (row, col), (dr, dc), color);
            let (backward, back_blocked) = scan(board, (row, col), (-dr, -dc), color);
            let count = 1 + forward + backward;
            let blocked = usize::from(fwd_blocked) + usize::from(back_blocked);
            axis_score(count, blocked)
        })
        .sum()
}

/// Cells worth considering for the next move, in row-major order.
///
/// Empty cells touching a stone (including diagonally). Boards under
/// [`DENSE_BOARD_CELLS`] cells consider every empty cell, and so does an
/// empty board.
pub fn enumerate_candidates(board: &Board) -> Vec<Point> {
    let dense = board.size() * board.size() < DENSE_BOARD_CELLS;
    let near: Vec<Point> = board
        .empty_cells()
        .filter(|&(r, c)| dense || board.has_neighbor(r, c))
        .collect();
    if near.is_empty() {
        return board.empty_cells().collect();
    }
    near
}

/// Best blended score over the candidates, with every cell tied at it.
fn best_candidates(board: &Board, mover: Color, opponent: Color) -> (f64, Vec<Point>) {
    let mut best_score = f64::NEG_INFINITY;
    let mut best = Vec::new();
    for pt in enumerate_candidates(board) {
        let attack = score_candidate(board, pt, mover);
        let defense = score_candidate(board, pt, opponent);
        let total = f64::from(attack) + f64::from(defense) * DEFENSE_WEIGHT;
        if total > best_score {
            best_score = total;
            best.clear();
            best.push(pt);
        } else if total == best_score {
            best.push(pt);
        }
    }
    (best_score, best)
}

/// The heuristic move for `mover`, or `None` when nothing is empty.
pub fn select_move(
    board: &Board,
    mover: Color,
    opponent: Color,
    rng: &mut impl RandomSource,
) -> Option<Point> {
    let (score, ties) = best_candidates(board, mover, opponent);
    let pt = choose(rng, &ties)?;
    debug!(?mover, ?pt, score, ties = ties.len(), "heuristic move");
    Some(pt)
}

/// A uniformly random candidate, or `None` when nothing is empty.
pub fn select_random_move(board: &Board, rng: &mut impl RandomSource) -> Option<Point> {
    let candidates = enumerate_candidates(board);
    trace!(candidates = candidates.len(), "random move");
    choose(rng, &candidates)
}

/// Pick a move for `difficulty`, or `None` when nothing is empty.
pub fn select_move_with_difficulty(
    board: &Board,
    mover: Color,
    opponent: Color,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Option<Point> {
    match difficulty {
        Difficulty::Easy => select_random_move(board, rng),
        Difficulty::Hard => select_move(board, mover, opponent, rng),
        Difficulty::Medium => {
            if rng.uniform() < MEDIUM_HEURISTIC_PROB {
                select_move(board, mover, opponent, rng)
            } else {
                select_random_move(board, rng)
            }
        }
    }
}

/// Like [`select_move`], but returns [`NO_MOVE`] when nothing is empty.
///
/// `(0, 0)` is also a real cell, so check [`Board::is_full`] before
/// trusting the result.
pub fn choose_move(
    board: &Board,
    mover: Color,
    opponent: Color,
    rng: &mut impl RandomSource,
) -> Point {
    select_move(board, mover, opponent, rng).unwrap_or(NO_MOVE)
}

/// Like [`select_move_with_difficulty`], but returns [`NO_MOVE`] when nothing is empty.
pub fn choose_move_with_difficulty(
    board: &Board,
    mover: Color,
    opponent: Color,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Point {
    select_move_with_difficulty(board, mover, opponent, difficulty, rng).unwrap_or(NO_MOVE)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use quickcheck::quickcheck;

    use super::*;

    /// Replays fixed answers, then falls back to zero.
    #[derive(Default)]
    struct ScriptedRng {
        picks: VecDeque<usize>,
        uniforms: VecDeque<f64>,
    }

    impl ScriptedRng {
        fn new(picks: &[usize], uniforms: &[f64]) -> Self {
            Self {
                picks: picks.iter().copied().collect(),
                uniforms: uniforms.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRng {
        fn pick(&mut self, n: usize) -> usize {
            self.picks.pop_front().unwrap_or(0).min(n - 1)
        }

        fn uniform(&mut self) -> f64 {
            self.uniforms.pop_front().unwrap_or(0.0)
        }
    }

    fn board_with(size: usize, black: &[Point], white: &[Point]) -> Board {
        let mut board = Board::new(size);
        for &(r, c) in black {
            assert!(board.place(r, c, Color::Black));
        }
        for &(r, c) in white {
            assert!(board.place(r, c, Color::White));
        }
        board
    }

    quickcheck! {
        fn scoring_leaves_board_untouched(stones: Vec<(u8, u8, bool)>) -> bool {
            let mut board = Board::new(9);
            for (r, c, black) in stones {
                let color = if black { Color::Black } else { Color::White };
                board.place((r % 9) as usize, (c % 9) as usize, color);
            }
            let before = board.clone();
            for r in 0..9 {
                for c in 0..9 {
                    let s = score_candidate(&board, (r, c), Color::Black);
                    if board.get(r, c).is_some() && s != OCCUPIED_SCORE {
                        return false;
                    }
                    score_candidate(&board, (r, c), Color::White);
                }
            }
            board == before
        }

        fn candidates_are_empty_cells(stones: Vec<(u8, u8)>) -> bool {
            let mut board = Board::new(15);
            for (i, (r, c)) in stones.into_iter().enumerate() {
                let color = if i % 2 == 0 { Color::Black } else { Color::White };
                board.place((r % 15) as usize, (c % 15) as usize, color);
            }
            let candidates = enumerate_candidates(&board);
            let all_empty = candidates.iter().all(|&(r, c)| board.is_empty_at(r, c));
            let near = board.stone_count() == 0
                || candidates.iter().all(|&(r, c)| board.has_neighbor(r, c));
            all_empty && near && (board.is_full() || !candidates.is_empty())
        }
    }

    #[test]
    fn test_axis_score_table() {
        assert_eq!(axis_score(5, 2), SCORE_FIVE);
        assert_eq!(axis_score(6, 0), SCORE_FIVE);
        assert_eq!(axis_score(4, 0), SCORE_OPEN_FOUR);
        assert_eq!(axis_score(4, 1), 0);
        assert_eq!(axis_score(3, 0), SCORE_OPEN_THREE);
        assert_eq!(axis_score(3, 2), 0);
        assert_eq!(axis_score(2, 0), SCORE_OPEN_TWO);
        assert_eq!(axis_score(1, 0), 0);
    }

    #[test]
    fn test_score_occupied_cell() {
        let board = board_with(15, &[(7, 7)], &[]);
        assert_eq!(score_candidate(&board, (7, 7), Color::Black), OCCUPIED_SCORE);
        assert_eq!(score_candidate(&board, (7, 7), Color::White), OCCUPIED_SCORE);
        assert_eq!(score_candidate(&board, (15, 0), Color::White), OCCUPIED_SCORE);
    }

    #[test]
    fn test_score_isolated_cell_is_zero() {
        let board = Board::new(15);
        assert_eq!(score_candidate(&board, (7, 7), Color::Black), 0);
    }

    #[test]
    fn test_score_open_four() {
        let board = board_with(15, &[(7, 5), (7, 6), (7, 7)], &[]);
        // Horizontal four with (7,4) and (7,9) empty; other axes hold a lone stone.
        assert_eq!(score_candidate(&board, (7, 8), Color::Black), SCORE_OPEN_FOUR);
        // The same cell is worth nothing to White.
        assert_eq!(score_candidate(&board, (7, 8), Color::White), 0);
    }

    #[test]
    fn test_score_blocked_four_is_zero() {
        let board = board_with(15, &[(7, 5), (7, 6), (7, 7)], &[(7, 4)]);
        assert_eq!(score_candidate(&board, (7, 8), Color::Black), 0);
    }

    #[test]
    fn test_score_edge_blocks() {
        let board = board_with(15, &[(0, 1), (0, 2)], &[]);
        // Run (0,0)-(0,2) touches the left edge.
        assert_eq!(score_candidate(&board, (0, 0), Color::Black), 0);
        assert_eq!(score_candidate(&board, (0, 3), Color::Black), SCORE_OPEN_THREE);
    }

    #[test]
    fn test_score_sums_axes() {
        // (7,7) joins a horizontal two and a vertical two.
        let board = board_with(15, &[(7, 6), (6, 7)], &[]);
        assert_eq!(score_candidate(&board, (7, 7), Color::Black), 2 * SCORE_OPEN_TWO);
    }

    #[test]
    fn test_candidates_empty_board_falls_back_to_all() {
        let board = Board::new(15);
        assert_eq!(enumerate_candidates(&board).len(), 225);
    }

    #[test]
    fn test_candidates_neighbors_only() {
        let board = board_with(15, &[(7, 7)], &[]);
        let candidates = enumerate_candidates(&board);
        assert_eq!(candidates.len(), 8);
        assert!(candidates.contains(&(6, 6)));
        assert!(candidates.contains(&(8, 8)));
        assert!(!candidates.contains(&(7, 9)));
    }

    #[test]
    fn test_candidates_dense_board_takes_all_empty() {
        // 7x7 = 49 cells, under the threshold.
        let board = board_with(7, &[(0, 0)], &[]);
        assert_eq!(enumerate_candidates(&board).len(), 48);
        // 8x8 = 64 cells, neighbor filter applies.
        let board = board_with(8, &[(0, 0)], &[]);
        assert_eq!(enumerate_candidates(&board).len(), 3);
    }

    #[test]
    fn test_choose_move_breaks_ties_with_rng() {
        let board = board_with(15, &[], &[(3, 3), (3, 4), (3, 5), (3, 6)]);
        let first = choose_move(&board, Color::White, Color::Black, &mut ScriptedRng::new(&[0], &[]));
        let last = choose_move(&board, Color::White, Color::Black, &mut ScriptedRng::new(&[1], &[]));
        assert_eq!(first, (3, 2));
        assert_eq!(last, (3, 7));
    }

    #[test]
    fn test_choose_move_blocks_open_three() {
        let board = board_with(15, &[(5, 5), (5, 6), (5, 7)], &[(0, 14)]);
        let mut rng = ScriptedRng::default();
        assert_eq!(choose_move(&board, Color::White, Color::Black, &mut rng), (5, 4));
        let mut rng = ScriptedRng::new(&[1], &[]);
        assert_eq!(choose_move(&board, Color::White, Color::Black, &mut rng), (5, 8));
    }

    #[test]
    fn test_choose_move_prefers_winning_over_blocking() {
        let board = board_with(
            15,
            &[(5, 5), (5, 6), (5, 7), (5, 8)],
            &[(10, 1), (10, 2), (10, 3), (10, 4)],
        );
        let mut rng = ScriptedRng::default();
        let pt = choose_move(&board, Color::White, Color::Black, &mut rng);
        assert!(pt == (10, 0) || pt == (10, 5), "got {pt:?}");
    }

    #[test]
    fn test_choose_move_full_board_returns_sentinel() {
        let mut board = Board::new(5);
        let cells: Vec<Point> = board.empty_cells().collect();
        for (r, c) in cells {
            // Column-parity pattern: no five anywhere.
            let color = if (c + r / 2) % 2 == 0 { Color::Black } else { Color::White };
            board.place(r, c, color);
        }
        assert!(board.is_full());
        let mut rng = ScriptedRng::default();
        assert_eq!(choose_move(&board, Color::Black, Color::White, &mut rng), NO_MOVE);
        assert_eq!(select_move(&board, Color::Black, Color::White, &mut rng), None);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                choose_move_with_difficulty(&board, Color::Black, Color::White, difficulty, &mut rng),
                NO_MOVE
            );
        }
    }

    #[test]
    fn test_medium_branches_on_uniform() {
        let board = board_with(15, &[(5, 5), (5, 6), (5, 7)], &[(0, 14)]);
        let candidates = enumerate_candidates(&board);
        let heuristic = (5, 4);

        let mut rng = ScriptedRng::new(&[0], &[0.69]);
        let pt = choose_move_with_difficulty(&board, Color::White, Color::Black, Difficulty::Medium, &mut rng);
        assert_eq!(pt, heuristic);

        let mut rng = ScriptedRng::new(&[5], &[0.7]);
        let pt = choose_move_with_difficulty(&board, Color::White, Color::Black, Difficulty::Medium, &mut rng);
        assert_eq!(pt, candidates[5]);
    }

    #[test]
    fn test_hard_and_easy_ignore_uniform() {
        let board = board_with(15, &[(5, 5), (5, 6), (5, 7)], &[(0, 14)]);
        let candidates = enumerate_candidates(&board);

        let mut rng = ScriptedRng::new(&[0], &[0.99]);
        let pt = choose_move_with_difficulty(&board, Color::White, Color::Black, Difficulty::Hard, &mut rng);
        assert_eq!(pt, (5, 4));

        let mut rng = ScriptedRng::new(&[3], &[0.0]);
        let pt = choose_move_with_difficulty(&board, Color::White, Color::Black, Difficulty::Easy, &mut rng);
        assert_eq!(pt, candidates[3]);
    }

    #[test]
    fn test_difficulty_parse_and_display() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "insane".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty("insane".to_string()))
        );
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
