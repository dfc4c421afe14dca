//! Gomoku board: grid state, placement legality, and win/draw detection.
//!
//! The grid is a row-major `Vec` of `Option<Color>`, `None` meaning empty.
//! A cell goes from empty to a color at most once until [`Board::reset`].

use std::fmt;

use crate::constants::{AXES, WIN_LENGTH};
use crate::error::PlaceError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A cell on the board as `(row, col)`.
pub type Point = (usize, usize);

/// Result of a game after a placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Color),
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Create an empty `size`x`size` board.
    ///
    /// # Panics
    /// Panics if `size` is zero. Use [`GameConfig::validate`](crate::config::GameConfig::validate)
    /// to reject bad sizes coming from users.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Stone at `(row, col)`; `None` for empty or off-board cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.get(row, col).is_none()
    }

    /// The neighbor of `(row, col)` one step along `(dr, dc)`, if on the board.
    #[inline]
    pub fn step(&self, (row, col): Point, (dr, dc): (isize, isize)) -> Option<Point> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Number of contiguous `color` stones starting one step away from
    /// `from` along `dir`. The cell `from` itself is not inspected.
    pub fn run_length(&self, from: Point, dir: (isize, isize), color: Color) -> usize {
        let mut count = 0;
        let mut cur = self.step(from, dir);
        while let Some((r, c)) = cur {
            if self.get(r, c) != Some(color) {
                break;
            }
            count += 1;
            cur = self.step((r, c), dir);
        }
        count
    }

    /// Check whether a stone may be placed at `(row, col)`.
    pub fn check_placement(&self, row: usize, col: usize) -> Result<(), PlaceError> {
        if !self.in_bounds(row, col) {
            return Err(PlaceError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if self.get(row, col).is_some() {
            return Err(PlaceError::Occupied { row, col });
        }
        Ok(())
    }

    /// Place a stone. Returns `false` without touching the grid when the
    /// cell is off the board or occupied.
    pub fn place(&mut self, row: usize, col: usize, color: Color) -> bool {
        if self.check_placement(row, col).is_err() {
            return false;
        }
        let i = self.idx(row, col);
        self.cells[i] = Some(color);
        true
    }

    /// Whether the stone just placed at `(row, col)` completes five or more
    /// in a row for `color` along any axis.
    ///
    /// Only lines through `(row, col)` are examined, so this is meaningful
    /// only right after placing there.
    pub fn check_winner(&self, row: usize, col: usize, color: Color) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        AXES.iter().any(|&(dr, dc)| {
            let forward = self.run_length((row, col), (dr, dc), color);
            let backward = self.run_length((row, col), (-dr, -dc), color);
            1 + forward + backward >= WIN_LENGTH
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Clear every cell. Turn and winner belong to the caller.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Outcome after `color` has placed at `(row, col)`.
    pub fn outcome_after(&self, row: usize, col: usize, color: Color) -> Outcome {
        if self.check_winner(row, col, color) {
            Outcome::Win(color)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }

    /// Whether any of the 8 cells around `(row, col)` holds a stone.
    pub fn has_neighbor(&self, row: usize, col: usize) -> bool {
        (-1..=1).any(|dr| {
            (-1..=1).any(|dc| {
                (dr, dc) != (0, 0)
                    && self
                        .step((row, col), (dr, dc))
                        .is_some_and(|(r, c)| self.get(r, c).is_some())
            })
        })
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(move |(i, _)| (i / s, i % s))
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let ch = match self.get(row, col) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
