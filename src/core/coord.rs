//! Board coordinates and orthogonal directions.
//!
//! `Coord` is a plain (row, column) pair. It knows nothing about board size:
//! stepping only refuses to go below zero, and the [`Grid`](crate::board::Grid)
//! is responsible for checking the upper bound.

use serde::{Deserialize, Serialize};

/// A cell position, 0-indexed as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, growing downwards.
    pub row: usize,
    /// Column index, growing to the right.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta. Returns `None` if either axis would go negative.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Step one cell in an orthogonal direction.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }

    /// Iterate over the orthogonal neighbors in [`Direction::ALL`] order.
    ///
    /// Neighbors that would have a negative index are skipped; neighbors past
    /// the far edge of the board are not, since the board size is unknown here.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// True if `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Row + 1.
    Down,
    /// Row - 1.
    Up,
    /// Column + 1.
    Right,
    /// Column - 1.
    Left,
}

impl Direction {
    /// Fixed exploration order. Pathfinding breaks ties between equally short
    /// routes by this order, so it must not change.
    pub const ALL: [Direction; 4] = [Direction::Down, Direction::Up, Direction::Right, Direction::Left];

    /// (row, column) delta for one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}
