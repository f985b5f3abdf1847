//! The board: an N x N store of colored markers.
//!
//! Cells are kept row-major in an `im::Vector`, so cloning a grid for a
//! snapshot is O(1) and later mutations only copy the touched chunk.
//!
//! ## Bounds
//!
//! Every operation that takes a coordinate and can fail rejects coordinates
//! outside `[0, size)` with [`EngineError::OutOfBounds`] and leaves the grid
//! untouched. The lookups [`Grid::color_at`] and [`Grid::is_empty_at`] instead
//! answer "no marker" and "not empty" for such coordinates, which is what the
//! scanners want when they walk off an edge.
//!
//! Deserialization checks that the cell list matches the side length and
//! recounts the occupied cells rather than trusting the stored count.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Color, Coord, EngineError};

/// One board position. Occupied exactly when it holds a color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    color: Option<Color>,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell { color: None };

    /// A cell holding a marker of `color`.
    #[must_use]
    pub const fn occupied(color: Color) -> Self {
        Self { color: Some(color) }
    }

    /// Marker color, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        self.color
    }

    /// True if a marker sits here.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        self.color.is_some()
    }

    /// True if no marker sits here.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.color.is_none()
    }
}

impl From<Option<Color>> for Cell {
    fn from(color: Option<Color>) -> Self {
        Self { color }
    }
}

/// Square board of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    size: usize,
    cells: Vector<Cell>,
    occupied: usize,
}

/// Wire form of a [`Grid`]; any stored occupied count is ignored.
#[derive(Deserialize)]
struct GridRepr {
    size: usize,
    cells: Vector<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = EngineError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let expected = repr
            .size
            .checked_mul(repr.size)
            .ok_or_else(|| EngineError::InvalidGrid(format!("side length {} is too large", repr.size)))?;
        if repr.cells.len() != expected {
            return Err(EngineError::InvalidGrid(format!(
                "{} cells for a {}x{} board",
                repr.cells.len(),
                repr.size,
                repr.size
            )));
        }
        let occupied = repr.cells.iter().filter(|cell| cell.is_occupied()).count();
        Ok(Self { size: repr.size, cells: repr.cells, occupied })
    }
}

impl Grid {
    /// Create an empty `size` x `size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: std::iter::repeat(Cell::EMPTY).take(size * size).collect(),
            occupied: 0,
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a zero-sized board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True if `coord` lies on the board.
    #[must_use]
    pub fn is_within_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Fail with `OutOfBounds` unless `coord` lies on the board.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), EngineError> {
        if self.is_within_bounds(coord) {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds { coord, size: self.size })
        }
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    /// Read one cell.
    pub fn get(&self, coord: Coord) -> Result<Cell, EngineError> {
        self.check_bounds(coord)?;
        Ok(self.cells[self.index(coord)])
    }

    /// Write one cell, returning the color it held before.
    pub fn set(&mut self, coord: Coord, color: Option<Color>) -> Result<Option<Color>, EngineError> {
        self.check_bounds(coord)?;
        let index = self.index(coord);
        let previous = self.cells[index].color();
        match (previous.is_some(), color.is_some()) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _ => {}
        }
        self.cells.set(index, Cell::from(color));
        Ok(previous)
    }

    /// Move the marker at `from` to the empty cell `to`.
    ///
    /// `from == to` succeeds without touching the board.
    pub fn move_marker(&mut self, from: Coord, to: Coord) -> Result<Color, EngineError> {
        let source = self.get(from)?;
        let destination = self.get(to)?;
        let color = source.color().ok_or(EngineError::CellEmpty(from))?;
        if from == to {
            return Ok(color);
        }
        if destination.is_occupied() {
            return Err(EngineError::CellOccupied(to));
        }
        self.set(from, None)?;
        self.set(to, Some(color))?;
        Ok(color)
    }

    /// Color at `coord`; `None` if empty or off the board.
    #[must_use]
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        if !self.is_within_bounds(coord) {
            return None;
        }
        self.cells[self.index(coord)].color()
    }

    /// True if `coord` is on the board and empty.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.is_within_bounds(coord) && self.cells[self.index(coord)].is_empty()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.len() - self.occupied
    }

    /// Number of cells holding a marker.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.occupied
    }

    /// True once no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(move |i| self.coord_of(i))
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| self.coord_of(i))
    }

    /// Occupied coordinates and their colors in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.color().map(|c| (self.coord_of(i), c)))
    }

    /// Empty every cell in `coords`, returning how many markers were removed.
    ///
    /// Off-board coordinates are rejected before anything is cleared.
    pub fn clear_cells<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord> + Clone) -> Result<usize, EngineError> {
        for coord in coords.clone() {
            self.check_bounds(*coord)?;
        }
        let mut removed = 0;
        for coord in coords {
            if self.set(*coord, None)?.is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.color_at(Coord::new(row, col)) {
                    Some(color) => write!(f, "{:>3}", color.0)?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
