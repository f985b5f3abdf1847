//! Move legality: breadth-first search over empty cells.
//!
//! The moving marker's own cell is the search root even though it is
//! occupied. Every other cell on a route must be empty, including the
//! destination. Neighbors are expanded in [`Direction::ALL`] order
//! (down, up, right, left), and a cell keeps the predecessor that discovered
//! it first, so among equally short routes the result is always the same.

use std::collections::VecDeque;

use log::trace;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{Coord, Direction};

/// Outcome of a path query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    /// Cells from start to end inclusive; empty when `found` is false.
    pub path: Vec<Coord>,
    /// True if the end is reachable.
    pub found: bool,
}

impl PathResult {
    /// A query with no route.
    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Number of steps the marker takes (cells minus one).
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Find one shortest route for the marker at `start` to the empty cell `end`.
///
/// `start == end` counts as a route of a single cell. Off-board endpoints
/// never have a route.
#[must_use]
pub fn find_path(grid: &Grid, start: Coord, end: Coord) -> PathResult {
    if !grid.is_within_bounds(start) || !grid.is_within_bounds(end) {
        return PathResult::not_found();
    }
    if start == end {
        return PathResult { path: vec![start], found: true };
    }
    if !grid.is_empty_at(end) {
        return PathResult::not_found();
    }

    let size = grid.size();
    let index = |c: Coord| c.row * size + c.col;
    let mut came_from: Vec<Option<Coord>> = vec![None; grid.len()];
    let mut visited = vec![false; grid.len()];
    let mut queue = VecDeque::new();

    visited[index(start)] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in Direction::ALL.iter().filter_map(|&d| current.step(d)) {
            if !grid.is_empty_at(next) || visited[index(next)] {
                continue;
            }
            visited[index(next)] = true;
            came_from[index(next)] = Some(current);

            if next == end {
                let path = rebuild(&came_from, index, start, end);
                trace!("path {} -> {}: {} steps", start, end, path.len() - 1);
                return PathResult { path, found: true };
            }
            queue.push_back(next);
        }
    }

    trace!("path {} -> {}: unreachable", start, end);
    PathResult::not_found()
}

fn rebuild(came_from: &[Option<Coord>], index: impl Fn(Coord) -> usize, start: Coord, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match came_from[index(current)] {
            Some(prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Every empty cell the marker at `start` could move to, in row-major order.
///
/// Used by hosts to highlight legal destinations.
#[must_use]
pub fn reachable_cells(grid: &Grid, start: Coord) -> Vec<Coord> {
    if !grid.is_within_bounds(start) {
        return Vec::new();
    }

    let mut seen = FxHashSet::default();
    let mut stack = vec![start];
    seen.insert(start);

    while let Some(current) = stack.pop() {
        for next in current.neighbors() {
            if grid.is_empty_at(next) && seen.insert(next) {
                stack.push(next);
            }
        }
    }

    seen.remove(&start);
    let mut cells: Vec<_> = seen.into_iter().collect();
    cells.sort_unstable();
    cells
}

/// True if the marker at `coord` has at least one empty orthogonal neighbor.
///
/// Empty or off-board cells are never movable.
#[must_use]
pub fn is_movable(grid: &Grid, coord: Coord) -> bool {
    grid.color_at(coord).is_some() && coord.neighbors().any(|n| grid.is_empty_at(n))
}
