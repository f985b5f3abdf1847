//! Run detection.
//!
//! A run is five same-colored markers in a line. The detector tries a
//! window of exactly [`RUN_LENGTH`] cells from every occupied cell in each of
//! four directions. Runs longer than five are covered because every offset
//! along them starts its own qualifying window; the windows overlap and the
//! result set removes the duplicates.

use rustc_hash::FxHashSet;

use crate::board::Grid;
use crate::core::Coord;

/// Markers in a line needed to clear.
pub const RUN_LENGTH: usize = 5;

/// Scan directions as (row, column) steps: horizontal, vertical,
/// diagonal down-right, diagonal down-left.
pub const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Cells to clear after a move.
pub type ClearSet = FxHashSet<Coord>;

/// Collect every cell that belongs to a run. Does not modify the grid.
#[must_use]
pub fn detect_runs(grid: &Grid) -> ClearSet {
    let mut to_clear = ClearSet::default();

    for (start, color) in grid.occupied_cells() {
        for &(d_row, d_col) in &RUN_DIRECTIONS {
            if let Some(window) = window_from(start, d_row, d_col) {
                if window.iter().all(|&c| grid.color_at(c) == Some(color)) {
                    to_clear.extend(window);
                }
            }
        }
    }

    to_clear
}

/// The `RUN_LENGTH` coordinates starting at `start`, or `None` if the window
/// leaves the non-negative quadrant. The far edge is left to `color_at`.
fn window_from(start: Coord, d_row: isize, d_col: isize) -> Option<[Coord; RUN_LENGTH]> {
    let mut window = [start; RUN_LENGTH];
    for (step, slot) in window.iter_mut().enumerate().skip(1) {
        *slot = start.offset(d_row * step as isize, d_col * step as isize)?;
    }
    Some(window)
}

/// Clear set as a row-major sorted list, for stable reporting.
#[must_use]
pub fn sorted(set: &ClearSet) -> Vec<Coord> {
    let mut cells: Vec<_> = set.iter().copied().collect();
    cells.sort_unstable();
    cells
}
