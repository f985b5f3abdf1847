//! Spawning new markers.
//!
//! The colors of the next batch are drawn one batch ahead and kept in a
//! [`SpawnQueue`] so the host can show them. Cells are picked by random
//! sampling: up to `N²` uniform draws, then a direct scan of the empty cells
//! if every draw hit a marker. Sampling is cheap on the mostly empty boards
//! of a normal game; the scan bounds the cost on a crowded one.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Grid;
use crate::core::{Color, Coord, EngineError, GameRng, MAX_COLOR_COUNT};

/// One marker placed by the spawner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Where the marker landed.
    pub coord: Coord,
    /// Its color.
    pub color: Color,
}

/// Result of one spawn batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnOutcome {
    /// Markers placed, in placement order.
    pub placed: SmallVec<[Placement; 4]>,
    /// True if the board ran out of empty cells before the batch was done.
    pub exhausted: bool,
}

/// Lookahead colors for the next spawn batch, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnQueue {
    colors: SmallVec<[Color; 4]>,
}

impl SpawnQueue {
    /// Draw `count` random colors from a palette of `color_count` colors.
    ///
    /// # Panics
    ///
    /// If `count > 0` and `color_count == 0`.
    #[must_use]
    pub fn draw(count: usize, color_count: usize, rng: &mut GameRng) -> Self {
        let mut queue = Self::default();
        queue.refill(count, color_count, rng);
        queue
    }

    /// Replace the contents with `count` freshly drawn colors.
    ///
    /// # Panics
    ///
    /// If `count > 0` and `color_count == 0`.
    pub fn refill(&mut self, count: usize, color_count: usize, rng: &mut GameRng) {
        self.colors.clear();
        self.colors
            .extend((0..count).map(|_| random_color(color_count, rng)));
    }

    /// Take the oldest color.
    pub fn pop(&mut self) -> Option<Color> {
        if self.colors.is_empty() {
            None
        } else {
            Some(self.colors.remove(0))
        }
    }

    /// Colors still queued, oldest first.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of queued colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn random_color(color_count: usize, rng: &mut GameRng) -> Color {
    // Palette size is validated to fit in a u8 index.
    Color::new(rng.gen_index(color_count) as u8)
}

/// Place up to `count` markers on empty cells, taking colors from `queue`.
///
/// If the queue runs dry a color is drawn on the spot. When every requested
/// marker was placed the queue is refilled with `count` new colors; when the
/// board filled first, `exhausted` is set and the queue is left alone.
///
/// A `color_count` outside `1..=256` is rejected with `InvalidConfig` before
/// the board is touched.
pub fn spawn(
    grid: &mut Grid,
    count: usize,
    queue: &mut SpawnQueue,
    color_count: usize,
    rng: &mut GameRng,
) -> Result<SpawnOutcome, EngineError> {
    if color_count == 0 || color_count > MAX_COLOR_COUNT {
        return Err(EngineError::InvalidConfig(format!(
            "cannot spawn from a palette of {} colors",
            color_count
        )));
    }

    let mut outcome = SpawnOutcome::default();

    for _ in 0..count {
        let Some(coord) = pick_empty_cell(grid, rng) else {
            outcome.exhausted = true;
            break;
        };
        let color = queue.pop().unwrap_or_else(|| random_color(color_count, rng));
        grid.set(coord, Some(color))?;
        trace!("spawned {} at {}", color, coord);
        outcome.placed.push(Placement { coord, color });
    }

    if outcome.exhausted {
        debug!("spawn exhausted after {} of {} markers", outcome.placed.len(), count);
    } else {
        queue.refill(count, color_count, rng);
    }

    Ok(outcome)
}

/// Uniformly random empty cell, or `None` on a full board.
fn pick_empty_cell(grid: &Grid, rng: &mut GameRng) -> Option<Coord> {
    if grid.is_full() || grid.is_empty() {
        return None;
    }

    sample_empty_cell(grid, rng, grid.len()).or_else(|| {
        warn!(
            "spawn sampling missed {} times, scanning {} empty cells",
            grid.len(),
            grid.count_empty()
        );
        scan_empty_cell(grid, rng)
    })
}

/// Up to `draws` uniform draws over the whole board; the first empty hit.
fn sample_empty_cell(grid: &Grid, rng: &mut GameRng, draws: usize) -> Option<Coord> {
    let size = grid.size();
    (0..draws).find_map(|_| {
        let index = rng.gen_index(grid.len());
        let coord = Coord::new(index / size, index % size);
        grid.is_empty_at(coord).then_some(coord)
    })
}

/// Uniform choice among the empty cells listed in row-major order.
fn scan_empty_cell(grid: &Grid, rng: &mut GameRng) -> Option<Coord> {
    let empty: Vec<_> = grid.empty_cells().collect();
    rng.choose(&empty).copied()
}
