//! Values the session hands back to its host.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::TurnPhase;
use crate::board::Grid;
use crate::core::{Color, Coord};
use crate::rules::Placement;

/// Result of an accepted `select`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionOutcome {
    /// The marker at this cell is now selected.
    Selected(Coord),
    /// The marker at this cell was selected and no longer is.
    Deselected(Coord),
}

/// A move that has been applied but not yet resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    /// Route the marker took, start to end inclusive.
    pub path: Vec<Coord>,
}

/// What happened after a move: clearing or spawning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Cleared cells, row-major.
    pub cleared: Vec<Coord>,
    /// Score gained (one per cleared cell).
    pub score_delta: u64,
    /// Markers spawned. Empty whenever something was cleared.
    pub spawned: SmallVec<[Placement; 4]>,
    /// True if the spawner ran out of room.
    pub exhausted: bool,
    /// True if the game is now over.
    pub terminal: bool,
}

/// Complete result of a `target` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// True if the marker moved.
    pub moved: bool,
    /// Route taken, start to end inclusive.
    pub path: Vec<Coord>,
    /// Cleared cells, row-major.
    pub cleared: Vec<Coord>,
    /// Score gained.
    pub score_delta: u64,
    /// Markers spawned.
    pub spawned: SmallVec<[Placement; 4]>,
    /// True if the spawner ran out of room.
    pub exhausted: bool,
    /// True if the game is now over.
    pub terminal: bool,
}

impl MoveOutcome {
    /// Combine a move with its resolution.
    #[must_use]
    pub fn new(pending: PendingMove, resolution: Resolution) -> Self {
        Self {
            moved: true,
            path: pending.path,
            cleared: resolution.cleared,
            score_delta: resolution.score_delta,
            spawned: resolution.spawned,
            exhausted: resolution.exhausted,
            terminal: resolution.terminal,
        }
    }
}

/// Read-only view of a session for rendering.
///
/// The grid is a persistent-vector clone, so taking a snapshot is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current score.
    pub score: u64,
    /// True once the board is full.
    pub terminal: bool,
    /// Current phase, including the selection.
    pub phase: TurnPhase,
    /// Completed moves.
    pub moves: u32,
    /// Colors of the next spawn batch.
    pub next_colors: Vec<Color>,
    /// Board contents.
    pub grid: Grid,
}
