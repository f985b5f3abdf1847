//! Engine error types.
//!
//! Every error is recoverable: a rejected call leaves the session as it was,
//! except [`EngineError::IllegalMove`] which also drops the current selection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;

/// Why a selection was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionRejection {
    /// No marker on the cell.
    Empty,
    /// The marker has no empty orthogonal neighbor.
    Immovable,
}

impl std::fmt::Display for SelectionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionRejection::Empty => write!(f, "cell is empty"),
            SelectionRejection::Immovable => write!(f, "marker is boxed in"),
        }
    }
}

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// `target` was called with nothing selected.
    NoSelection,
    /// No open corridor connects the selected marker to the destination.
    Unreachable {
        /// Selected marker.
        from: Coord,
        /// Requested destination.
        to: Coord,
    },
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMoveReason::NoSelection => write!(f, "no marker selected"),
            IllegalMoveReason::Unreachable { from, to } => write!(f, "no path from {} to {}", from, to),
        }
    }
}

/// Errors reported by the grid and the session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Coordinate outside `[0, size)` on either axis.
    #[error("coordinate {coord} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Offending coordinate.
        coord: Coord,
        /// Board side length.
        size: usize,
    },

    /// Selection refused; state unchanged.
    #[error("cannot select {coord}: {reason}")]
    InvalidSelection {
        /// Requested cell.
        coord: Coord,
        /// Reason for refusal.
        reason: SelectionRejection,
    },

    /// Move refused; the selection has been cleared.
    #[error("illegal move: {0}")]
    IllegalMove(IllegalMoveReason),

    /// The board is full and the game is over.
    #[error("session is over")]
    SessionTerminal,

    /// A move is waiting for `resolve()`; input is locked until then.
    #[error("a move is being resolved")]
    InputLocked,

    /// `resolve()` was called with no move pending.
    #[error("no move is waiting to be resolved")]
    NotResolving,

    /// A grid move targeted an occupied destination.
    #[error("cell {0} is occupied")]
    CellOccupied(Coord),

    /// A grid move started from an empty cell.
    #[error("cell {0} is empty")]
    CellEmpty(Coord),

    /// The game configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A serialized grid does not describe a square board.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}
