//! Turn phases.

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// Where a session is in its turn cycle.
///
/// ```text
/// Idle --select--> Selected --target (path found)--> Resolving --resolve--> Idle
///  ^                  |                                              \
///  +---deselect/------+                                               +--> Terminal
///      illegal move
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected; waiting for a selection.
    #[default]
    Idle,
    /// A movable marker is selected.
    Selected(Coord),
    /// A move was applied; clearing and spawning are pending. Input is locked.
    Resolving {
        /// Cell the marker left.
        from: Coord,
        /// Cell the marker now occupies.
        to: Coord,
    },
    /// The board is full. No further input is accepted.
    Terminal,
}

impl TurnPhase {
    /// Selected marker, if any.
    #[must_use]
    pub fn selection(self) -> Option<Coord> {
        match self {
            TurnPhase::Selected(coord) => Some(coord),
            _ => None,
        }
    }

    /// True while a move waits for resolution.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, TurnPhase::Resolving { .. })
    }

    /// True once the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == TurnPhase::Terminal
    }

    /// Short name for logs and host display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TurnPhase::Idle => "idle",
            TurnPhase::Selected(_) => "selected",
            TurnPhase::Resolving { .. } => "resolving",
            TurnPhase::Terminal => "terminal",
        }
    }
}
