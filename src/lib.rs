//! # color-lines
//!
//! Rules engine for "color lines" puzzle games: markers of a few colors sit
//! on a square board, the player moves one marker per turn along an open
//! path, five or more of one color in a line are cleared and scored, and
//! every move that clears nothing brings new markers. The game ends when the
//! board is full.
//!
//! ## Design Principles
//!
//! 1. **Grid is the truth**: renderers read the [`Grid`]; nothing is inferred
//!    from what is drawn.
//!
//! 2. **Owned sessions**: no global state. A host holds one [`Session`] per
//!    game and can hold as many as it likes.
//!
//! 3. **Deterministic**: all randomness comes from a seeded [`GameRng`], so a
//!    seed plus a list of inputs replays a game exactly.
//!
//! 4. **No timing**: animation delays belong to the host. The engine reports
//!    an explicit locked phase between a move and its resolution.
//!
//! ## Modules
//!
//! - `core`: coordinates, colors, configuration, RNG, errors
//! - `board`: the grid
//! - `rules`: pathfinding, run detection, spawning
//! - `engine`: the session and its turn state machine

pub mod core;
pub mod board;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Color, Coord, Direction,
    GameConfig, GameRng, GameRngState,
    EngineError, IllegalMoveReason, SelectionRejection,
};

pub use crate::board::{Cell, Grid};

pub use crate::rules::{
    find_path, reachable_cells, is_movable, PathResult,
    detect_runs, ClearSet, RUN_DIRECTIONS, RUN_LENGTH,
    spawn, Placement, SpawnOutcome, SpawnQueue,
};

pub use crate::engine::{
    new_session, Session, TurnPhase,
    SelectionOutcome, PendingMove, Resolution, MoveOutcome, SessionState,
};
