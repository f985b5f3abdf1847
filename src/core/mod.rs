//! Core value types shared by every other module.
//!
//! Coordinates, colors, configuration, RNG and the engine error type.
//! Nothing here knows about turns or board contents.

pub mod coord;
pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use coord::{Coord, Direction};
pub use color::Color;
pub use config::{
    GameConfig, DEFAULT_BALL_COUNT, DEFAULT_BOARD_SIZE, DEFAULT_PALETTE, MAX_BOARD_SIZE,
    MAX_COLOR_COUNT,
};
pub use error::{EngineError, IllegalMoveReason, SelectionRejection};
pub use rng::{GameRng, GameRngState};
