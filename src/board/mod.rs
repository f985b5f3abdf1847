//! Board storage.
//!
//! The [`Grid`] is the single source of truth for where markers are.
//! Renderers read it; only the session writes to it.

pub mod grid;

pub use grid::{Cell, Grid};
