//! Turn engine: the session and the values it reports.
//!
//! [`Session`] is the only entry point a host needs. It owns the grid and
//! sequences selection, move, clear and spawn.

pub mod outcome;
pub mod phase;
pub mod session;

pub use outcome::{MoveOutcome, PendingMove, Resolution, SelectionOutcome, SessionState};
pub use phase::TurnPhase;
pub use session::{new_session, Session};
