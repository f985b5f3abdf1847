//! Game rules as stateless functions over a [`Grid`](crate::board::Grid).
//!
//! - `path`: move legality (BFS over empty cells)
//! - `runs`: five-in-a-line detection
//! - `spawn`: random placement of new markers
//!
//! None of these call each other or keep state between turns; the
//! [`Session`](crate::engine::Session) sequences them.

pub mod path;
pub mod runs;
pub mod spawn;

pub use path::{find_path, is_movable, reachable_cells, PathResult};
pub use runs::{detect_runs, ClearSet, RUN_DIRECTIONS, RUN_LENGTH};
pub use spawn::{spawn, Placement, SpawnOutcome, SpawnQueue};
