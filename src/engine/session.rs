//! The turn engine.
//!
//! A [`Session`] owns one game: the grid, the lookahead queue, the score and
//! the RNG. Hosts drive it with two kinds of input, `select` on a marker and
//! `target` on a destination, and read everything back through
//! [`Session::state`].
//!
//! ## Input lock
//!
//! A move is applied in two steps so hosts can animate it:
//! [`Session::begin_move`] moves the marker and enters
//! [`TurnPhase::Resolving`], during which every input is refused with
//! [`EngineError::InputLocked`]; [`Session::resolve`] then clears runs or
//! spawns and unlocks. [`Session::target`] does both in one call. The engine
//! never sleeps; how long the lock lasts is up to the host.
//!
//! ## Example
//!
//! ```
//! use color_lines::core::{Color, Coord};
//! use color_lines::engine::{new_session, SelectionOutcome};
//!
//! let mut session = new_session(9, 7, 3, 42).unwrap();
//! session.place(Coord::new(4, 4), Some(Color::new(0))).unwrap();
//!
//! assert_eq!(session.select(Coord::new(4, 4)), Ok(SelectionOutcome::Selected(Coord::new(4, 4))));
//! let outcome = session.target(Coord::new(4, 5)).unwrap();
//! assert!(outcome.moved);
//! assert_eq!(outcome.spawned.len(), 3);
//! ```

use log::debug;

use super::outcome::{MoveOutcome, PendingMove, Resolution, SelectionOutcome, SessionState};
use super::phase::TurnPhase;
use crate::board::Grid;
use crate::core::{
    Color, Coord, EngineError, GameConfig, GameRng, GameRngState, IllegalMoveReason, SelectionRejection,
};
use crate::rules::{self, runs, PathResult, SpawnOutcome, SpawnQueue};

/// Create a session with an empty `size` x `size` board.
///
/// `colors` picks the first colors of the reference palette and
/// `ball_count` is the spawn batch size, which must be below `size²`.
pub fn new_session(size: usize, colors: usize, ball_count: usize, seed: u64) -> Result<Session, EngineError> {
    let config = GameConfig::new()
        .with_board_size(size)
        .with_color_count(colors)
        .with_ball_count(ball_count);
    Session::new(config, seed)
}

/// One game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    grid: Grid,
    phase: TurnPhase,
    queue: SpawnQueue,
    score: u64,
    moves: u32,
    rng: GameRng,
}

impl Session {
    /// Create a session with a seeded RNG and an empty board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a session seeded from the OS.
    pub fn from_entropy(config: GameConfig) -> Result<Self, EngineError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create a session around an existing RNG, e.g. one restored with
    /// [`GameRng::from_state`].
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self, EngineError> {
        config.validate()?;
        let queue = SpawnQueue::draw(config.ball_count, config.color_count(), &mut rng);
        debug!(
            "new session: {}x{} board, {} colors, {} per spawn, seed {}",
            config.board_size,
            config.board_size,
            config.color_count(),
            config.ball_count,
            rng.seed()
        );

        Ok(Self {
            grid: Grid::new(config.board_size),
            config,
            phase: TurnPhase::Idle,
            queue,
            score: 0,
            moves: 0,
            rng,
        })
    }

    // === Accessors ===

    /// Configuration this session was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Selected marker, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Coord> {
        self.phase.selection()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Completed moves.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// True once the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// True while a move waits for [`resolve`](Self::resolve). Hosts must
    /// hold back input while this is set.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Colors of the next spawn batch, in placement order.
    #[must_use]
    pub fn peek_next_colors(&self) -> &[Color] {
        self.queue.colors()
    }

    /// RNG position, for reproducing the session's future spawns.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Snapshot for rendering. Two calls with no input in between are equal.
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            score: self.score,
            terminal: self.is_terminal(),
            phase: self.phase,
            moves: self.moves,
            next_colors: self.queue.colors().to_vec(),
            grid: self.grid.clone(),
        }
    }

    // === Queries ===

    /// Route the marker at `from` would take to `to`. Does not change anything.
    pub fn preview_path(&self, from: Coord, to: Coord) -> Result<PathResult, EngineError> {
        self.grid.check_bounds(from)?;
        self.grid.check_bounds(to)?;
        Ok(rules::find_path(&self.grid, from, to))
    }

    /// Every empty cell the marker at `from` can reach. Empty for an empty cell.
    pub fn reachable_cells(&self, from: Coord) -> Result<Vec<Coord>, EngineError> {
        if self.grid.get(from)?.is_empty() {
            return Ok(Vec::new());
        }
        Ok(rules::reachable_cells(&self.grid, from))
    }

    /// Markers a `select` would accept, row-major.
    #[must_use]
    pub fn movable_markers(&self) -> Vec<Coord> {
        self.grid
            .occupied_cells()
            .map(|(coord, _)| coord)
            .filter(|&coord| rules::is_movable(&self.grid, coord))
            .collect()
    }

    // === Input ===

    fn check_input(&self) -> Result<(), EngineError> {
        match self.phase {
            TurnPhase::Terminal => Err(EngineError::SessionTerminal),
            TurnPhase::Resolving { .. } => Err(EngineError::InputLocked),
            _ => Ok(()),
        }
    }

    /// Select the marker at `coord`, or deselect it if it is already selected.
    ///
    /// A refused selection leaves the current one in place.
    pub fn select(&mut self, coord: Coord) -> Result<SelectionOutcome, EngineError> {
        self.check_input()?;
        self.grid.check_bounds(coord)?;

        if self.selection() == Some(coord) {
            self.phase = TurnPhase::Idle;
            debug!("deselected {}", coord);
            return Ok(SelectionOutcome::Deselected(coord));
        }

        if self.grid.color_at(coord).is_none() {
            return Err(EngineError::InvalidSelection { coord, reason: SelectionRejection::Empty });
        }
        if !rules::is_movable(&self.grid, coord) {
            return Err(EngineError::InvalidSelection { coord, reason: SelectionRejection::Immovable });
        }

        self.phase = TurnPhase::Selected(coord);
        debug!("selected {}", coord);
        Ok(SelectionOutcome::Selected(coord))
    }

    /// Move the selected marker to `coord` and lock input until
    /// [`resolve`](Self::resolve).
    ///
    /// With nothing selected, or no open route, the move is refused with
    /// [`EngineError::IllegalMove`] and the selection is dropped. Targeting the
    /// selected cell itself is a legal zero-length move.
    pub fn begin_move(&mut self, coord: Coord) -> Result<PendingMove, EngineError> {
        self.check_input()?;
        self.grid.check_bounds(coord)?;

        let Some(from) = self.selection() else {
            return Err(EngineError::IllegalMove(IllegalMoveReason::NoSelection));
        };

        let route = rules::find_path(&self.grid, from, coord);
        if !route.found {
            self.phase = TurnPhase::Idle;
            debug!("no route {} -> {}, selection dropped", from, coord);
            return Err(EngineError::IllegalMove(IllegalMoveReason::Unreachable { from, to: coord }));
        }

        self.grid.move_marker(from, coord)?;
        self.phase = TurnPhase::Resolving { from, to: coord };
        debug!("moved {} -> {} in {} steps", from, coord, route.steps());
        Ok(PendingMove { path: route.path })
    }

    /// Finish a move: clear runs and score them, or spawn if nothing cleared.
    pub fn resolve(&mut self) -> Result<Resolution, EngineError> {
        match self.phase {
            TurnPhase::Resolving { .. } => {}
            TurnPhase::Terminal => return Err(EngineError::SessionTerminal),
            _ => return Err(EngineError::NotResolving),
        }

        self.moves += 1;
        let mut resolution = Resolution::default();
        let found = rules::detect_runs(&self.grid);

        if found.is_empty() {
            let outcome = rules::spawn(
                &mut self.grid,
                self.config.ball_count,
                &mut self.queue,
                self.config.color_count(),
                &mut self.rng,
            )?;
            debug!("no runs, spawned {} markers", outcome.placed.len());
            resolution.spawned = outcome.placed;
            resolution.exhausted = outcome.exhausted;
        } else {
            let cleared = runs::sorted(&found);
            let removed = self.grid.clear_cells(&cleared)? as u64;
            self.score += removed;
            debug!("cleared {} cells, score {}", removed, self.score);
            resolution.cleared = cleared;
            resolution.score_delta = removed;
        }

        resolution.terminal = self.settle();
        Ok(resolution)
    }

    /// Move and resolve in one call: [`begin_move`](Self::begin_move) then
    /// [`resolve`](Self::resolve).
    pub fn target(&mut self, coord: Coord) -> Result<MoveOutcome, EngineError> {
        let pending = self.begin_move(coord)?;
        let resolution = self.resolve()?;
        Ok(MoveOutcome::new(pending, resolution))
    }

    /// Put a marker on (or remove one from) a cell directly, outside the turn
    /// cycle. Used to set up positions.
    ///
    /// Touching the selected cell drops the selection.
    pub fn place(&mut self, coord: Coord, color: Option<Color>) -> Result<(), EngineError> {
        self.check_input()?;
        self.grid.check_bounds(coord)?;
        if let Some(color) = color {
            if self.config.color_name(color).is_none() {
                return Err(EngineError::InvalidConfig(format!("{} is not in the palette", color)));
            }
        }

        if self.selection() == Some(coord) {
            self.phase = TurnPhase::Idle;
        }
        self.grid.set(coord, color)?;
        self.settle();
        Ok(())
    }

    /// Spawn one batch outside a turn, as at the start of a game.
    pub fn spawn_opening(&mut self) -> Result<SpawnOutcome, EngineError> {
        self.check_input()?;
        let outcome = rules::spawn(
            &mut self.grid,
            self.config.ball_count,
            &mut self.queue,
            self.config.color_count(),
            &mut self.rng,
        )?;
        debug!("opening spawn placed {} markers", outcome.placed.len());
        self.settle();
        Ok(outcome)
    }

    /// Leave `Resolving`, entering `Terminal` if the board is full.
    /// Returns true if the game is over.
    fn settle(&mut self) -> bool {
        if self.grid.is_full() {
            if !self.phase.is_terminal() {
                debug!("board full, game over with score {}", self.score);
            }
            self.phase = TurnPhase::Terminal;
            return true;
        }
        if self.phase.is_locked() {
            self.phase = TurnPhase::Idle;
        }
        false
    }
}
