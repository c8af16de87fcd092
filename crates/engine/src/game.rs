//! Game session - one grid, its RNG, and the spawn rule
//!
//! This is the driver-facing surface: start a game, apply moves, spawn tiles, and
//! ask whether the game is over. The RNG is owned by the session and seeded once,
//! so a seed fully determines a replay.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use crate::core::{rng, Grid, GridError, GridSnapshot, Spawn};
use crate::moves::apply_move;
use crate::types::{Direction, SpawnPolicy};

/// What happened when a move was applied to a [`Game`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// The slide changed at least one cell.
    pub changed: bool,
    /// Tile placed after the slide, if the policy asked for one and a cell was free.
    pub spawned: Option<Spawn>,
    /// The grid is terminal after the move (and any spawn).
    pub terminal: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    grid: Grid,
    rng: R,
    policy: SpawnPolicy,
    /// Tiles placed on start and on restart.
    initial_tiles: usize,
    /// Number of moves that changed the grid.
    moves: u32,
    last_spawn: Option<Spawn>,
}

impl Game<StdRng> {
    /// Create a new game with the given RNG seed
    pub fn new(size: usize, initial_tiles: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(size, initial_tiles, rng::seeded_rng(seed))
    }

    /// Create a new game seeded from OS entropy
    pub fn from_entropy(size: usize, initial_tiles: usize) -> Result<Self, GridError> {
        Self::with_rng(size, initial_tiles, rng::entropy_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a new game drawing from `rng`
    pub fn with_rng(size: usize, initial_tiles: usize, mut rng: R) -> Result<Self, GridError> {
        let grid = rng::new_game(size, initial_tiles, &mut rng)?;
        debug!(size, initial_tiles, "new game");
        Ok(Self {
            grid,
            rng,
            policy: SpawnPolicy::default(),
            initial_tiles,
            moves: 0,
            last_spawn: None,
        })
    }

    /// Resume from an existing grid (no tiles are added)
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        Self {
            grid,
            rng,
            policy: SpawnPolicy::default(),
            initial_tiles: 0,
            moves: 0,
            last_spawn: None,
        }
    }

    pub fn with_policy(mut self, policy: SpawnPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Slide the grid, then spawn a tile if the policy says so
    ///
    /// A full grid simply skips the spawn.
    pub fn apply_move(&mut self, direction: Direction) -> MoveReport {
        let outcome = apply_move(&self.grid, direction);
        let changed = outcome.changed;
        self.grid = outcome.grid;

        if changed {
            self.moves += 1;
        }

        let spawned = if self.policy.should_spawn(changed) {
            match self.spawn_tile() {
                Ok(spawn) => Some(spawn),
                Err(GridError::NoEmptyCell) => {
                    debug!(direction = direction.as_str(), "no empty cell, skipping spawn");
                    None
                }
                Err(err) => {
                    warn!(%err, "spawn failed");
                    None
                }
            }
        } else {
            None
        };

        let terminal = self.grid.is_terminal();
        if terminal {
            debug!(moves = self.moves, max_tile = self.grid.max_tile(), "game over");
        }

        MoveReport {
            changed,
            spawned,
            terminal,
        }
    }

    /// Place one random tile into a uniformly chosen empty cell
    pub fn spawn_tile(&mut self) -> Result<Spawn, GridError> {
        let spawn = rng::spawn_tile(&mut self.grid, &mut self.rng)?;
        self.last_spawn = Some(spawn);
        Ok(spawn)
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.grid.is_terminal()
    }

    /// Start over with a fresh grid of the same size
    ///
    /// The RNG stream continues, so restarts are still reproducible from the seed.
    pub fn restart(&mut self) -> Result<(), GridError> {
        self.grid = rng::new_game(self.grid.size(), self.initial_tiles, &mut self.rng)?;
        self.moves = 0;
        self.last_spawn = None;
        debug!(size = self.grid.size(), "restarted");
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn policy(&self) -> SpawnPolicy {
        self.policy
    }

    pub fn last_spawn(&self) -> Option<Spawn> {
        self.last_spawn
    }

    /// Read-only copy for renderers
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(&self.grid, self.moves)
    }
}
