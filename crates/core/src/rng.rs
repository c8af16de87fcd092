//! RNG module - random tile values and spawning
//!
//! All randomness flows through a caller-owned [`rand::Rng`] that is seeded once.
//! Tests seed a [`StdRng`] for deterministic replay; live play seeds from entropy.
//!
//! A spawned tile is a `2` nine times in ten and a `4` otherwise. Its cell is chosen
//! uniformly among the empty cells before the value is drawn.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{Position, Tile, SPAWN_FOUR_ONE_IN, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE};

/// A tile placed by [`spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub position: Position,
    pub value: Tile,
}

/// Deterministic RNG for a given seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// RNG seeded from OS entropy
pub fn entropy_rng() -> StdRng {
    StdRng::from_entropy()
}

/// Draw a new tile value: 2 (90%) or 4 (10%)
pub fn tile_value<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..SPAWN_FOUR_ONE_IN) == 0 {
        SPAWN_HIGH_VALUE
    } else {
        SPAWN_LOW_VALUE
    }
}

/// Place one random tile into a uniformly chosen empty cell
///
/// On a full grid this fails with [`GridError::NoEmptyCell`] and the grid is unchanged.
///
/// ```
/// use tui_2048_core::{rng, Grid};
///
/// let mut grid = Grid::new(4).unwrap();
/// let mut rng = rng::seeded_rng(42);
/// let spawn = rng::spawn_tile(&mut grid, &mut rng).unwrap();
/// assert_eq!(grid.get(spawn.position.row, spawn.position.column), Some(spawn.value));
/// assert_eq!(grid.empty_count(), 15);
/// ```
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<Spawn, GridError> {
    let position = grid.select_random_empty_cell(rng)?;
    let value = tile_value(rng);
    grid.set(position.row, position.column, value)?;
    debug!(row = position.row, column = position.column, value, "spawned tile");
    Ok(Spawn { position, value })
}

/// Create a grid with up to `initial_tiles` random tiles
///
/// If the grid fills up before all tiles are placed, the rest are skipped.
pub fn new_game<R: Rng + ?Sized>(
    size: usize,
    initial_tiles: usize,
    rng: &mut R,
) -> Result<Grid, GridError> {
    let mut grid = Grid::new(size)?;
    for placed in 0..initial_tiles {
        match spawn_tile(&mut grid, rng) {
            Ok(_) => {}
            Err(GridError::NoEmptyCell) => {
                debug!(placed, requested = initial_tiles, "grid full before all initial tiles");
                break;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(grid)
}
