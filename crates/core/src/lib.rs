//! Core grid module - pure, deterministic, and testable
//!
//! This crate owns the puzzle's data model: the square [`Grid`] of tiles, the queries
//! the game loop asks of it, and random tile spawning. It has **no dependencies** on
//! UI or I/O, making it:
//!
//! - **Deterministic**: randomness comes from a caller-owned RNG, so the same seed
//!   replays the same game
//! - **Testable**: every query is a pure read of the grid
//! - **Portable**: runs headless, in a terminal, or under a benchmark harness
//!
//! # Module Structure
//!
//! - [`grid`]: N x N tile matrix with empty-cell, adjacency and terminal queries
//! - [`rng`]: tile value draws, uniform spawning and game setup
//! - [`snapshot`]: read-only copy of a grid for renderers
//! - [`error`]: [`GridError`]
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{rng, Grid};
//!
//! let mut rng = rng::seeded_rng(12345);
//! let grid = rng::new_game(4, 2, &mut rng).unwrap();
//!
//! assert_eq!(grid.size(), 4);
//! assert_eq!(grid.empty_count(), 14);
//! assert!(!grid.is_terminal());
//! ```

pub mod error;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use error::GridError;
pub use grid::Grid;
pub use rng::{new_game, spawn_tile, Spawn};
pub use snapshot::GridSnapshot;
