//! Move engine - slide and merge tiles in four directions
//!
//! All four directions share one line-reduction primitive. Each direction is
//! expressed as a small table of self-inverse grid transforms that make it look like
//! a leftward slide:
//!
//! | Direction | Before reduction | After reduction |
//! |-----------|------------------|-----------------|
//! | Left | - | - |
//! | Right | reverse rows | reverse rows |
//! | Up | transpose | transpose |
//! | Down | transpose, reverse rows | reverse rows, transpose |
//!
//! # Module Structure
//!
//! - [`line`]: compact / merge / reduce on a single line
//! - [`orient`]: direction -> transform table
//! - [`moves`]: [`apply_move`] and [`legal_moves`]
//! - [`game`]: [`Game`] session driving new-game, spawn and terminal checks
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Grid;
//! use tui_2048_engine::apply_move;
//! use tui_2048_types::Direction;
//!
//! let grid = Grid::from_rows(&[
//!     [2, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])
//! .unwrap();
//!
//! let outcome = apply_move(&grid, Direction::Left);
//! assert!(outcome.changed);
//! assert_eq!(outcome.grid.row(0), Some(&[4, 0, 0, 0][..]));
//! ```
//!
//! With the `parallel` feature rows are reduced on rayon's thread pool; results are
//! identical to the sequential path.

pub mod game;
pub mod line;
pub mod moves;
pub mod orient;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use game::{Game, MoveReport};
pub use moves::{apply_move, can_move, legal_moves, MoveOutcome};
