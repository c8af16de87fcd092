//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! from the engine, the input layer and the renderers alike.
//!
//! # Grid Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_SIZE` | 4 | Side length of a standard game |
//! | `DEFAULT_INITIAL_TILES` | 4 | Tiles placed when a game starts |
//! | `MAX_GRID_SIZE` | 16 | Largest side length accepted from configuration |
//!
//! # Tile Spawning
//!
//! A spawned tile is a `4` one time in `SPAWN_FOUR_ONE_IN` (10%), otherwise a `2`.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, SpawnPolicy, DEFAULT_GRID_SIZE};
//!
//! // Parse from string (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.as_str(), "left");
//!
//! // Spawn policy defaults to spawning only after a changing move
//! assert_eq!(SpawnPolicy::default(), SpawnPolicy::OnChange);
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Default grid side length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Number of tiles placed on a fresh grid
pub const DEFAULT_INITIAL_TILES: usize = 4;

/// Largest grid side length accepted from configuration
pub const MAX_GRID_SIZE: usize = 16;

/// A spawned tile is a 4 one time in this many draws, otherwise a 2
pub const SPAWN_FOUR_ONE_IN: u32 = 10;

/// Value of a common spawned tile
pub const SPAWN_LOW_VALUE: Tile = 2;

/// Value of a rare spawned tile
pub const SPAWN_HIGH_VALUE: Tile = 4;

/// A tile value on the grid
///
/// `0` is an empty cell; any positive value is a tile of that numeric value.
/// Valid play only ever produces powers of two, but nothing enforces it.
pub type Tile = u32;

/// A cell coordinate on the grid
///
/// Both `row` and `column` are in `[0, size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The four directions tiles can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in a fixed order
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("left"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for `Left` and `Right`
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// When a new tile is spawned after a move
///
/// - **OnChange**: only when the move changed at least one cell (standard 2048)
/// - **Always**: after every accepted move, even a no-op one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpawnPolicy {
    #[default]
    OnChange,
    Always,
}

impl SpawnPolicy {
    /// Parse spawn policy from string
    ///
    /// Accepts `"on-change"` / `"onchange"` and `"always"` (case-insensitive).
    ///
    /// ```
    /// use tui_2048_types::SpawnPolicy;
    ///
    /// assert_eq!(SpawnPolicy::from_str("always"), Some(SpawnPolicy::Always));
    /// assert_eq!(SpawnPolicy::from_str("On-Change"), Some(SpawnPolicy::OnChange));
    /// assert_eq!(SpawnPolicy::from_str("never"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "on-change" | "onchange" | "on_change" => Some(SpawnPolicy::OnChange),
            "always" => Some(SpawnPolicy::Always),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpawnPolicy::OnChange => "on-change",
            SpawnPolicy::Always => "always",
        }
    }

    /// Whether a tile should be spawned after a move with the given outcome
    pub fn should_spawn(&self, changed: bool) -> bool {
        match self {
            SpawnPolicy::OnChange => changed,
            SpawnPolicy::Always => true,
        }
    }
}

/// Player intents produced by the input layer
///
/// Quitting is handled by the front-end directly and never reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Throw away the current grid and start over
    Restart,
}
