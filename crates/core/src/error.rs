//! Errors raised by grid construction, mutation and spawning.

use thiserror::Error;

/// Failure of a grid operation.
///
/// A failed operation never mutates the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grid side length must be positive and rows must form a square.
    #[error("invalid grid dimension: {size}")]
    InvalidDimension { size: usize },
    /// A spawn was requested on a full grid.
    #[error("no empty cell")]
    NoEmptyCell,
    #[error("cell ({row}, {column}) is outside a {size}x{size} grid")]
    OutOfBounds {
        row: usize,
        column: usize,
        size: usize,
    },
}
