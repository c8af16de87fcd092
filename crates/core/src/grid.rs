//! Grid module - the square matrix of tiles
//!
//! The grid is an N x N matrix where each cell holds a tile value, `0` meaning empty.
//! Storage is a flat row-major vector: index = row * size + column.
//! Coordinates: (row, column), row 0 at the top, column 0 at the left.

use std::slice::{ChunksExact, ChunksExactMut};

use rand::Rng;

use crate::error::GridError;
use crate::types::{Position, Tile};

/// The game grid - `size` x `size` cells using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + column)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Fails with [`GridError::InvalidDimension`] for `size == 0`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidDimension { size });
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a grid from nested rows
    ///
    /// The number of rows sets the size; every row must have exactly that many cells.
    ///
    /// ```
    /// use tui_2048_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[2, 0], [0, 2]]).unwrap();
    /// assert_eq!(grid.size(), 2);
    /// assert_eq!(grid.get(1, 1), Some(2));
    ///
    /// assert!(Grid::from_rows(&[vec![2, 0], vec![0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::InvalidDimension { size });
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::InvalidDimension { size: row.len() });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.size || column >= self.size {
            return None;
        }
        Some(row * self.size + column)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell value at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Tile> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// Set cell value at (row, column)
    ///
    /// Out-of-range coordinates fail with [`GridError::OutOfBounds`] and leave the
    /// grid untouched.
    pub fn set(&mut self, row: usize, column: usize, value: Tile) -> Result<(), GridError> {
        let idx = self.index(row, column).ok_or(GridError::OutOfBounds {
            row,
            column,
            size: self.size,
        })?;
        self.cells[idx] = value;
        Ok(())
    }

    /// A single row as a slice
    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, Tile> {
        self.cells.chunks_exact(self.size)
    }

    /// Iterate over mutable rows, top to bottom
    ///
    /// Row slices cannot change length, so the dimension invariant holds.
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, Tile> {
        self.cells.chunks_exact_mut(self.size)
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Mutable access to the flat cells, row-major
    pub fn cells_mut(&mut self) -> &mut [Tile] {
        &mut self.cells
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// All empty cell positions in row-major scan order
    pub fn empty_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, value)| **value == 0)
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Check if any cell is empty
    pub fn has_empty_cells(&self) -> bool {
        self.cells.iter().any(|&value| value == 0)
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    /// Largest tile on the grid (0 for an empty grid)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Pick an empty cell uniformly at random
    ///
    /// Every currently empty cell is equally likely, independent of earlier calls.
    pub fn select_random_empty_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Position, GridError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(GridError::NoEmptyCell);
        }
        Ok(empty[rng.gen_range(0..empty.len())])
    }

    /// Check if two neighbouring cells in a row or a column hold the same value
    ///
    /// Empty cells count too; callers that care check for empties first.
    pub fn has_adjacent_pair(&self) -> bool {
        let horizontal = self
            .rows()
            .any(|row| row.windows(2).any(|pair| pair[0] == pair[1]));
        if horizontal {
            return true;
        }

        // Compare each row with the one below it.
        self.cells
            .chunks_exact(self.size)
            .zip(self.cells.chunks_exact(self.size).skip(1))
            .any(|(upper, lower)| upper.iter().zip(lower).any(|(a, b)| a == b))
    }

    /// Check if the game is over: full grid and no merge possible in either axis
    pub fn is_terminal(&self) -> bool {
        !self.has_empty_cells() && !self.has_adjacent_pair()
    }

    /// Transpose in place: cell (r, c) swaps with (c, r)
    ///
    /// Applying it twice restores the original grid.
    pub fn transpose(&mut self) {
        let n = self.size;
        for row in 0..n {
            for column in (row + 1)..n {
                self.cells.swap(row * n + column, column * n + row);
            }
        }
    }

    /// Reverse every row in place
    ///
    /// Applying it twice restores the original grid.
    pub fn reverse_rows(&mut self) {
        for row in self.rows_mut() {
            row.reverse();
        }
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}
