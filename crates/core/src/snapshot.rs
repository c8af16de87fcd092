use crate::grid::Grid;
use crate::types::Tile;

/// Read-only copy of a game for renderers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub size: usize,
    /// Row-major cell values, `0` for empty.
    pub cells: Vec<Tile>,
    pub moves: u32,
    pub max_tile: Tile,
    pub terminal: bool,
}

impl GridSnapshot {
    pub fn from_grid(grid: &Grid, moves: u32) -> Self {
        Self {
            size: grid.size(),
            cells: grid.cells().to_vec(),
            moves,
            max_tile: grid.max_tile(),
            terminal: grid.is_terminal(),
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<Tile> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column).copied()
    }

    pub fn rows(&self) -> std::slice::ChunksExact<'_, Tile> {
        self.cells.chunks_exact(self.size.max(1))
    }

    pub fn playable(&self) -> bool {
        !self.terminal
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self::from_grid(grid, 0)
    }
}
