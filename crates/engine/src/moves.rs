//! Move application: orient, reduce every row, restore, compare.

use arrayvec::ArrayVec;
use tracing::trace;

use crate::core::Grid;
use crate::line;
use crate::orient::{orient, restore};
use crate::types::Direction;

/// Result of sliding a grid in one direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True iff some cell of `grid` differs from the grid the move started from.
    pub changed: bool,
    /// Number of tile merges performed.
    pub merges: usize,
}

/// Slide every tile of `grid` toward `direction`
///
/// The input grid is not modified. `changed` comes from comparing every cell of the
/// result with the input, not from counting operations.
///
/// ```
/// use tui_2048_core::Grid;
/// use tui_2048_engine::apply_move;
/// use tui_2048_types::Direction;
///
/// let grid = Grid::from_rows(&[[2, 2], [0, 4]]).unwrap();
/// let outcome = apply_move(&grid, Direction::Left);
/// assert!(outcome.changed);
/// assert_eq!(outcome.grid.to_rows(), vec![vec![4, 0], vec![4, 0]]);
/// ```
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = grid.clone();
    orient(&mut next, direction);
    let merges = reduce_rows(&mut next);
    restore(&mut next, direction);

    let changed = next != *grid;
    trace!(direction = direction.as_str(), changed, merges, "applied move");

    MoveOutcome {
        grid: next,
        changed,
        merges,
    }
}

/// Check whether sliding toward `direction` would change the grid
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).changed
}

/// Directions that change the grid, in [`Direction::ALL`] order
///
/// Empty exactly when the grid is terminal.
pub fn legal_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(grid, direction))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn reduce_rows(grid: &mut Grid) -> usize {
    grid.rows_mut().map(line::reduce).sum()
}

// Rows are independent, so the result matches the sequential path.
#[cfg(feature = "parallel")]
fn reduce_rows(grid: &mut Grid) -> usize {
    use rayon::prelude::*;

    let size = grid.size();
    grid.cells_mut().par_chunks_mut(size).map(line::reduce).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[[u32; 4]]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_right_slides_toward_last_column() {
        let g = grid(&[[2, 2, 0, 0], [0, 0, 0, 0], [4, 0, 4, 8], [0, 0, 0, 0]]);
        let out = apply_move(&g, Direction::Right);
        assert!(out.changed);
        assert_eq!(out.grid.row(0), Some(&[0, 0, 0, 4][..]));
        assert_eq!(out.grid.row(2), Some(&[0, 0, 8, 8][..]));
        assert_eq!(out.merges, 2);
    }

    #[test]
    fn test_down_slides_toward_last_row() {
        let g = grid(&[[2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0]]);
        let out = apply_move(&g, Direction::Down);
        assert!(out.changed);
        let column: Vec<u32> = (0..4).map(|r| out.grid.get(r, 0).unwrap()).collect();
        assert_eq!(column, vec![0, 0, 4, 4]);
    }

    #[test]
    fn test_right_merges_from_the_right_edge() {
        // Sliding right, the two rightmost 2s merge first.
        let g = grid(&[[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]]);
        let out = apply_move(&g, Direction::Right);
        assert_eq!(out.grid.row(0), Some(&[0, 0, 2, 4][..]));
    }

    #[test]
    fn test_input_grid_untouched() {
        let g = grid(&[[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let before = g.clone();
        let _ = apply_move(&g, Direction::Left);
        assert_eq!(g, before);
    }

    #[test]
    fn test_unchanged_move_reports_false() {
        let g = grid(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let out = apply_move(&g, Direction::Left);
        assert!(!out.changed);
        assert_eq!(out.grid, g);
        assert_eq!(out.merges, 0);
    }

    #[test]
    fn test_legal_moves_in_corner() {
        let g = grid(&[[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let legal = legal_moves(&g);
        assert_eq!(legal.as_slice(), &[Direction::Right, Direction::Down]);
    }

    #[test]
    fn test_legal_moves_empty_when_terminal() {
        let g = grid(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(g.is_terminal());
        assert!(legal_moves(&g).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_rows_match_sequential() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        const VALUES: [u32; 6] = [0, 0, 2, 2, 4, 8];

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let size = 2 + (seed as usize % 5);
            let mut grid = Grid::new(size).unwrap();
            for cell in grid.cells_mut() {
                *cell = VALUES[rng.gen_range(0..VALUES.len())];
            }

            let mut sequential = grid.clone();
            let expected: usize = sequential.rows_mut().map(line::reduce).sum();

            let mut parallel = grid.clone();
            let merges = reduce_rows(&mut parallel);

            assert_eq!(parallel, sequential, "seed {seed}");
            assert_eq!(merges, expected, "seed {seed}");
        }
    }
}
