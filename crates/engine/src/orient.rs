//! Orientation table: which transforms make a direction look like `Left`.
//!
//! Every transform is its own inverse. A move applies the direction's transforms in
//! order, reduces rows, then applies the same transforms in reverse order.

use crate::core::Grid;
use crate::types::Direction;

/// A self-inverse reorientation of the whole grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Rows become columns.
    Transpose,
    /// Each row is reversed.
    ReverseRows,
}

impl Transform {
    pub fn apply(self, grid: &mut Grid) {
        match self {
            Transform::Transpose => grid.transpose(),
            Transform::ReverseRows => grid.reverse_rows(),
        }
    }
}

/// Transforms that turn `direction` into a leftward slide
pub fn transforms(direction: Direction) -> &'static [Transform] {
    match direction {
        Direction::Left => &[],
        Direction::Right => &[Transform::ReverseRows],
        Direction::Up => &[Transform::Transpose],
        Direction::Down => &[Transform::Transpose, Transform::ReverseRows],
    }
}

/// Reorient `grid` so that `direction` slides toward column 0
pub fn orient(grid: &mut Grid, direction: Direction) {
    for transform in transforms(direction) {
        transform.apply(grid);
    }
}

/// Undo [`orient`]
pub fn restore(grid: &mut Grid, direction: Direction) {
    for transform in transforms(direction).iter().rev() {
        transform.apply(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_transforms_are_involutions() {
        for transform in [Transform::Transpose, Transform::ReverseRows] {
            let mut grid = sample();
            transform.apply(&mut grid);
            assert_ne!(grid, sample());
            transform.apply(&mut grid);
            assert_eq!(grid, sample());
        }
    }

    #[test]
    fn test_orient_then_restore_is_identity() {
        for direction in Direction::ALL {
            let mut grid = sample();
            orient(&mut grid, direction);
            restore(&mut grid, direction);
            assert_eq!(grid, sample(), "{:?} did not round-trip", direction);
        }
    }

    #[test]
    fn test_down_puts_bottom_of_column_first() {
        let mut grid = sample();
        orient(&mut grid, Direction::Down);
        // First row is column 0 read bottom to top.
        assert_eq!(grid.row(0), Some(&[7, 4, 1][..]));
    }

    #[test]
    fn test_up_puts_top_of_column_first() {
        let mut grid = sample();
        orient(&mut grid, Direction::Up);
        assert_eq!(grid.row(0), Some(&[1, 4, 7][..]));
    }
}
