//! Grid tests - data container and queries

use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{Grid, GridError};
use tui_2048::types::Position;

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(4).unwrap();
    assert_eq!(grid.size(), 4);

    // All cells should be empty
    for row in 0..4 {
        for column in 0..4 {
            assert_eq!(grid.get(row, column), Some(0));
        }
    }
    assert_eq!(grid.empty_cells().len(), 16);
    assert!(!grid.is_terminal());
}

#[test]
fn test_grid_invalid_dimension() {
    assert_eq!(Grid::new(0), Err(GridError::InvalidDimension { size: 0 }));
    assert!(matches!(
        Grid::from_rows(&[vec![2, 0, 0], vec![0, 0, 0]]),
        Err(GridError::InvalidDimension { .. })
    ));
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(3).unwrap();
    assert_eq!(grid.get(3, 0), None);
    assert_eq!(grid.get(0, 3), None);
    assert_eq!(grid.row(3), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(4).unwrap();

    grid.set(1, 2, 8).unwrap();
    assert_eq!(grid.get(1, 2), Some(8));

    grid.set(1, 2, 0).unwrap();
    assert_eq!(grid.get(1, 2), Some(0));

    assert!(matches!(
        grid.set(4, 4, 2),
        Err(GridError::OutOfBounds { row: 4, column: 4, size: 4 })
    ));
}

#[test]
fn test_empty_cells_are_fresh_copies() {
    let mut grid = Grid::new(2).unwrap();
    let before = grid.empty_cells();
    grid.set(0, 0, 2).unwrap();

    assert_eq!(before.len(), 4);
    assert_eq!(
        grid.empty_cells(),
        vec![Position::new(0, 1), Position::new(1, 0), Position::new(1, 1)]
    );
}

#[test]
fn test_terminal_full_and_distinct() {
    let grid = Grid::from_rows(&[
        [2, 4, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
    ])
    .unwrap();
    assert!(grid.is_terminal());
}

#[test]
fn test_not_terminal_with_horizontal_pair() {
    let grid = Grid::from_rows(&[
        [2, 2, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 64, 128],
    ])
    .unwrap();
    assert!(!grid.is_terminal());
}

#[test]
fn test_not_terminal_with_vertical_pair() {
    // Only column 3 has an equal neighbour (64 over 64).
    let grid = Grid::from_rows(&[
        [2, 4, 8, 16],
        [4, 8, 16, 32],
        [8, 16, 32, 64],
        [16, 32, 128, 64],
    ])
    .unwrap();
    assert!(!grid.is_terminal());
}

#[test]
fn test_not_terminal_with_any_empty_cell() {
    // No adjacent pair anywhere, but one empty cell.
    let grid = Grid::from_rows(&[[2, 4, 2], [4, 2, 4], [2, 4, 0]]).unwrap();
    assert!(!grid.is_terminal());
}

#[test]
fn test_select_random_empty_cell_is_uniform() {
    let grid = Grid::from_rows(&[[0, 2, 0], [2, 2, 2], [0, 2, 0]]).unwrap();
    let empty = grid.empty_cells();
    let k = empty.len();
    assert_eq!(k, 4);

    let mut rng = StdRng::seed_from_u64(2048);
    let trials = 40_000;
    let mut counts = vec![0usize; k];
    for _ in 0..trials {
        let pos = grid.select_random_empty_cell(&mut rng).unwrap();
        let idx = empty.iter().position(|&p| p == pos).expect("picked a filled cell");
        counts[idx] += 1;
    }

    let expected = 1.0 / k as f64;
    for count in counts {
        let freq = count as f64 / trials as f64;
        assert!(
            (freq - expected).abs() < 0.02,
            "frequency {freq} too far from {expected}"
        );
    }
}

#[test]
fn test_orientation_primitives_are_involutions() {
    let original = Grid::from_rows(&[[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]])
        .unwrap();

    let mut grid = original.clone();
    grid.transpose();
    assert_eq!(grid.get(0, 1), Some(5));
    grid.transpose();
    assert_eq!(grid, original);

    let mut grid = original.clone();
    grid.reverse_rows();
    assert_eq!(grid.row(0), Some(&[4, 3, 2, 1][..]));
    grid.reverse_rows();
    assert_eq!(grid, original);
}
