//! Integration tests for the game session (new game, move, spawn, terminal)

use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_2048::core::{rng, Grid, GridError};
use tui_2048::engine::Game;
use tui_2048::types::{Direction, SpawnPolicy};

#[test]
fn test_new_game_lifecycle() {
    let game = Game::new(4, 4, 12345).unwrap();

    assert_eq!(game.grid().size(), 4);
    assert_eq!(game.grid().empty_count(), 12);
    assert!(game
        .grid()
        .cells()
        .iter()
        .all(|&v| v == 0 || v == 2 || v == 4));
    assert_eq!(game.moves(), 0);
    assert_eq!(game.policy(), SpawnPolicy::OnChange);
    assert!(!game.is_terminal());
}

#[test]
fn test_new_game_rejects_zero_size() {
    assert!(matches!(
        Game::new(0, 2, 1),
        Err(GridError::InvalidDimension { size: 0 })
    ));
}

#[test]
fn test_spawn_tile_on_full_grid_leaves_grid_unchanged() {
    let full = Grid::from_rows(&[[2, 4], [4, 2]]).unwrap();
    let mut game = Game::from_grid(full.clone(), StdRng::seed_from_u64(1));

    assert_eq!(game.spawn_tile(), Err(GridError::NoEmptyCell));
    assert_eq!(game.grid(), &full);
}

#[test]
fn test_spawn_values_follow_distribution() {
    let mut rng = rng::seeded_rng(4);
    let mut fours = 0;
    let trials = 5_000;
    for _ in 0..trials {
        let mut grid = Grid::new(4).unwrap();
        let spawn = rng::spawn_tile(&mut grid, &mut rng).unwrap();
        assert!(spawn.value == 2 || spawn.value == 4);
        if spawn.value == 4 {
            fours += 1;
        }
    }
    let ratio = fours as f64 / trials as f64;
    assert!((0.07..0.13).contains(&ratio), "ratio of fours was {ratio}");
}

#[test]
fn test_play_until_terminal_or_cap() {
    // Cycle through directions; every report must agree with the grid state.
    let mut game = Game::new(3, 2, 2024).unwrap();
    let mut previous = game.grid().clone();

    for step in 0..100_000 {
        let direction = Direction::ALL[step % 4];
        let report = game.apply_move(direction);

        assert_eq!(report.terminal, game.is_terminal());
        if report.changed {
            assert!(report.spawned.is_some() || !game.grid().has_empty_cells());
        } else {
            assert_eq!(report.spawned, None);
            assert_eq!(game.grid(), &previous);
        }

        if report.terminal {
            assert!(!game.grid().has_empty_cells());
            return;
        }
        previous = game.grid().clone();
    }
    panic!("3x3 game did not terminate");
}

#[test]
fn test_seed_replays_identically() {
    let directions = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    let play = |seed: u64| {
        let mut game = Game::new(4, 2, seed).unwrap();
        for step in 0..50 {
            game.apply_move(directions[step % directions.len()]);
        }
        game.grid().clone()
    };

    assert_eq!(play(9), play(9));
}

#[test]
fn test_always_policy_spawns_without_change() {
    let grid = Grid::from_rows(&[[2, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
    let mut game = Game::from_grid(grid, StdRng::seed_from_u64(3)).with_policy(SpawnPolicy::Always);

    let report = game.apply_move(Direction::Up);
    assert!(!report.changed);
    assert!(report.spawned.is_some());
    assert_eq!(game.grid().empty_count(), 7);
}

#[test]
fn test_restart_keeps_size() {
    let mut game = Game::new(5, 3, 8).unwrap();
    game.apply_move(Direction::Down);
    game.restart().unwrap();

    assert_eq!(game.grid().size(), 5);
    assert_eq!(game.grid().empty_count(), 22);
    assert_eq!(game.moves(), 0);
}
