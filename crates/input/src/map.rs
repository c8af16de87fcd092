//! Key mapping from terminal events to game actions.

use crate::types::{Direction, InputAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        // Movement: arrows, the classic i/j/k/l cluster, and WASD
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('i') | KeyCode::Char('I') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputAction::Move(Direction::Down))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
