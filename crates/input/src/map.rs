//! Key mapping from terminal events to directions.

use blockfall_types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key event to a direction, if it is bound to one.
///
/// Arrows are primary; WASD and hjkl work as alternates.
pub fn decode_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(Direction::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(Direction::Up),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
