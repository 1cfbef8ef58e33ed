//! Key mapping from terminal events to game inputs.

use crate::types::Input;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game input.
///
/// Release events are ignored so terminals that report them do not double
/// every move.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Input::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Input::Rotate),
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Input::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Input::Right),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Input::SoftDrop),
        KeyCode::Esc | KeyCode::Char(' ' | 'p' | 'P') => Some(Input::PauseToggle),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
