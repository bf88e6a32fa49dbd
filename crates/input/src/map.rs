//! Key mapping from key codes to movement directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a movement direction.
///
/// Arrow keys and vi-style h/j/k/l are supported; letters are matched
/// case-insensitively. Every other key maps to `None`, which is the expected
/// silent outcome for unrecognized input, not an error.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'k' => Some(Direction::Up),
            'j' => Some(Direction::Down),
            'h' => Some(Direction::Left),
            'l' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Right), Some(Direction::Right));
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(map_key(KeyCode::Char('k')), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Char('j')), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::Char('h')), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Char('l')), Some(Direction::Right));
    }

    #[test]
    fn test_vi_keys_uppercase() {
        assert_eq!(map_key(KeyCode::Char('K')), Some(Direction::Up));
        assert_eq!(map_key(KeyCode::Char('J')), Some(Direction::Down));
        assert_eq!(map_key(KeyCode::Char('H')), Some(Direction::Left));
        assert_eq!(map_key(KeyCode::Char('L')), Some(Direction::Right));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyCode::Char('a')), None);
        assert_eq!(map_key(KeyCode::Char(' ')), None);
        assert_eq!(map_key(KeyCode::Esc), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('h'))));
    }
}
