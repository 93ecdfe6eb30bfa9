//! Keyboard mapping for the game loop.

use crossterm::event::KeyCode;

/// A player intention, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Move the cursor left.
    Left,
    /// Move the cursor right.
    Right,
    /// Move the cursor up.
    Up,
    /// Move the cursor down.
    Down,
    /// Select the cursor cell, or play toward it.
    Confirm,
    /// Answer a prompt with yes.
    Yes,
    /// Cycle the display mode.
    ToggleHelp,
    /// Drop the selection, or ask to leave.
    Cancel,
    /// Take back the most recent play.
    Undo,
    /// Ask to leave the game.
    Quit,
}

/// Decodes a key, or `None` for keys without a binding.
pub fn map_key(key: KeyCode) -> Option<PlayerAction> {
    match key {
        KeyCode::Left | KeyCode::Char('a') => Some(PlayerAction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(PlayerAction::Right),
        KeyCode::Up | KeyCode::Char('w') => Some(PlayerAction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(PlayerAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(PlayerAction::Confirm),
        KeyCode::Char('y') => Some(PlayerAction::Yes),
        KeyCode::Char('h') => Some(PlayerAction::ToggleHelp),
        KeyCode::Esc => Some(PlayerAction::Cancel),
        KeyCode::Backspace | KeyCode::Char('u') => Some(PlayerAction::Undo),
        KeyCode::Char('q') => Some(PlayerAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_letters_coincide() {
        assert_eq!(map_key(KeyCode::Left), map_key(KeyCode::Char('a')));
        assert_eq!(map_key(KeyCode::Up), map_key(KeyCode::Char('w')));
        assert_eq!(map_key(KeyCode::Enter), Some(PlayerAction::Confirm));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }
}
