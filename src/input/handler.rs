use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, GameMode, MatchInput};

/// What a key press means to the app loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward an event to the match
    Match(MatchInput),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Match(MatchInput::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::Match(MatchInput::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::Match(MatchInput::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::Match(MatchInput::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::Match(MatchInput::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Match(MatchInput::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Match(MatchInput::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Match(MatchInput::Turn(Direction::Right))
            }

            // Mode selection on the menu screen
            KeyCode::Char('1') => KeyAction::Match(MatchInput::Select(GameMode::Human)),
            KeyCode::Char('2') => KeyAction::Match(MatchInput::Select(GameMode::Versus)),
            KeyCode::Char('3') => KeyAction::Match(MatchInput::Select(GameMode::Auto)),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Match(MatchInput::Restart),

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
