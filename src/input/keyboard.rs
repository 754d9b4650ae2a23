//! Keyboard mapping for the terminal remote.
//!
//! Terminal keys stand in for remote buttons: arrows are the d-pad,
//! Enter is OK/select, Space is play/pause, `,`/`.` are rewind and
//! fast-forward.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Button;

/// A key event translated for the demo loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Key went down (first press or auto-repeat)
    ButtonDown(Button),
    /// Key released (only reported by terminals with enhanced keyboard
    /// reporting)
    ButtonUp(Button),
    Quit,
    ToggleHelp,
}

/// Map a crossterm key event.
///
/// Returns `None` for keys with no meaning in the player.
pub fn map_key(key: &KeyEvent) -> Option<KeyCommand> {
    let released = key.kind == KeyEventKind::Release;

    if let Some(button) = button_for(key.code) {
        return Some(if released {
            KeyCommand::ButtonUp(button)
        } else {
            KeyCommand::ButtonDown(button)
        });
    }

    if released {
        return None;
    }

    match key.code {
        KeyCode::Char('q') => Some(KeyCommand::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyCommand::Quit)
        }
        KeyCode::Char('?') => Some(KeyCommand::ToggleHelp),
        _ => None,
    }
}

fn button_for(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        KeyCode::Up => Some(Button::Up),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Enter => Some(Button::Select),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Button::PlayPause),
        KeyCode::Char('.') | KeyCode::Char('>') => Some(Button::FastForward),
        KeyCode::Char(',') | KeyCode::Char('<') => Some(Button::Rewind),
        KeyCode::Esc | KeyCode::Backspace => Some(Button::Back),
        _ => None,
    }
}
