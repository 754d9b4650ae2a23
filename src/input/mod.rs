//! Remote-control input handling.
//!
//! Raw key events are classified into semantic button events
//! ([`ButtonEvent`]) and routed to the seek controller:
//!
//! - `keyboard`: crossterm key mapping
//! - `repeat`: hold detection and the repeat tick timer
//! - `dispatch`: routing button events to the controller

mod dispatch;
pub mod keyboard;
mod repeat;

pub use dispatch::{route, Routed};
pub use keyboard::{map_key, KeyCommand};
pub use repeat::{RepeatTimer, RepeatTiming};

use crate::seek::Direction;

/// Logical buttons of a TV remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Up,
    Down,
    Select,
    PlayPause,
    FastForward,
    Rewind,
    Back,
}

impl Button {
    /// Seek direction for directional buttons.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Left | Self::Rewind => Some(Direction::Backward),
            Self::Right | Self::FastForward => Some(Direction::Forward),
            _ => None,
        }
    }

    /// Whether the button toggles playback.
    pub fn toggles_playback(&self) -> bool {
        matches!(self, Self::Select | Self::PlayPause)
    }
}

/// What happened to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Repeat,
    Release,
}

/// A classified button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub action: ButtonAction,
}

impl ButtonEvent {
    pub fn press(button: Button) -> Self {
        Self {
            button,
            action: ButtonAction::Press,
        }
    }

    pub fn repeat(button: Button) -> Self {
        Self {
            button,
            action: ButtonAction::Repeat,
        }
    }

    pub fn release(button: Button) -> Self {
        Self {
            button,
            action: ButtonAction::Release,
        }
    }
}
