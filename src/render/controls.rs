//! Visibility of the status and progress overlay.

use std::time::{Duration, Instant};

/// Tracks whether the controls overlay is on screen.
///
/// Up shows the overlay and arms a hide timer. Down hides it at once.
/// While the media is paused the overlay stays visible.
#[derive(Debug, Clone)]
pub struct ControlsOverlay {
    hide_after: Duration,
    visible_until: Option<Instant>,
}

impl ControlsOverlay {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            hide_after,
            visible_until: None,
        }
    }

    /// Show the overlay and hide it `hide_after` from `now`.
    pub fn show_and_hide(&mut self, now: Instant) {
        self.visible_until = Some(now + self.hide_after);
    }

    pub fn hide(&mut self) {
        self.visible_until = None;
    }

    /// Whether the overlay should be drawn at `now`.
    pub fn is_visible(&self, now: Instant, paused: bool) -> bool {
        paused || self.visible_until.map_or(false, |until| now < until)
    }

    /// When the overlay times out, if it is showing.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.visible_until
    }

    /// Forget an expired hide timer. Returns true when the overlay just
    /// went away.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.visible_until {
            Some(until) if now >= until => {
                self.visible_until = None;
                true
            }
            _ => false,
        }
    }
}
