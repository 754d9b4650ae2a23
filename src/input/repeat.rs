//! Hold detection and repeat tick pacing.
//!
//! Terminals (and many remotes) do not report key releases; they only
//! send auto-repeat key-downs while a key is held. [`RepeatTimer`] turns
//! that stream into press/repeat/release events:
//!
//! - the first key-down is a press
//! - a second key-down for the same button confirms a hold; repeat ticks
//!   then fire at the interval the controller asks for, no earlier than
//!   `repeat_delay` after the press
//! - silence longer than `tap_release` (never held) or `hold_release`
//!   (held) counts as a release
//!
//! Release detection therefore trails the physical release, and a tick
//! may fire in between. The controller's release correction accounts for
//! that extra tick.

use std::time::{Duration, Instant};

use super::{Button, ButtonEvent};
use crate::config::InputConfig;
use crate::seek::{RampProfile, ScheduleKind};

/// Hold detection thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    pub repeat_delay: Duration,
    pub tap_release: Duration,
    pub hold_release: Duration,
    /// Tick interval until the controller picks one
    pub initial_interval: Duration,
}

impl RepeatTiming {
    /// Hold thresholds from `[input]`, first tick interval from the
    /// accelerating schedule of `profile`.
    pub fn new(input: &InputConfig, profile: &RampProfile) -> Self {
        Self {
            repeat_delay: Duration::from_millis(input.repeat_delay_ms),
            tap_release: Duration::from_millis(input.tap_release_ms),
            hold_release: Duration::from_millis(input.hold_release_ms),
            initial_interval: profile.schedule(ScheduleKind::Accelerating).interval(0),
        }
    }
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self::new(&InputConfig::default(), &RampProfile::default())
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    button: Button,
    last_key_at: Instant,
    confirmed: bool,
    next_tick: Instant,
    last_tick: Option<Instant>,
}

/// Classifies key-downs into button events and paces repeat ticks.
#[derive(Debug, Clone)]
pub struct RepeatTimer {
    timing: RepeatTiming,
    interval: Duration,
    held: Option<Held>,
}

impl RepeatTimer {
    pub fn new(timing: RepeatTiming) -> Self {
        Self {
            timing,
            interval: timing.initial_interval,
            held: None,
        }
    }

    /// Button currently considered held, if any.
    pub fn held(&self) -> Option<Button> {
        self.held.map(|h| h.button)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Use `interval` between subsequent repeat ticks.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        if let Some(held) = self.held.as_mut() {
            if let Some(last_tick) = held.last_tick {
                held.next_tick = last_tick + interval;
            }
        }
    }

    /// A key-down arrived for `button`.
    ///
    /// Pressing a different button releases the held one first.
    pub fn key_down(&mut self, button: Button, now: Instant) -> Vec<ButtonEvent> {
        match self.held.map(|held| held.button == button) {
            Some(true) => {
                if let Some(held) = self.held.as_mut() {
                    held.last_key_at = now;
                    held.confirmed = true;
                }
                Vec::new()
            }
            Some(false) => {
                let mut events = Vec::with_capacity(2);
                if let Some(released) = self.release() {
                    events.push(released);
                }
                events.push(self.press(button, now));
                events
            }
            None => vec![self.press(button, now)],
        }
    }

    /// An explicit key release arrived for `button`.
    pub fn key_up(&mut self, button: Button) -> Option<ButtonEvent> {
        match self.held {
            Some(held) if held.button == button => self.release(),
            _ => None,
        }
    }

    /// Emit whatever is due at `now`: an inferred release or a repeat tick.
    pub fn poll(&mut self, now: Instant) -> Option<ButtonEvent> {
        let held = self.held.as_mut()?;

        let grace = if held.confirmed {
            self.timing.hold_release
        } else {
            self.timing.tap_release
        };
        if now.saturating_duration_since(held.last_key_at) >= grace {
            return self.release();
        }

        if held.confirmed && now >= held.next_tick {
            held.last_tick = Some(now);
            held.next_tick = now + self.interval;
            return Some(ButtonEvent::repeat(held.button));
        }

        None
    }

    /// When the next [`poll`](Self::poll) could produce something.
    pub fn next_deadline(&self) -> Option<Instant> {
        let held = self.held.as_ref()?;
        let grace = if held.confirmed {
            self.timing.hold_release
        } else {
            self.timing.tap_release
        };
        let release_at = held.last_key_at + grace;
        if held.confirmed {
            Some(release_at.min(held.next_tick))
        } else {
            Some(release_at)
        }
    }

    fn press(&mut self, button: Button, now: Instant) -> ButtonEvent {
        self.held = Some(Held {
            button,
            last_key_at: now,
            confirmed: false,
            next_tick: now + self.timing.repeat_delay,
            last_tick: None,
        });
        ButtonEvent::press(button)
    }

    fn release(&mut self) -> Option<ButtonEvent> {
        let held = self.held.take()?;
        self.interval = self.timing.initial_interval;
        Some(ButtonEvent::release(held.button))
    }
}

impl Default for RepeatTimer {
    fn default() -> Self {
        Self::new(RepeatTiming::default())
    }
}
