//! The seek-ramp state machine.

use std::time::Duration;

use tracing::{debug, info, warn};

use super::ramp::{next_scrub_position, RampProfile, ScheduleKind};
use super::scrub::{Direction, ScrubState};
use crate::player::{known_seconds, seconds_to_ms, PlayerEvent, PlayerHandle};
use crate::status::{ErrorEvent, ErrorKind, Listeners, StatusPhase, VideoStatus};

/// Default single-step seek length in seconds.
pub const DEFAULT_SKIP_LENGTH: f64 = 10.0;

/// Tunables for the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekSettings {
    /// Seconds moved by a single press, and the release overshoot correction
    pub skip_length: f64,
    pub profile: RampProfile,
}

impl Default for SeekSettings {
    fn default() -> Self {
        Self {
            skip_length: DEFAULT_SKIP_LENGTH,
            profile: RampProfile::default(),
        }
    }
}

/// Result of an accepted repeat tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Virtual position after the tick
    pub position: f64,
    pub schedule: ScheduleKind,
    pub speed_tier: usize,
    /// Delay the repeat timer should wait before the next tick
    pub interval: Duration,
}

/// Observable state of the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    Idle,
    Scrubbing {
        direction: Direction,
        schedule: ScheduleKind,
        speed_tier: usize,
    },
}

/// Forwards directional button events to a player handle.
///
/// Owns the player exclusively for one playback session. All entry points
/// are synchronous; listeners have seen every emission by the time a call
/// returns.
pub struct SeekRampController<P: PlayerHandle> {
    player: P,
    listeners: Listeners,
    settings: SeekSettings,
    scrub: Option<ScrubState>,
}

impl<P: PlayerHandle> SeekRampController<P> {
    pub fn new(player: P, settings: SeekSettings, listeners: Listeners) -> Self {
        Self {
            player,
            listeners,
            settings,
            scrub: None,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Give the player back, ending the session.
    pub fn into_player(self) -> P {
        self.player
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    pub fn settings(&self) -> &SeekSettings {
        &self.settings
    }

    pub fn scrub(&self) -> Option<&ScrubState> {
        self.scrub.as_ref()
    }

    pub fn state(&self) -> ControllerState {
        match &self.scrub {
            None => ControllerState::Idle,
            Some(scrub) => ControllerState::Scrubbing {
                direction: scrub.direction,
                schedule: scrub.schedule,
                speed_tier: scrub.speed_tier,
            },
        }
    }

    /// Current time and duration, when both are usable for seeking.
    pub fn playback_window(&self) -> Option<(f64, f64)> {
        let current = known_seconds(self.player.current_time())?;
        let duration = known_seconds(self.player.duration())?;
        if duration <= 0.0 {
            return None;
        }
        Some((current.min(duration), duration))
    }

    pub fn has_valid_time_and_duration(&self) -> bool {
        self.playback_window().is_some()
    }

    /// Whether directional input is currently blocked (live or ad).
    fn directional_blocked(&self) -> bool {
        self.player.is_live() || self.player.is_ad_playing()
    }

    /// Single-step seek by one skip length.
    ///
    /// Returns `false` when a guard suppressed the press.
    pub fn on_directional_press(&mut self, direction: Direction) -> bool {
        if self.directional_blocked() {
            debug!(%direction, "press ignored: live or ad playing");
            return false;
        }
        let Some((current, duration)) = self.playback_window() else {
            debug!(%direction, "press ignored: time or duration unknown");
            return false;
        };

        let target = current + direction.sign() * self.settings.skip_length;
        self.emit(current, duration, StatusPhase::Playing);
        self.player.seek_to(seconds_to_ms(target));
        self.emit(current, duration, StatusPhase::Seeking);

        debug!(%direction, from = current, target, "single-step seek");
        true
    }

    /// Advance the virtual scrub position by one tick.
    ///
    /// Emits `playing` at the pre-tick position, moves the position, then
    /// emits `seeking` at the new one. Returns `None` when the tick was
    /// ignored (guard, unknown duration or a reversal mid-scrub).
    pub fn on_repeat_tick(&mut self, direction: Direction) -> Option<TickOutcome> {
        if self.directional_blocked() {
            debug!(%direction, "repeat ignored: live or ad playing");
            return None;
        }
        let Some((current, duration)) = self.playback_window() else {
            debug!(%direction, "repeat ignored: time or duration unknown");
            return None;
        };

        let mut scrub = match self.scrub.take() {
            Some(scrub) if scrub.direction != direction => {
                debug!(
                    active = %scrub.direction,
                    requested = %direction,
                    "repeat ignored: direction reversal mid-scrub"
                );
                self.scrub = Some(scrub);
                return None;
            }
            Some(scrub) => scrub,
            None => {
                debug!(%direction, start = current, "scrub started");
                ScrubState::begin(current, direction)
            }
        };

        let before = scrub.virtual_position.clamp(0.0, duration);
        let selected = self.settings.profile.select(direction, before, duration);
        scrub.step_schedule(selected, &self.settings.profile);

        self.emit(before, duration, StatusPhase::Playing);

        scrub.virtual_position = next_scrub_position(
            before,
            duration,
            direction,
            self.settings.skip_length,
            self.settings.profile.step_fraction(),
        );
        scrub.ticks += 1;

        let after = scrub.virtual_position;
        self.emit(after, duration, StatusPhase::Seeking);

        let outcome = TickOutcome {
            position: after,
            schedule: scrub.schedule,
            speed_tier: scrub.speed_tier,
            interval: self
                .settings
                .profile
                .schedule(scrub.schedule)
                .interval(scrub.speed_tier),
        };
        debug!(
            %direction,
            before,
            after,
            schedule = ?outcome.schedule,
            tier = outcome.speed_tier,
            "scrub tick"
        );

        self.scrub = Some(scrub);
        Some(outcome)
    }

    /// Commit the active scrub to the player.
    ///
    /// The repeat timer upstream detects the release one tick late, so the
    /// committed position backs off by one skip length in the scrub
    /// direction unless the scrub already hit the end it was heading for.
    /// Returns the committed position, or `None` if nothing was committed.
    pub fn on_release(&mut self) -> Option<f64> {
        let scrub = self.scrub.take()?;

        if self.directional_blocked() {
            debug!("release dropped scrub: live or ad playing");
            return None;
        }
        let Some((_, duration)) = self.playback_window() else {
            debug!("release dropped scrub: time or duration unknown");
            return None;
        };

        let position = scrub.virtual_position;
        let adjusted = match scrub.direction {
            Direction::Forward if position != duration => position - self.settings.skip_length,
            Direction::Backward if position != 0.0 => position + self.settings.skip_length,
            _ => position,
        }
        .clamp(0.0, duration);

        self.emit(adjusted, duration, StatusPhase::Playing);
        self.player.seek_to(seconds_to_ms(adjusted));
        self.emit(adjusted, duration, StatusPhase::Seeking);

        info!(
            direction = %scrub.direction,
            ticks = scrub.ticks,
            virtual_position = position,
            committed = adjusted,
            "scrub committed"
        );
        Some(adjusted)
    }

    /// Drop any active scrub without seeking or emitting.
    pub fn cancel_scrub(&mut self) {
        if let Some(scrub) = self.scrub.take() {
            debug!(direction = %scrub.direction, ticks = scrub.ticks, "scrub cancelled");
        }
    }

    /// Toggle between play and pause. Permitted during ads and live streams,
    /// ignored while a scrub is in progress.
    ///
    /// During an ad break the ad is paused or resumed instead of the
    /// content. Resuming (ad or content) emits `resumed`; pausing emits
    /// nothing here, the player's own pause notification reports it.
    /// Returns the phase that was applied, or `None` while scrubbing.
    pub fn toggle_play_pause(&mut self) -> Option<StatusPhase> {
        if self.scrub.is_some() {
            debug!("play/pause ignored: scrub in progress");
            return None;
        }

        let ad = self.player.is_ad_playing();
        let paused = if ad {
            self.player.is_ad_paused()
        } else {
            self.player.is_paused()
        };

        let phase = if paused {
            self.player.play();
            self.emit_current(StatusPhase::Resumed);
            StatusPhase::Resumed
        } else {
            self.player.pause();
            StatusPhase::Paused
        };

        debug!(%phase, ad, "play/pause toggled");
        Some(phase)
    }

    /// The viewer asked to leave playback (Back button).
    ///
    /// Drops any active scrub and notifies the exit listeners.
    pub fn request_exit(&mut self) {
        self.cancel_scrub();
        info!("exit requested");
        self.listeners.emit_exit();
    }

    /// React to a notification from the player.
    pub fn handle_player_event(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::TimeUpdate => {
                // The UI follows the virtual position while scrubbing,
                // and the ad's own timeline is not ours to report.
                if self.scrub.is_some() || self.player.is_ad_playing() {
                    return;
                }
                self.emit_current(StatusPhase::Playing);
            }
            PlayerEvent::Paused => {
                // Pauses at 0 or at the end are not reported
                match self.playback_window() {
                    Some((current, duration)) if current > 0.0 && current != duration => {
                        self.emit(current, duration, StatusPhase::Paused)
                    }
                    _ => debug!("pause at start or end not reported"),
                }
            }
            PlayerEvent::Resumed => self.emit_current(StatusPhase::Resumed),
            PlayerEvent::Ended => {
                self.cancel_scrub();
                self.emit_current(StatusPhase::Ended);
            }
            PlayerEvent::DurationChange => self.emit_current(StatusPhase::DurationChange),
            PlayerEvent::AdBreakStarted => {
                info!("ad break started");
                self.cancel_scrub();
            }
            PlayerEvent::AdBreakEnded => {
                info!("ad break ended");
                self.emit_current(StatusPhase::Resumed);
            }
            PlayerEvent::Error { message } => {
                warn!(%message, "player reported a playback error");
                self.cancel_scrub();
                self.listeners
                    .emit_error(&ErrorEvent::new(ErrorKind::Playback, message));
            }
        }
    }

    fn emit_current(&mut self, phase: StatusPhase) {
        if let Some((current, duration)) = self.playback_window() {
            self.emit(current, duration, phase);
        }
    }

    fn emit(&mut self, current_time: f64, duration: f64, phase: StatusPhase) {
        self.listeners
            .emit_status(&VideoStatus::new(current_time, duration, phase));
    }
}

impl<P: PlayerHandle + std::fmt::Debug> std::fmt::Debug for SeekRampController<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeekRampController")
            .field("player", &self.player)
            .field("listeners", &self.listeners)
            .field("settings", &self.settings)
            .field("scrub", &self.scrub)
            .finish()
    }
}
