//! In-memory player.
//!
//! Behaves like a cooperative SDK: a clock that only moves when
//! [`SimulatedPlayer::advance`] is called, ad breaks at cue points,
//! seeks clamped to the timeline.

use tracing::debug;

use super::{PlayerEvent, PlayerHandle};

/// An ad break scheduled at a content position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdCue {
    /// Content position in seconds where the break starts
    pub at: f64,
    /// Break length in seconds
    pub length: f64,
}

#[derive(Debug, Clone, Copy)]
struct ActiveAd {
    remaining: f64,
    paused: bool,
}

/// Simulated player handle.
#[derive(Debug, Clone)]
pub struct SimulatedPlayer {
    position: f64,
    duration: Option<f64>,
    paused: bool,
    live: bool,
    ended: bool,
    ad: Option<ActiveAd>,
    cues: Vec<AdCue>,
    seeks: Vec<u64>,
    pending_error: Option<String>,
    /// Notifications raised by calls, delivered on the next advance
    queued: Vec<PlayerEvent>,
}

impl SimulatedPlayer {
    /// Create a playing (unpaused) player with a known duration.
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: Some(duration),
            paused: false,
            live: false,
            ended: false,
            ad: None,
            cues: Vec::new(),
            seeks: Vec::new(),
            pending_error: None,
            queued: Vec::new(),
        }
    }

    /// Create a player whose duration has not loaded yet.
    pub fn with_unknown_duration() -> Self {
        Self {
            duration: None,
            ..Self::new(0.0)
        }
    }

    /// Start at `position` seconds.
    pub fn starting_at(mut self, position: f64) -> Self {
        self.position = position.max(0.0);
        self
    }

    /// Flag the media as a live stream.
    pub fn live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Start paused.
    pub fn paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// Schedule an ad break at a content position.
    pub fn with_ad_cue(mut self, at: f64, length: f64) -> Self {
        self.cues.push(AdCue { at, length });
        self.cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        self
    }

    /// Start an ad break right now.
    pub fn start_ad_break(&mut self, length: f64) -> PlayerEvent {
        self.ad = Some(ActiveAd {
            remaining: length,
            paused: false,
        });
        PlayerEvent::AdBreakStarted
    }

    /// Resolve the duration (metadata arrived).
    pub fn resolve_duration(&mut self, duration: f64) -> PlayerEvent {
        self.duration = Some(duration);
        PlayerEvent::DurationChange
    }

    /// Make the next [`advance`](Self::advance) report a playback error.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.pending_error = Some(message.into());
    }

    /// Remaining ad cue points, for progress bar markers.
    pub fn ad_cues(&self) -> &[AdCue] {
        &self.cues
    }

    /// Every seek target issued so far, in milliseconds.
    pub fn seek_history(&self) -> &[u64] {
        &self.seeks
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Move the clock forward by `secs` of wall time.
    ///
    /// Returns the notifications the SDK would have raised meanwhile.
    pub fn advance(&mut self, secs: f64) -> Vec<PlayerEvent> {
        let mut events = std::mem::take(&mut self.queued);

        if let Some(message) = self.pending_error.take() {
            self.paused = true;
            events.push(PlayerEvent::Error { message });
            return events;
        }

        if self.ended || secs <= 0.0 {
            return events;
        }

        // The ad runs on its own pause state; content stays put meanwhile
        if let Some(ad) = self.ad.as_mut() {
            if ad.paused {
                return events;
            }
            ad.remaining -= secs;
            if ad.remaining <= 0.0 {
                self.ad = None;
                events.push(PlayerEvent::AdBreakEnded);
            }
            return events;
        }

        if self.paused {
            return events;
        }

        let target = self.position + secs;

        if let Some(idx) = self.cues.iter().position(|cue| cue.at <= target) {
            let cue = self.cues.remove(idx);
            self.position = cue.at.max(self.position);
            debug!(at = cue.at, length = cue.length, "ad break reached");
            events.push(self.start_ad_break(cue.length));
            return events;
        }

        self.position = target;
        match self.duration {
            Some(duration) if !self.live && self.position >= duration => {
                self.position = duration;
                self.ended = true;
                events.push(PlayerEvent::Ended);
            }
            _ => events.push(PlayerEvent::TimeUpdate),
        }

        events
    }
}

impl PlayerHandle for SimulatedPlayer {
    fn current_time(&self) -> Option<f64> {
        Some(self.position)
    }

    fn duration(&self) -> Option<f64> {
        if self.live {
            // Live streams report the sentinel
            return Some(-1.0);
        }
        self.duration
    }

    fn seek_to(&mut self, position_ms: u64) {
        self.seeks.push(position_ms);
        let mut target = position_ms as f64 / 1000.0;
        if let Some(duration) = self.duration {
            target = target.min(duration);
        }
        self.position = target.max(0.0);
        self.ended = false;
    }

    fn play(&mut self) {
        match self.ad.as_mut() {
            Some(ad) => ad.paused = false,
            None => self.paused = false,
        }
    }

    fn pause(&mut self) {
        match self.ad.as_mut() {
            Some(ad) => ad.paused = true,
            None if !self.paused => {
                self.paused = true;
                self.queued.push(PlayerEvent::Paused);
            }
            None => {}
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ad_playing(&self) -> bool {
        self.ad.is_some()
    }

    fn is_ad_paused(&self) -> bool {
        self.ad.map_or(false, |ad| ad.paused)
    }

    fn is_live(&self) -> bool {
        self.live
    }
}
