//! Player handle abstraction.
//!
//! The decoding, rendering and ad-insertion work belongs to an external
//! player SDK. This crate only sees it through [`PlayerHandle`] and the
//! [`PlayerEvent`] notifications it raises.
//!
//! - `simulated`: in-memory player used by the demo, the scripted runner
//!   and the tests

mod simulated;

pub use simulated::{AdCue, SimulatedPlayer};

/// Capability set the controller needs from the player SDK.
///
/// Calls are synchronous and fire-and-forget: `seek_to`, `play` and
/// `pause` return before the player has acted on them.
pub trait PlayerHandle {
    /// Current position in seconds, `None` while unknown.
    fn current_time(&self) -> Option<f64>;

    /// Total duration in seconds, `None` while unknown.
    ///
    /// SDKs commonly report `-1` for an unknown duration; implementations
    /// may return it as-is, the controller filters it through
    /// [`known_seconds`].
    fn duration(&self) -> Option<f64>;

    /// Seek to an absolute position in milliseconds. The player clamps
    /// out-of-range targets.
    fn seek_to(&mut self, position_ms: u64);

    /// Start or resume playback. During an ad break this resumes the ad.
    fn play(&mut self);

    /// Pause playback. During an ad break this pauses the ad.
    fn pause(&mut self);

    /// Whether the content is paused.
    fn is_paused(&self) -> bool;

    /// Whether an advertisement is currently on screen.
    fn is_ad_playing(&self) -> bool;

    /// Whether the advertisement on screen is paused. `false` outside ads.
    fn is_ad_paused(&self) -> bool;

    /// Whether the current media is a live stream (no seeking).
    fn is_live(&self) -> bool;
}

/// Notifications raised by the player SDK.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerEvent {
    TimeUpdate,
    Paused,
    Resumed,
    Ended,
    DurationChange,
    AdBreakStarted,
    AdBreakEnded,
    Error { message: String },
}

/// Filter a raw time value down to a usable number of seconds.
///
/// Negative (`-1` sentinel) and non-finite values count as unknown.
pub fn known_seconds(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Convert seconds to the millisecond target `seek_to` expects.
///
/// Negative targets floor at zero; the upper bound is the player's job.
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_seconds_rejects_sentinels() {
        assert_eq!(known_seconds(None), None);
        assert_eq!(known_seconds(Some(-1.0)), None);
        assert_eq!(known_seconds(Some(f64::NAN)), None);
        assert_eq!(known_seconds(Some(f64::INFINITY)), None);
        assert_eq!(known_seconds(Some(0.0)), Some(0.0));
        assert_eq!(known_seconds(Some(42.5)), Some(42.5));
    }

    #[test]
    fn seconds_to_ms_rounds_and_floors() {
        assert_eq!(seconds_to_ms(1.2345), 1235);
        assert_eq!(seconds_to_ms(-3.0), 0);
        assert_eq!(seconds_to_ms(98.0), 98_000);
    }
}
