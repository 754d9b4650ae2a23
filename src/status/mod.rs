//! Status and error notifications emitted to the on-screen UI.
//!
//! The controller never talks to the UI directly. It publishes
//! [`VideoStatus`] and [`ErrorEvent`] values through [`Listeners`], which
//! calls every registered listener synchronously in registration order.

mod error;
mod listeners;

pub use error::{ErrorEvent, ErrorKind};
pub use listeners::{ErrorListener, ExitListener, Listeners, StatusListener, StatusRecorder};

use serde::{Deserialize, Serialize};

/// Phase tag attached to every status notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusPhase {
    Playing,
    Paused,
    Seeking,
    Resumed,
    Ended,
    DurationChange,
}

impl StatusPhase {
    /// Wire name, as listeners and the JSON output see it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Seeking => "seeking",
            Self::Resumed => "resumed",
            Self::Ended => "ended",
            Self::DurationChange => "durationChange",
        }
    }
}

impl std::fmt::Display for StatusPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `videoStatus` notification.
///
/// During a scrub `current_time` is the virtual position, not the
/// player's real position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatus {
    /// Position in seconds
    pub current_time: f64,
    /// Total duration in seconds
    pub duration: f64,
    pub phase: StatusPhase,
}

impl VideoStatus {
    pub fn new(current_time: f64, duration: f64, phase: StatusPhase) -> Self {
        Self {
            current_time,
            duration,
            phase,
        }
    }

    /// Fraction of the timeline covered, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:.3}/{:.3}",
            self.phase, self.current_time, self.duration
        )
    }
}
