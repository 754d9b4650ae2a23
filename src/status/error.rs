//! `error` notifications.

use serde::{Deserialize, Serialize};

/// What went wrong, as reported to error listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The player did not become ready within the init window
    InitTimeout,
    /// The player factory returned an error
    InitFailed,
    /// The player reported an error during playback
    Playback,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InitTimeout => "initTimeout",
            Self::InitFailed => "initFailed",
            Self::Playback => "playback",
        }
    }
}

/// An `error` notification. Always fatal to the current playback session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub kind: ErrorKind,
    /// Free-form context token (player message, elapsed wait, ...)
    pub context: String,
}

impl ErrorEvent {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

impl std::fmt::Display for ErrorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.context)
    }
}
