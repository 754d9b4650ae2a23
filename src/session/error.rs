//! Session start-up errors.

use std::time::Duration;

use crate::status::{ErrorEvent, ErrorKind};

/// Errors that end a playback session before it starts.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Player did not initialize within {}ms", waited.as_millis())]
    InitTimeout { waited: Duration },

    #[error("Player failed to initialize: {message}")]
    InitFailed { message: String },

    #[error("Invalid configuration: {0}")]
    Settings(#[from] crate::config::ConfigError),

    #[error("Failed to start player initializer: {0}")]
    Spawn(#[from] std::io::Error),
}

impl SessionError {
    /// The `error` notification listeners receive for this failure.
    pub fn to_event(&self) -> ErrorEvent {
        let kind = match self {
            Self::InitTimeout { .. } => ErrorKind::InitTimeout,
            _ => ErrorKind::InitFailed,
        };
        ErrorEvent::new(kind, self.to_string())
    }
}
