//! Playback session start-up.
//!
//! A real player SDK loads asynchronously and may never show up. The
//! factory runs on its own thread and the caller waits for it with a
//! bounded timeout; the outcome is an explicit result instead of a timer
//! racing a readiness check.

mod error;

pub use error::SessionError;

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::Config;
use crate::player::PlayerHandle;
use crate::seek::SeekRampController;
use crate::status::Listeners;

/// Builds the player handle. May block (script load, DRM handshake, ...).
pub trait PlayerFactory: Send + 'static {
    type Player: PlayerHandle + Send + 'static;

    fn create(self) -> anyhow::Result<Self::Player>;
}

impl<F, P> PlayerFactory for F
where
    F: FnOnce() -> anyhow::Result<P> + Send + 'static,
    P: PlayerHandle + Send + 'static,
{
    type Player = P;

    fn create(self) -> anyhow::Result<P> {
        self()
    }
}

/// Run `factory` and wait at most `timeout` for the player.
///
/// On timeout the initializer thread is left to finish on its own; its
/// result is discarded.
pub fn initialize<F: PlayerFactory>(
    factory: F,
    timeout: Duration,
) -> Result<F::Player, SessionError> {
    let (tx, rx) = mpsc::channel();
    let started = Instant::now();

    thread::Builder::new()
        .name("player-init".to_string())
        .spawn(move || {
            // Ignore send errors (caller may have timed out)
            let _ = tx.send(factory.create());
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(player)) => {
            info!(elapsed_ms = started.elapsed().as_millis() as u64, "player ready");
            Ok(player)
        }
        Ok(Err(e)) => Err(SessionError::InitFailed {
            message: format!("{:#}", e),
        }),
        Err(RecvTimeoutError::Timeout) => Err(SessionError::InitTimeout { waited: timeout }),
        Err(RecvTimeoutError::Disconnected) => Err(SessionError::InitFailed {
            message: "initializer exited without producing a player".to_string(),
        }),
    }
}

/// Initialize the player and wrap it in a controller.
///
/// Failures are reported to the error listeners before being returned.
pub fn start<F: PlayerFactory>(
    factory: F,
    config: &Config,
    mut listeners: Listeners,
) -> Result<SeekRampController<F::Player>, SessionError> {
    let result = config
        .seek
        .settings()
        .map_err(SessionError::from)
        .and_then(|settings| {
            initialize(factory, config.session.init_timeout()).map(|player| (player, settings))
        });

    match result {
        Ok((player, settings)) => Ok(SeekRampController::new(player, settings, listeners)),
        Err(e) => {
            warn!(error = %e, "playback session failed to start");
            listeners.emit_error(&e.to_event());
            Err(e)
        }
    }
}
