//! Session start-up through the public API

use std::thread;
use std::time::Duration;

use seekramp::player::{PlayerHandle, SimulatedPlayer};
use seekramp::session::{self, SessionError};
use seekramp::status::{ErrorKind, StatusRecorder};
use seekramp::{Config, Direction};

#[test]
fn started_session_drives_the_player() {
    let recorder = StatusRecorder::new();
    let mut ctl = session::start(
        || anyhow::Ok(SimulatedPlayer::new(60.0)),
        &Config::default(),
        recorder.listeners(),
    )
    .unwrap();

    assert!(ctl.on_directional_press(Direction::Forward));
    assert_eq!(ctl.player().current_time(), Some(10.0));
    assert_eq!(recorder.statuses().len(), 2);
    assert!(recorder.errors().is_empty());
}

#[test]
fn slow_player_times_out_and_reports_error() {
    let mut config = Config::default();
    config.session.init_timeout_ms = 20;
    let recorder = StatusRecorder::new();

    let result = session::start(
        || {
            thread::sleep(Duration::from_millis(500));
            anyhow::Ok(SimulatedPlayer::new(60.0))
        },
        &config,
        recorder.listeners(),
    );

    assert!(matches!(result, Err(SessionError::InitTimeout { .. })));
    let errors = recorder.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ErrorKind::InitTimeout);
    assert_eq!(errors[0].context, "Player did not initialize within 20ms");
}

#[test]
fn invalid_settings_fail_before_player_creation() {
    let mut config = Config::default();
    config.seek.accelerating_ms.clear();
    let recorder = StatusRecorder::new();

    let result = session::start(
        || anyhow::Ok(SimulatedPlayer::new(60.0)),
        &config,
        recorder.listeners(),
    );

    assert!(matches!(result, Err(SessionError::Settings(_))));
    assert_eq!(recorder.errors()[0].kind, ErrorKind::InitFailed);
}
