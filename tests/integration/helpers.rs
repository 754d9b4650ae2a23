//! Shared helpers for integration tests

use std::path::Path;

use assert_cmd::Command;

use seekramp::player::SimulatedPlayer;
use seekramp::status::{StatusRecorder, VideoStatus};
use seekramp::{SeekRampController, SeekSettings};

/// Controller over a simulated player, with every emission recorded.
pub fn controller(
    player: SimulatedPlayer,
) -> (SeekRampController<SimulatedPlayer>, StatusRecorder) {
    let recorder = StatusRecorder::new();
    let ctl = SeekRampController::new(player, SeekSettings::default(), recorder.listeners());
    (ctl, recorder)
}

/// One `videoStatus` per line, in emission order.
pub fn status_log(statuses: &[VideoStatus]) -> String {
    statuses
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `seekramp` binary pointed at an explicit config file.
pub fn seekramp(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("seekramp").unwrap();
    cmd.arg("--config").arg(config).env("NO_COLOR", "1");
    cmd
}

/// Parse JSON-lines output.
pub fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}
