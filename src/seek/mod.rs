//! Seek-ramp controller.
//!
//! Turns directional button events into seeks on the player:
//!
//! - `ramp`: schedules and the per-tick position arithmetic
//! - `scrub`: direction and the state of an active scrub
//! - `controller`: the [`SeekRampController`] state machine
//!
//! # State machine
//!
//! ```text
//! Idle --press(dir)--> Idle                    single-step seek
//! Idle --repeat(dir)--> Scrubbing(dir)         virtual position starts at current time
//! Scrubbing --repeat(dir)--> Scrubbing         position and tier updated
//! Scrubbing --release--> Idle                  virtual position committed
//! ```

mod controller;
pub mod ramp;
mod scrub;

pub use controller::{ControllerState, SeekRampController, SeekSettings, TickOutcome};
pub use ramp::{next_scrub_position, RampError, RampProfile, RampSchedule, ScheduleKind};
pub use scrub::{Direction, ScrubState};
