//! seekramp - remote-control seek adapter for TV-style players
//!
//! Forwards d-pad button events to an external player as seek and
//! play/pause calls. Holding a direction scrubs a virtual position that
//! accelerates along a ramp schedule and is committed on release.
//!
//! # Modules
//!
//! - `seek`: the seek-ramp controller and its ramp arithmetic
//! - `status`: `videoStatus` / `error` notifications and listeners
//! - `player`: the player handle trait and a simulated player
//! - `session`: bounded-time player initialization
//! - `input`: button events, hold detection and routing
//! - `render`: terminal rendering for the demo
//! - `config`: configuration file handling
//! - `cli`: command line definitions
//!
//! # Example
//!
//! ```
//! use seekramp::player::SimulatedPlayer;
//! use seekramp::seek::{Direction, SeekRampController, SeekSettings};
//! use seekramp::status::StatusRecorder;
//!
//! let recorder = StatusRecorder::new();
//! let mut controller = SeekRampController::new(
//!     SimulatedPlayer::new(100.0),
//!     SeekSettings::default(),
//!     recorder.listeners(),
//! );
//!
//! for _ in 0..3 {
//!     controller.on_repeat_tick(Direction::Forward);
//! }
//! assert_eq!(controller.scrub().unwrap().virtual_position, 9.0);
//! assert_eq!(controller.on_release(), Some(0.0));
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod player;
pub mod render;
pub mod seek;
pub mod session;
pub mod status;

pub use config::Config;
pub use seek::{Direction, SeekRampController, SeekSettings};
