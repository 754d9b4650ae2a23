//! Command line definitions.
//!
//! Kept in the library so `xtask` can generate the man page from them.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::seek::Direction;

/// Version string: crate version, commit and build date.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("SEEKRAMP_BUILD_DATE"),
    ")"
);

/// Version string: crate version and build date.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SEEKRAMP_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "seekramp",
    version = VERSION,
    about = "Remote-control seek adapter with button-repeat scrub acceleration",
    long_about = "Drives a player with d-pad style input: taps skip, holds scrub along an \
                  accelerating ramp and commit on release."
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive terminal remote against a simulated player
    Play(PlayArgs),

    /// Run a scripted button sequence and print emitted events as JSON lines
    Simulate(SimulateArgs),

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Media duration in seconds
    #[arg(long, default_value_t = 600.0)]
    pub duration: f64,

    /// Start position in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Treat the media as a live stream (seeking disabled)
    #[arg(long)]
    pub live: bool,

    /// Schedule an ad break at this content position (seconds); repeatable
    #[arg(long = "ad-at", value_name = "SECS")]
    pub ad_at: Vec<f64>,

    /// Length of each ad break in seconds
    #[arg(long, default_value_t = 15.0)]
    pub ad_length: f64,

    /// Title shown above the player
    #[arg(long, default_value = "seekramp")]
    pub title: String,

    /// Description shown under the title
    #[arg(long, default_value = "Simulated player")]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Forward,
    Backward,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Forward => Direction::Forward,
            DirectionArg::Backward => Direction::Backward,
        }
    }
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Media duration in seconds
    #[arg(long, default_value_t = 100.0)]
    pub duration: f64,

    /// Start position in seconds
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// Direction of the held button
    #[arg(long, value_enum, default_value_t = DirectionArg::Forward)]
    pub direction: DirectionArg,

    /// Send a press before the repeat ticks
    #[arg(long)]
    pub press: bool,

    /// Number of repeat ticks
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,

    /// Do not release the button at the end
    #[arg(long)]
    pub no_release: bool,

    /// Treat the media as a live stream
    #[arg(long)]
    pub live: bool,

    /// Run the sequence while an ad break is playing
    #[arg(long)]
    pub ad: bool,

    /// Player has not reported a duration yet
    #[arg(long)]
    pub unknown_duration: bool,

    /// Override the configured skip length (seconds)
    #[arg(long)]
    pub skip: Option<f64>,
}
