//! Terminal rendering for the remote-control demo.
//!
//! Draws the header, the progress bar, the status bar and the help
//! overlay straight to stdout with ANSI sequences.

mod controls;
mod header;
mod help;
mod progress;
mod status;

pub use controls::ControlsOverlay;
pub use header::{build_header_text, render_header, MediaInfo, AD_DESCRIPTION, AD_TITLE};
pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, format_clock, render_progress_bar};
pub use status::{build_status_text, render_status_bar, StatusLine};
