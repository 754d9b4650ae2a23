//! Help overlay rendering.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║          seekramp Remote Help             ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space/p    Play / Pause                ║",
    "  ║    Enter      Play / Pause (OK button)    ║",
    "  ║                                           ║",
    "  ║  Seeking                                  ║",
    "  ║    <-/->      Skip back / forward         ║",
    "  ║    hold <-/-> Scrub, release to commit    ║",
    "  ║    ,/.        Rewind / Fast-forward       ║",
    "  ║                                           ║",
    "  ║  Seeking is disabled during ads and on    ║",
    "  ║  live streams.                            ║",
    "  ║                                           ║",
    "  ║  Controls                                 ║",
    "  ║    Up         Show controls               ║",
    "  ║    Down       Hide controls (when playing)║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    Esc        Back (exit the player)      ║",
    "  ║    q          Quit                        ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
///
/// # Arguments
/// * `term_height` - Terminal height in rows
///
/// # Returns
/// The row to start drawing the help box at, or 0 if the box does not fit
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
///
/// # Arguments
/// * `term_width` - Terminal width in columns
///
/// # Returns
/// The column to start drawing the help box at
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay.
///
/// Clears the screen and draws the centered help box.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `height` - Terminal height
pub fn render_help(stdout: &mut io::Stdout, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    execute!(stdout, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(col, start_row + i as u16),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
