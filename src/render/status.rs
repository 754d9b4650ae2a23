//! Status bar rendering.
//!
//! Shows the last emitted phase, the scrub ramp, ad/live flags and the
//! key hints.

use std::io::{self, Write};

use anyhow::Result;
use unicode_width::UnicodeWidthStr;

use crate::seek::{ControllerState, Direction, ScheduleKind};
use crate::status::StatusPhase;

/// Everything the status bar displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusLine {
    pub phase: Option<StatusPhase>,
    pub paused: bool,
    pub live: bool,
    pub ad_playing: bool,
    pub controller: ControllerState,
}

const WHITE: &str = "\x1b[97m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const DARK_GREY: &str = "\x1b[90m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Build the status bar text.
///
/// # Arguments
/// * `line` - What the status bar should show
///
/// # Returns
/// Tuple of (text with color codes, visible width)
pub fn build_status_text(line: &StatusLine) -> (String, usize) {
    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    let mut push = |output: &mut String, color: &str, text: &str| {
        output.push_str(color);
        output.push_str(text);
        visible_len += text.width();
    };

    push(&mut output, WHITE, " ");
    push(&mut output, WHITE, if line.paused { "⏸ " } else { "▶ " });

    if line.live {
        push(&mut output, RED, "[LIVE] ");
    }
    if line.ad_playing {
        push(&mut output, YELLOW, "[AD] ");
    }

    if let Some(phase) = line.phase {
        push(&mut output, DARK_GREY, "status:");
        push(&mut output, WHITE, &format!("{} ", phase));
    }

    if let ControllerState::Scrubbing {
        direction,
        schedule,
        speed_tier,
    } = line.controller
    {
        let arrows = match direction {
            Direction::Forward => ">>",
            Direction::Backward => "<<",
        };
        let ramp = match schedule {
            ScheduleKind::Accelerating => "acc",
            ScheduleKind::Decelerating => "dec",
        };
        push(&mut output, MAGENTA, &format!("{} {}:{} ", arrows, ramp, speed_tier));
    }

    push(&mut output, DARK_GREY, "│ ");
    for (key, label) in [
        ("←/→", ":seek "),
        ("hold", ":scrub "),
        ("space", if line.paused { ":play " } else { ":pause " }),
        ("?", ":hlp "),
        ("q", ":quit"),
    ] {
        push(&mut output, CYAN, key);
        push(&mut output, DARK_GREY, label);
    }

    (output, visible_len)
}

/// Render the status bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `line` - What the status bar should show
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    line: &StatusLine,
) -> Result<()> {
    let (text, visible_len) = build_status_text(line);

    let mut output = String::with_capacity(text.len() + width as usize + 16);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str(&text);

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));
    output.push_str(RESET);

    write!(stdout, "{}", output)?;
    Ok(())
}
