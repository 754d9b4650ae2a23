//! Progress bar rendering.
//!
//! Shows the position the listeners were last told about, so a scrub
//! moves the playhead before the player has seeked.

use std::io::{self, Write};

use anyhow::Result;

use crate::status::VideoStatus;

/// Format seconds as `MM:SS`, or `H:MM:SS` from one hour up.
///
/// # Arguments
/// * `seconds` - Time in seconds; negative values show as zero
///
/// # Returns
/// The formatted clock string
pub fn format_clock(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// Build the progress bar character array.
///
/// Ad cue points show as `◆`; the playhead `⏺` wins over a cue in the
/// same cell.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `current_time` - Position in seconds
/// * `duration` - Media duration in seconds (0 when unknown)
/// * `ad_cues` - Ad break positions in seconds
///
/// # Returns
/// Tuple of (bar characters, filled count)
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    duration: f64,
    ad_cues: &[f64],
) -> (Vec<char>, usize) {
    let progress = if duration > 0.0 {
        (current_time / duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;
    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    if duration > 0.0 {
        for cue in ad_cues {
            let pos = ((cue / duration) * bar_width as f64) as usize;
            if pos < bar_width && bar[pos] != '⏺' {
                bar[pos] = '◆';
            }
        }
    }

    (bar, filled)
}

/// Render the progress bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `status` - Last status sent to the listeners
/// * `ad_cues` - Ad break positions in seconds
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    status: &VideoStatus,
    ad_cues: &[f64],
) -> Result<()> {
    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    let time_display = format!(
        " {}/{}",
        format_clock(status.current_time),
        format_clock(status.duration)
    );
    let bar_width = (width as usize).saturating_sub(time_display.len() + 2);
    let (bar, filled) =
        build_progress_bar_chars(bar_width, status.current_time, status.duration, ad_cues);

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if c == '◆' {
            output.push_str(YELLOW);
            output.push(c);
            output.push_str(if i < filled { GREEN } else { DARK_GREY });
        } else if i < filled {
            output.push('━');
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(DARK_GREY);
        } else {
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;

    Ok(())
}
