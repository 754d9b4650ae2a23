//! Title/description header.
//!
//! During an ad break the media's title and description are replaced by
//! a fixed notice, and come back once the break is over.

use std::io::{self, Write};

use anyhow::Result;

/// Title shown while an ad plays.
pub const AD_TITLE: &str = "Advertisement";

/// Description shown while an ad plays.
pub const AD_DESCRIPTION: &str = "Your video will resume shortly.";

const WHITE: &str = "\x1b[97m";
const GREY: &str = "\x1b[37m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Title and description of the content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaInfo {
    pub title: String,
    pub description: String,
}

impl MediaInfo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The (title, description) pair to show right now.
    pub fn displayed(&self, ad_playing: bool) -> (&str, &str) {
        if ad_playing {
            (AD_TITLE, AD_DESCRIPTION)
        } else {
            (&self.title, &self.description)
        }
    }
}

/// Build the header text.
///
/// # Arguments
/// * `info` - Content title and description
/// * `ad_playing` - Whether an ad break is running
/// * `ended` - Whether playback reached the end
///
/// # Returns
/// Tuple of (title line, description line), both with color codes
pub fn build_header_text(info: &MediaInfo, ad_playing: bool, ended: bool) -> (String, String) {
    let (title, description) = info.displayed(ad_playing);
    let mut title_line = format!("{} {}", WHITE, title);
    if ended {
        title_line.push_str(&format!("{}  (ended)", YELLOW));
    }
    title_line.push_str(RESET);
    let description_line = format!("{} {}{}", GREY, description, RESET);
    (title_line, description_line)
}

/// Render the header on the first two rows.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `info` - Content title and description
/// * `ad_playing` - Whether an ad break is running
/// * `ended` - Whether playback reached the end
pub fn render_header(
    stdout: &mut io::Stdout,
    info: &MediaInfo,
    ad_playing: bool,
    ended: bool,
) -> Result<()> {
    let (title, description) = build_header_text(info, ad_playing, ended);
    write!(stdout, "\x1b[1;1H\x1b[2K{}\x1b[2;1H\x1b[2K{}", title, description)?;
    Ok(())
}
