//! Formatting utilities for CLI output.
//!
//! Styled help text plus the text renderings of player and catalog state
//! that stand in for the screens.

use crate::services::player::{PlaybackStatus, PlayerState, RepeatMode};

const PROGRESS_BAR_WIDTH: usize = 24;

/// ANSI color codes for terminal output
pub struct Colors;

impl Colors {
    /// Reset all formatting
    pub const RESET: &'static str = "\x1b[0m";
    /// Bold text
    pub const BOLD: &'static str = "\x1b[1m";
    /// Dim text
    pub const DIM: &'static str = "\x1b[2m";

    /// Red color
    pub const RED: &'static str = "\x1b[31m";
    /// Green color
    pub const GREEN: &'static str = "\x1b[32m";
    /// Yellow color
    pub const YELLOW: &'static str = "\x1b[33m";
    /// Blue color
    pub const BLUE: &'static str = "\x1b[34m";
    /// Magenta color
    pub const MAGENTA: &'static str = "\x1b[35m";
    /// Cyan color
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Formats section headers with styling
pub fn format_header(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::CYAN, text, Colors::RESET)
}

/// Formats subheaders with styling
pub fn format_subheader(text: &str) -> String {
    format!(
        "{}{}{}{}",
        Colors::BOLD,
        Colors::YELLOW,
        text,
        Colors::RESET
    )
}

/// Formats command names with styling
pub fn format_command(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::GREEN, text, Colors::RESET)
}

/// Formats category names with styling
pub fn format_category(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::BLUE, text, Colors::RESET)
}

/// Formats descriptions with muted styling
pub fn format_description(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats usage examples with styling
pub fn format_usage(text: &str) -> String {
    format!("{}{}{}", Colors::DIM, text, Colors::RESET)
}

/// Formats error messages with red styling
pub fn format_error(text: &str) -> String {
    format!("{}{}{}{}", Colors::BOLD, Colors::RED, text, Colors::RESET)
}

/// Formats whole seconds as `m:ss`.
///
/// ```
/// use encore::cli::formatting::format_duration;
///
/// assert_eq!(format_duration(203), "3:23");
/// assert_eq!(format_duration(0), "0:00");
/// ```
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Renders a fixed-width progress bar for `fraction` in `0.0..=1.0`.
///
/// Fractions outside that range are drawn clamped; the state itself is
/// never touched.
pub fn format_progress_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(PROGRESS_BAR_WIDTH - filled)
    )
}

fn status_badge(status: PlaybackStatus) -> String {
    let color = match status {
        PlaybackStatus::Playing => Colors::GREEN,
        PlaybackStatus::Paused => Colors::YELLOW,
        PlaybackStatus::Stopped => Colors::RED,
        PlaybackStatus::Buffering | PlaybackStatus::Loading => Colors::MAGENTA,
    };
    format!("{}{}{}{}", Colors::BOLD, color, status, Colors::RESET)
}

/// Renders the player the way the full-screen player shows it.
pub fn format_now_playing(state: &PlayerState) -> String {
    let mut lines = Vec::new();

    match &state.current_track {
        Some(track) => {
            lines.push(format_header(&track.title));
            let mut byline = track.artist.clone();
            if let Some(album) = &track.album {
                byline.push_str(" · ");
                byline.push_str(album);
            }
            lines.push(format_description(&byline));
        }
        None => lines.push(format_description("Nothing loaded")),
    }

    lines.push(format!(
        "{} {} {}",
        format_duration(state.progress_secs),
        format_progress_bar(state.progress_fraction()),
        format_duration(state.duration_secs),
    ));

    let repeat = match state.repeat_mode {
        RepeatMode::Off => "off".to_string(),
        mode => format_command(&mode.to_string()),
    };
    let shuffle = if state.shuffled {
        format_command("on")
    } else {
        "off".to_string()
    };
    lines.push(format!(
        "{}  shuffle: {}  repeat: {}  volume: {:.2}{}",
        status_badge(state.status),
        shuffle,
        repeat,
        state.volume,
        if state.is_minimized { "  (mini)" } else { "" },
    ));

    lines.push(format!("Up next: {} track(s)", state.queue.len()));

    lines.join("\n")
}

/// Renders the mini-player line shown above the tab bar.
pub fn format_mini_player(state: &PlayerState) -> String {
    match &state.current_track {
        Some(track) => format!(
            "{} {} - {} {}/{}",
            status_badge(state.status),
            track.title,
            track.artist,
            format_duration(state.progress_secs),
            format_duration(state.duration_secs),
        ),
        None => format_description("Nothing loaded"),
    }
}
