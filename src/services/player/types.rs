use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Unique identifier for a track
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a track identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A playable audio item with metadata and a source locator.
///
/// Tracks are values: the player replaces them, it never edits one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Artwork reference (image URL)
    pub artwork: String,

    /// Source locator for a playback engine
    pub url: String,

    /// Length in whole seconds
    #[serde(rename = "duration")]
    pub duration_secs: u32,

    /// Album the track belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
}

/// Current playback phase of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Audio is playing
    Playing,

    /// Playback is paused at the current position
    #[default]
    Paused,

    /// A playback engine reported a stall
    Buffering,

    /// Playback is stopped and rewound
    Stopped,

    /// A next/previous request is waiting for a resolver
    Loading,
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Buffering => "buffering",
            Self::Stopped => "stopped",
            Self::Loading => "loading",
        };
        f.write_str(status)
    }
}

/// Policy for what repeats when the current track or queue runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Nothing repeats
    #[default]
    Off,

    /// The current track repeats
    Track,

    /// The whole queue repeats
    Queue,
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self {
            Self::Off => "off",
            Self::Track => "track",
            Self::Queue => "queue",
        };
        f.write_str(mode)
    }
}

impl FromStr for RepeatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "track" | "one" => Ok(Self::Track),
            "queue" | "all" => Ok(Self::Queue),
            other => Err(format!("unknown repeat mode '{other}' (expected off, track or queue)")),
        }
    }
}

/// Direction of a skip request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDirection {
    /// Advance to the next track
    Next,

    /// Go back to the previous track
    Previous,
}

impl fmt::Display for SkipDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("previous"),
        }
    }
}
