use super::{RepeatMode, Track};

/// A user or collaborator intent applied to [`PlayerState`](super::PlayerState).
///
/// One variant per container operation. No variant produces `Buffering`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    /// Load a track, rewinding progress and mirroring its duration
    SetCurrentTrack(Track),

    /// Replace the upcoming queue
    SetQueue(Vec<Track>),

    /// Append a track to the end of the queue
    Enqueue(Track),

    /// Start playback
    Play,

    /// Pause playback
    Pause,

    /// Stop and rewind
    Stop,

    /// Flip between playing and paused
    TogglePlayPause,

    /// Report the playback position in seconds
    UpdateProgress(u32),

    /// Set output volume
    SetVolume(f64),

    /// Flip shuffle
    ToggleShuffle,

    /// Set the repeat policy
    SetRepeatMode(RepeatMode),

    /// Flip the mini-player hint
    ToggleMinimized,

    /// Ask a resolver for the next track
    RequestNext,

    /// Ask a resolver for the previous track
    RequestPrevious,
}

impl PlayerAction {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetCurrentTrack(_) => "set_current_track",
            Self::SetQueue(_) => "set_queue",
            Self::Enqueue(_) => "enqueue",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Stop => "stop",
            Self::TogglePlayPause => "toggle_play_pause",
            Self::UpdateProgress(_) => "update_progress",
            Self::SetVolume(_) => "set_volume",
            Self::ToggleShuffle => "toggle_shuffle",
            Self::SetRepeatMode(_) => "set_repeat_mode",
            Self::ToggleMinimized => "toggle_minimized",
            Self::RequestNext => "request_next",
            Self::RequestPrevious => "request_previous",
        }
    }
}
