use serde::{Deserialize, Serialize};

use super::{PlaybackStatus, PlayerAction, RepeatMode, Track};

/// The session's playback state.
///
/// Every transition is total: no operation fails and none performs I/O.
/// Numeric inputs are taken as given, so `progress_secs` may exceed
/// `duration_secs` and `volume` may leave `[0.0, 1.0]` if a caller supplies
/// such values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Loaded track, if any
    pub current_track: Option<Track>,

    /// Upcoming tracks, not including the current one
    pub queue: Vec<Track>,

    /// Playback phase
    pub status: PlaybackStatus,

    /// Whether shuffle is on
    pub shuffled: bool,

    /// Repeat policy
    pub repeat_mode: RepeatMode,

    /// Position within the current track in seconds
    pub progress_secs: u32,

    /// Duration of the current track, 0 when nothing is loaded
    pub duration_secs: u32,

    /// Output volume, nominally in `[0.0, 1.0]`
    pub volume: f64,

    /// View hint for the mini-player; no playback effect
    pub is_minimized: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_track: None,
            queue: Vec::new(),
            status: PlaybackStatus::Paused,
            shuffled: false,
            repeat_mode: RepeatMode::Off,
            progress_secs: 0,
            duration_secs: 0,
            volume: 1.0,
            is_minimized: true,
        }
    }
}

impl PlayerState {
    /// Seeds a session from a track list: the first track is loaded and the
    /// rest become the queue.
    pub fn from_tracks(tracks: impl IntoIterator<Item = Track>) -> Self {
        let mut tracks = tracks.into_iter();
        let mut state = Self::default();

        if let Some(first) = tracks.next() {
            state.set_current_track(first);
        }
        state.queue = tracks.collect();

        state
    }

    /// Applies an action and returns the next state.
    pub fn reduce(mut self, action: PlayerAction) -> Self {
        self.apply(action);
        self
    }

    /// Applies an action in place.
    pub fn apply(&mut self, action: PlayerAction) {
        match action {
            PlayerAction::SetCurrentTrack(track) => self.set_current_track(track),
            PlayerAction::SetQueue(tracks) => self.set_queue(tracks),
            PlayerAction::Enqueue(track) => self.enqueue(track),
            PlayerAction::Play => self.play(),
            PlayerAction::Pause => self.pause(),
            PlayerAction::Stop => self.stop(),
            PlayerAction::TogglePlayPause => self.toggle_play_pause(),
            PlayerAction::UpdateProgress(secs) => self.update_progress(secs),
            PlayerAction::SetVolume(volume) => self.set_volume(volume),
            PlayerAction::ToggleShuffle => self.toggle_shuffle(),
            PlayerAction::SetRepeatMode(mode) => self.set_repeat_mode(mode),
            PlayerAction::ToggleMinimized => self.toggle_minimized(),
            PlayerAction::RequestNext => self.request_next(),
            PlayerAction::RequestPrevious => self.request_previous(),
        }
    }

    /// Loads `track`, rewinds and mirrors its duration. Status is untouched.
    pub fn set_current_track(&mut self, track: Track) {
        self.progress_secs = 0;
        self.duration_secs = track.duration_secs;
        self.current_track = Some(track);
    }

    /// Replaces the queue wholesale.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
    }

    /// Appends to the end of the queue.
    pub fn enqueue(&mut self, track: Track) {
        self.queue.push(track);
    }

    /// Sets `Playing`, whether or not a track is loaded.
    pub fn play(&mut self) {
        self.status = PlaybackStatus::Playing;
    }

    /// Sets `Paused`.
    pub fn pause(&mut self) {
        self.status = PlaybackStatus::Paused;
    }

    /// Sets `Stopped` and rewinds.
    pub fn stop(&mut self) {
        self.status = PlaybackStatus::Stopped;
        self.progress_secs = 0;
    }

    /// Playing becomes paused; paused or stopped becomes playing.
    /// Buffering and loading are left alone.
    pub fn toggle_play_pause(&mut self) {
        match self.status {
            PlaybackStatus::Playing => self.status = PlaybackStatus::Paused,
            PlaybackStatus::Paused | PlaybackStatus::Stopped => {
                self.status = PlaybackStatus::Playing;
            }
            PlaybackStatus::Buffering | PlaybackStatus::Loading => {}
        }
    }

    /// Records the playback position. Not clamped to the duration.
    pub fn update_progress(&mut self, secs: u32) {
        self.progress_secs = secs;
    }

    /// Records the volume. Not clamped.
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    /// Flips shuffle.
    pub fn toggle_shuffle(&mut self) {
        self.shuffled = !self.shuffled;
    }

    /// Replaces the repeat policy.
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }

    /// Flips the mini-player hint.
    pub fn toggle_minimized(&mut self) {
        self.is_minimized = !self.is_minimized;
    }

    /// Signals that the next track is wanted. Only the status changes; a
    /// [`QueueResolver`](super::QueueResolver) does the actual advance.
    pub fn request_next(&mut self) {
        self.status = PlaybackStatus::Loading;
    }

    /// Signals that the previous track is wanted. See [`Self::request_next`].
    pub fn request_previous(&mut self) {
        self.status = PlaybackStatus::Loading;
    }

    /// Whether the status is `Playing`.
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Progress as a fraction of the duration, 0 when the duration is 0.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        f64::from(self.progress_secs) / f64::from(self.duration_secs)
    }
}
