use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use super::{
    PlaybackStatus, PlayerState, PlayerStore, RepeatMode, SkipDirection, Track, TrackId,
};

/// The track a resolver settled on, and the queue that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Track to load
    pub track: Track,

    /// Upcoming tracks after `track`
    pub queue: Vec<Track>,
}

/// Collaborator that turns next/previous requests into a concrete track.
///
/// The player never advances its own queue; it only signals with
/// `Loading`. Implementations see the state as it was when the request was
/// made and return `None` when there is nothing to move to.
pub trait QueueResolver: Send {
    /// Resolve a skip in `direction` against `state`.
    fn resolve(&mut self, direction: SkipDirection, state: &PlayerState) -> Option<Resolution>;
}

/// What a [`skip`] ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipOutcome {
    /// A track was loaded and the prior play/pause status restored
    Loaded(Track),

    /// The resolver had nothing; playback was stopped
    Ended,
}

/// Runs the skip protocol against a store.
///
/// Dispatches the request (status becomes `Loading`), asks `resolver` for a
/// track, loads it with its queue and restores playing if the player was
/// playing before the request, paused otherwise. When the resolver returns
/// nothing, playback stops.
///
/// A command that changes the status while the request is pending wins: the
/// resolved track is still loaded, but the status it set is kept.
#[instrument(skip(store, resolver))]
pub fn skip(
    store: &PlayerStore,
    resolver: &mut dyn QueueResolver,
    direction: SkipDirection,
) -> SkipOutcome {
    let mut pending = PendingSkip::new(direction);
    store.update(|state| pending.request(state));
    pending.settle(store, resolver)
}

/// A skip between its request and its resolution.
pub(super) struct PendingSkip {
    direction: SkipDirection,
    was_playing: bool,
    snapshot: PlayerState,
}

impl PendingSkip {
    pub(super) fn new(direction: SkipDirection) -> Self {
        Self {
            direction,
            was_playing: false,
            snapshot: PlayerState::default(),
        }
    }

    /// Marks `state` as loading. Call from inside a store update.
    pub(super) fn request(&mut self, state: &mut PlayerState) {
        self.was_playing = state.status == PlaybackStatus::Playing;
        match self.direction {
            SkipDirection::Next => state.request_next(),
            SkipDirection::Previous => state.request_previous(),
        }
        self.snapshot = state.clone();
    }

    /// Resolves against the state seen at request time and settles the store.
    pub(super) fn settle(
        self,
        store: &PlayerStore,
        resolver: &mut dyn QueueResolver,
    ) -> SkipOutcome {
        let Some(resolution) = resolver.resolve(self.direction, &self.snapshot) else {
            info!("Nothing to skip to, stopping playback");
            store.update(|state| {
                if state.status == PlaybackStatus::Loading {
                    state.stop();
                }
            });
            return SkipOutcome::Ended;
        };

        let track = resolution.track.clone();
        let was_playing = self.was_playing;
        store.update(|state| {
            state.set_current_track(resolution.track);
            state.set_queue(resolution.queue);
            match state.status {
                PlaybackStatus::Loading if was_playing => state.play(),
                PlaybackStatus::Loading => state.pause(),
                _ => debug!(status = %state.status, "Status changed while loading, keeping it"),
            }
        });

        debug!(track = %track.id, "Skip resolved");
        SkipOutcome::Loaded(track)
    }
}

/// Default resolver: walks the queue, remembers what was played, and honours
/// shuffle and repeat.
///
/// History only covers tracks this resolver moved past. If the current track
/// was replaced by something else since the last resolution, the history is
/// dropped. Replacing only the queue keeps it.
pub struct QueueAdvancer {
    history: Vec<Track>,
    current: Option<TrackId>,
    restart_threshold_secs: u32,
    rng: SmallRng,
}

impl QueueAdvancer {
    /// Creates a resolver. "Previous" restarts the current track once its
    /// progress is above `restart_threshold_secs`.
    pub fn new(restart_threshold_secs: u32) -> Self {
        Self::with_rng(restart_threshold_secs, SmallRng::from_entropy())
    }

    /// Creates a resolver with a fixed shuffle seed.
    pub fn with_seed(restart_threshold_secs: u32, seed: u64) -> Self {
        Self::with_rng(restart_threshold_secs, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(restart_threshold_secs: u32, rng: SmallRng) -> Self {
        Self {
            history: Vec::new(),
            current: None,
            restart_threshold_secs,
            rng,
        }
    }

    /// Tracks played before the current one, oldest first.
    pub fn history(&self) -> &[Track] {
        &self.history
    }

    fn next(&mut self, state: &PlayerState) -> Option<Resolution> {
        if state.repeat_mode == RepeatMode::Track {
            return restart(state);
        }

        let mut queue = state.queue.clone();
        if queue.is_empty() {
            if state.repeat_mode != RepeatMode::Queue {
                return None;
            }

            let mut cycle = std::mem::take(&mut self.history);
            cycle.extend(state.current_track.clone());
            if cycle.is_empty() {
                return None;
            }

            let track = cycle.remove(0);
            return Some(Resolution {
                track,
                queue: cycle,
            });
        }

        let index = if state.shuffled {
            self.rng.gen_range(0..queue.len())
        } else {
            0
        };
        let track = queue.remove(index);
        self.history.extend(state.current_track.clone());

        Some(Resolution { track, queue })
    }

    fn previous(&mut self, state: &PlayerState) -> Option<Resolution> {
        if state.progress_secs > self.restart_threshold_secs {
            return restart(state);
        }

        let Some(track) = self.history.pop() else {
            return restart(state);
        };

        let mut queue = state.queue.clone();
        if let Some(current) = state.current_track.clone() {
            queue.insert(0, current);
        }

        Some(Resolution { track, queue })
    }
}

impl QueueResolver for QueueAdvancer {
    fn resolve(&mut self, direction: SkipDirection, state: &PlayerState) -> Option<Resolution> {
        let current = state.current_track.as_ref().map(|track| &track.id);
        if self.current.as_ref() != current && !self.history.is_empty() {
            debug!(dropped = self.history.len(), "Current track changed elsewhere, clearing history");
            self.history.clear();
        }

        let resolution = match direction {
            SkipDirection::Next => self.next(state),
            SkipDirection::Previous => self.previous(state),
        };

        self.current = resolution
            .as_ref()
            .map(|resolution| resolution.track.id.clone())
            .or_else(|| current.cloned());
        resolution
    }
}

fn restart(state: &PlayerState) -> Option<Resolution> {
    state.current_track.clone().map(|track| Resolution {
        track,
        queue: state.queue.clone(),
    })
}
