use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, info};

use super::{PlayerStore, QueueResolver, SkipDirection, SkipOutcome, resolver::PendingSkip};

/// A resolver shared between the ticker and the view layer.
pub type SharedResolver = Arc<Mutex<dyn QueueResolver>>;

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Not playing, or nothing loaded
    Idle,

    /// Progress moved to the given second
    Advanced(u32),

    /// The track reached its end and a next skip ran
    TrackEnded(SkipOutcome),
}

/// Simulated playback engine.
///
/// Stands in for a real decoder: while the player is `Playing` it reports one
/// second of progress per tick, and when a track runs out it asks the
/// resolver for the next one.
pub struct ProgressTicker {
    store: Arc<PlayerStore>,
    resolver: SharedResolver,
}

impl ProgressTicker {
    /// Creates a ticker driving `store`.
    pub fn new(store: Arc<PlayerStore>, resolver: SharedResolver) -> Self {
        Self { store, resolver }
    }

    /// Advances simulated playback by one second.
    ///
    /// The status check, the progress write and, at the end of a track, the
    /// next request all happen in one store update, so a stop or load that
    /// lands concurrently is never undone.
    pub async fn tick(&self) -> TickOutcome {
        let mut resolver = self.resolver.lock().await;

        let mut outcome = TickOutcome::Idle;
        let mut ended = false;
        let mut pending = PendingSkip::new(SkipDirection::Next);

        self.store.update(|state| {
            if !state.is_playing() || state.current_track.is_none() {
                return;
            }

            let progress = state.progress_secs.saturating_add(1);
            if progress < state.duration_secs {
                state.update_progress(progress);
                outcome = TickOutcome::Advanced(progress);
            } else {
                state.update_progress(state.duration_secs);
                pending.request(state);
                ended = true;
            }
        });

        if !ended {
            return outcome;
        }

        debug!("Track finished, advancing");
        TickOutcome::TrackEnded(pending.settle(&self.store, &mut *resolver))
    }

    /// Spawns the tick loop. Abort the handle to stop it.
    pub fn spawn(self, interval: Duration) -> JoinHandle<()> {
        info!(interval_ms = interval.as_millis() as u64, "Starting simulated playback");

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticks.tick().await;
                self.tick().await;
            }
        })
    }
}
